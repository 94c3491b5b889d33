//! Rally rule checks.
//!
//! Each check looks at one contact and either lets play continue (`None`)
//! or ends the rally. Checks may advance rally bookkeeping (two-bounce
//! progress, cross-net clearing). The tables below fix evaluation order
//! per contact kind; the first check that returns an outcome wins.

use crate::{BallBody, OutcomeReason, RallyOutcome, RulesConfig, Side, TwoBounce};

/// What a rule check needs to know about the contact
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Court half the contact belongs to (hitter side for strikes)
    pub side: Side,
    pub rules: &'a RulesConfig,
}

pub type RuleCheck = fn(&mut BallBody, &RuleContext) -> Option<RallyOutcome>;

#[derive(Clone, Copy)]
pub struct NamedRule {
    pub name: &'static str,
    pub check: RuleCheck,
}

pub const GROUND_RULES: &[NamedRule] = &[
    NamedRule { name: "cross_net", check: cross_net },
    NamedRule { name: "serve_first_bounce", check: serve_first_bounce },
    NamedRule { name: "two_bounce_ground", check: two_bounce_ground },
    NamedRule { name: "double_bounce", check: double_bounce },
];

pub const WALL_RULES: &[NamedRule] = &[
    NamedRule { name: "cross_net", check: cross_net },
    NamedRule { name: "wall_contact", check: wall_contact },
];

pub const NET_RULES: &[NamedRule] = &[NamedRule { name: "net_contact", check: net_contact }];

pub const STRIKE_RULES: &[NamedRule] = &[NamedRule {
    name: "two_bounce_volley",
    check: two_bounce_volley,
}];

/// Run `rules` in order, stopping at the first outcome
pub fn evaluate(
    rules: &[NamedRule],
    ball: &mut BallBody,
    ctx: &RuleContext,
) -> Option<(&'static str, RallyOutcome)> {
    rules
        .iter()
        .find_map(|rule| (rule.check)(ball, ctx).map(|outcome| (rule.name, outcome)))
}

/// A struck ball must reach the far half before touching down again.
/// A serve that never leaves the server's half is a serve fault.
pub fn cross_net(ball: &mut BallBody, ctx: &RuleContext) -> Option<RallyOutcome> {
    let from = ball.awaiting_cross_net_from?;
    if ctx.side == from {
        let reason = if ball.first_ground_after_serve && from == ball.serving_side {
            OutcomeReason::ServeFault
        } else {
            OutcomeReason::Standard
        };
        return Some(RallyOutcome::new(from.opposite(), reason));
    }
    ball.awaiting_cross_net_from = None;
    None
}

/// The serve must land on the receiver's half
pub fn serve_first_bounce(ball: &mut BallBody, ctx: &RuleContext) -> Option<RallyOutcome> {
    if ball.first_ground_after_serve && ctx.side == ball.serving_side {
        return Some(RallyOutcome::new(ball.receiving_side(), OutcomeReason::ServeFault));
    }
    None
}

pub fn two_bounce_ground(ball: &mut BallBody, ctx: &RuleContext) -> Option<RallyOutcome> {
    if !ctx.rules.enforce_two_bounce {
        return None;
    }
    match ball.two_bounce {
        TwoBounce::AwaitReceiverBounce => {
            if ctx.side == ball.receiving_side() {
                ball.two_bounce = TwoBounce::AwaitReceiverReturn;
                None
            } else {
                Some(RallyOutcome::new(ball.receiving_side(), OutcomeReason::ServeFault))
            }
        }
        TwoBounce::AwaitServerBounce => {
            if ctx.side == ball.serving_side {
                ball.two_bounce = TwoBounce::Satisfied;
                None
            } else {
                // Return never reached the server's half
                Some(RallyOutcome::new(ball.serving_side, OutcomeReason::ServeFault))
            }
        }
        TwoBounce::AwaitReceiverReturn | TwoBounce::Satisfied => None,
    }
}

pub fn double_bounce(ball: &mut BallBody, ctx: &RuleContext) -> Option<RallyOutcome> {
    if ball.last_ground_side == Some(ctx.side) && ball.same_side_bounce_count >= 1 {
        return Some(RallyOutcome::new(ctx.side.opposite(), OutcomeReason::DoubleBounce));
    }
    None
}

/// Walls are out unless the ball already bounced on the striker's
/// opponent's half
pub fn wall_contact(ball: &mut BallBody, _ctx: &RuleContext) -> Option<RallyOutcome> {
    let striker = ball.striker();
    let outcome = if ball.ground_bounce_count == 0 {
        RallyOutcome::new(striker.opposite(), OutcomeReason::WallOut)
    } else if ball.last_ground_side == Some(striker.opposite()) {
        RallyOutcome::new(striker, OutcomeReason::Standard)
    } else {
        RallyOutcome::new(striker.opposite(), OutcomeReason::WallOut)
    };
    Some(outcome)
}

pub fn net_contact(ball: &mut BallBody, ctx: &RuleContext) -> Option<RallyOutcome> {
    if !ctx.rules.net_fault {
        return None;
    }
    Some(RallyOutcome::new(ball.striker().opposite(), OutcomeReason::NetFault))
}

/// Volleys by a side that still owes a bounce are faults. The receiver's
/// return arms the server's bounce requirement.
pub fn two_bounce_volley(ball: &mut BallBody, ctx: &RuleContext) -> Option<RallyOutcome> {
    if !ctx.rules.enforce_two_bounce {
        return None;
    }
    let hitter = ctx.side;
    match ball.two_bounce {
        TwoBounce::AwaitReceiverBounce if hitter == ball.receiving_side() => Some(
            RallyOutcome::new(ball.serving_side, OutcomeReason::VolleyFault),
        ),
        TwoBounce::AwaitServerBounce if hitter == ball.serving_side => Some(RallyOutcome::new(
            ball.receiving_side(),
            OutcomeReason::VolleyFault,
        )),
        TwoBounce::AwaitReceiverReturn if hitter == ball.receiving_side() => {
            ball.two_bounce = TwoBounce::AwaitServerBounce;
            None
        }
        _ => None,
    }
}
