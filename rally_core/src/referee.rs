//! Rally state machine.
//!
//! `RallyReferee` owns the ball, the score ledger and the court reference.
//! The physics layer feeds it contacts and the ball's continuous motion; the
//! referee classifies each contact through the ordered rule tables in
//! [`crate::rules`], rewrites the ball's velocity on legal bounces and
//! strikes, and settles finished rallies with the ledger.

use glam::Vec3;

use crate::bounce::bounce_velocity;
use crate::rules::{evaluate, NamedRule, RuleContext};
use crate::rules::{GROUND_RULES, NET_RULES, STRIKE_RULES, WALL_RULES};
use crate::{
    BallBody, Config, Contact, ContactKind, CourtGeometry, Events, Params, RallyOutcome,
    RallyPhase, RulesConfig, ScoreLedger, ShotResolver, Side, TwoBounce,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitKind {
    Real,
    Virtual,
}

#[derive(Debug)]
pub struct RallyReferee {
    court: CourtGeometry,
    config: Config,
    shots: ShotResolver,
    ball: BallBody,
    ledger: ScoreLedger,
    ignore_paddle_until: f32,
    serve_shield_until: f32,
}

impl RallyReferee {
    /// Build a referee and arm the first serve for the configured server
    pub fn new(config: Config) -> Self {
        Self::with_ledger(config, ScoreLedger::new(&config.scoring))
    }

    /// Same as [`RallyReferee::new`] with a caller-built ledger, so observers
    /// can be attached before the first rally
    pub fn with_ledger(config: Config, ledger: ScoreLedger) -> Self {
        let court = config.court;
        let server = ledger.current_server();
        let mut referee = Self {
            court,
            config,
            shots: ShotResolver::new(config.shot, court),
            ball: BallBody::new(server, court.serve_point(server)),
            ledger,
            ignore_paddle_until: 0.0,
            serve_shield_until: 0.0,
        };
        referee.reset_to_serve(server, 0.0);
        referee
    }

    pub fn court(&self) -> &CourtGeometry {
        &self.court
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball(&self) -> &BallBody {
        &self.ball
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut ScoreLedger {
        &mut self.ledger
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.config.rules
    }

    pub fn set_rules(&mut self, rules: RulesConfig) {
        self.config.rules = rules;
    }

    /// Collision-filter state: body contacts are dropped while shielded
    pub fn serve_shield_active(&self, now: f32) -> bool {
        now < self.serve_shield_until
    }

    pub fn accepts_body_contact(&self, now: f32) -> bool {
        self.config.rules.allow_body_hits && !self.serve_shield_active(now)
    }

    /// Where the ball is parked for a serve from `side`
    pub fn serve_position(&self, side: Side) -> Vec3 {
        let serve = &self.config.serve;
        let forward = self.court.axis_sign(side.opposite());
        self.court.serve_point(side)
            + Vec3::X * serve.offset.x
            + Vec3::Y * (serve.offset.y + serve.lift)
            + Vec3::Z * (forward * serve.offset.z)
    }

    /// Park the ball for a fresh serve from `side`
    pub fn reset_to_serve(&mut self, side: Side, now: f32) {
        let position = self.serve_position(side);
        self.ball.reset_for_serve(side, position);
        if !self.config.rules.enforce_two_bounce {
            self.ball.two_bounce = TwoBounce::Satisfied;
        }
        self.serve_shield_until = now + self.config.serve.shield_seconds;
        tracing::debug!(server = %side, z = position.z, "reset to serve");
    }

    /// Move serve to `side` in the ledger and re-arm the ball there
    pub fn force_reset_to_server_side(&mut self, side: Side, now: f32) {
        self.ledger.force_server(side);
        let server = self.ledger.current_server();
        self.reset_to_serve(server, now);
    }

    /// Serve without a paddle: launch the parked ball toward the receiver
    pub fn launch_serve(&mut self, events: &mut Events) -> bool {
        if self.ball.launched {
            return false;
        }
        let serve = &self.config.serve;
        let forward = self.court.axis_sign(self.ball.receiving_side());
        let angle = serve.launch_angle_deg.to_radians();
        let dir = Vec3::new(0.0, angle.sin(), forward * angle.cos());
        self.ball.velocity = dir * serve.launch_speed;
        self.ball.launched = true;
        self.ball.phase = RallyPhase::InPlay;
        events.serve_launched = true;
        tracing::debug!(server = %self.ball.serving_side, "serve launched");
        true
    }

    /// Continuous per-tick update from the physics layer
    pub fn track_flight(&mut self, position: Vec3, velocity: Vec3) {
        self.ball.position = position;
        self.ball.velocity = velocity;
        if let Some(from) = self.ball.awaiting_cross_net_from {
            if self.court.side_of(position) != from {
                self.ball.awaiting_cross_net_from = None;
                tracing::debug!(hitter = %from, "crossed net after hit");
            }
        }
    }

    /// Classify one physical contact. Returns the outcome if it ended the rally.
    pub fn handle_contact(
        &mut self,
        contact: &Contact,
        now: f32,
        events: &mut Events,
    ) -> Option<RallyOutcome> {
        match contact.kind {
            ContactKind::Ground => {
                events.ball_hit_ground = true;
                self.handle_ground(contact, now, events)
            }
            ContactKind::Wall => {
                events.ball_hit_wall = true;
                let side = self.court.side_of(contact.point);
                self.adjudicate(WALL_RULES, side, now, events)
            }
            ContactKind::Net => {
                events.ball_hit_net = true;
                let side = self.court.side_of(contact.point);
                self.adjudicate(NET_RULES, side, now, events)
            }
            ContactKind::Paddle => self.handle_paddle(contact, now, events),
            ContactKind::Body => {
                if !self.accepts_body_contact(now) {
                    tracing::trace!("body contact filtered");
                }
                None
            }
        }
    }

    /// Assisted strike request. Accepted only outside the hit cooldown and
    /// when the paddle closes on the ball fast enough.
    ///
    /// Returns whether the request was accepted. An accepted hit can still
    /// end the rally (a volley fault); that outcome lands in
    /// `events.rally_outcome`.
    pub fn try_virtual_hit(
        &mut self,
        paddle_pos: Vec3,
        paddle_vel: Vec3,
        min_closing_speed: f32,
        now: f32,
        events: &mut Events,
    ) -> bool {
        if now < self.ignore_paddle_until {
            return false;
        }
        let to_ball = self.ball.position - paddle_pos;
        let dist = to_ball.length();
        if dist <= Params::MIN_PADDLE_DISTANCE {
            return false;
        }
        let dir = to_ball / dist;
        if paddle_vel.dot(dir) < min_closing_speed {
            return false;
        }

        let hitter = self.court.side_of(paddle_pos);
        self.drop_serve_shield(now);
        self.strike(hitter, dir, HitKind::Virtual, now, events);
        true
    }

    fn handle_ground(
        &mut self,
        contact: &Contact,
        now: f32,
        events: &mut Events,
    ) -> Option<RallyOutcome> {
        let side = self.court.side_of(contact.point);
        if let Some(outcome) = self.adjudicate(GROUND_RULES, side, now, events) {
            return Some(outcome);
        }

        let ball = &mut self.ball;
        ball.velocity = bounce_velocity(
            ball.velocity,
            contact.normal,
            ball.first_ground_after_serve,
            &self.config.bounce,
            &self.config.shot,
        );
        if ball.last_ground_side == Some(side) {
            ball.same_side_bounce_count += 1;
        } else {
            ball.last_ground_side = Some(side);
            ball.same_side_bounce_count = 1;
        }
        ball.ground_bounce_count += 1;
        ball.first_ground_after_serve = false;
        ball.phase = RallyPhase::InPlay;
        debug_assert!(ball.check_invariants(), "ball invariants broken: {ball:?}");
        None
    }

    fn handle_paddle(
        &mut self,
        contact: &Contact,
        now: f32,
        events: &mut Events,
    ) -> Option<RallyOutcome> {
        self.drop_serve_shield(now);

        if now < self.ignore_paddle_until {
            tracing::trace!("paddle contact ignored during cooldown");
            return None;
        }

        let hitter = contact
            .other_side
            .unwrap_or_else(|| self.court.side_of(contact.point));
        self.strike(hitter, contact.normal, HitKind::Real, now, events)
    }

    fn strike(
        &mut self,
        hitter: Side,
        normal: Vec3,
        kind: HitKind,
        now: f32,
        events: &mut Events,
    ) -> Option<RallyOutcome> {
        if let Some(outcome) = self.adjudicate(STRIKE_RULES, hitter, now, events) {
            return Some(outcome);
        }

        let ball = &mut self.ball;
        ball.velocity = self
            .shots
            .resolve(ball.velocity, normal, hitter, ball.position);
        ball.launched = true;
        ball.phase = RallyPhase::InPlay;
        ball.last_hitter = Some(hitter);
        ball.awaiting_cross_net_from = Some(hitter);
        ball.ground_bounce_count = 0;
        ball.last_ground_side = None;
        ball.same_side_bounce_count = 0;

        let cooldown = match kind {
            HitKind::Real => {
                events.ball_hit_paddle = true;
                self.config.serve.post_real_hit_ignore
            }
            HitKind::Virtual => {
                events.virtual_hit = true;
                self.config.serve.post_virtual_hit_ignore
            }
        };
        self.ignore_paddle_until = now + cooldown;
        tracing::debug!(side = %hitter, ?kind, velocity = ?ball.velocity, "hit");
        debug_assert!(ball.check_invariants(), "ball invariants broken: {ball:?}");
        None
    }

    fn adjudicate(
        &mut self,
        rules: &[NamedRule],
        side: Side,
        now: f32,
        events: &mut Events,
    ) -> Option<RallyOutcome> {
        let ctx = RuleContext {
            side,
            rules: &self.config.rules,
        };
        let (rule, outcome) = evaluate(rules, &mut self.ball, &ctx)?;
        Some(self.conclude(rule, outcome, now, events))
    }

    fn conclude(
        &mut self,
        rule: &'static str,
        outcome: RallyOutcome,
        now: f32,
        events: &mut Events,
    ) -> RallyOutcome {
        tracing::info!(
            rule,
            winner = %outcome.winner,
            reason = ?outcome.reason,
            "rally ended"
        );
        let mut next = self.ledger.on_rally_ended(outcome.winner);
        if self.config.rules.always_serve_right {
            self.ledger.force_server(Side::Right);
            next = Side::Right;
        }
        self.reset_to_serve(next, now);
        events.rally_outcome = Some(outcome);
        outcome
    }

    fn drop_serve_shield(&mut self, now: f32) {
        if self.serve_shield_active(now) {
            tracing::debug!("serve shield dropped on first paddle contact");
            self.serve_shield_until = now;
            self.ignore_paddle_until = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutcomeReason, ScoringConfig};

    // Default court: Right plays on -Z, Left on +Z
    const RIGHT_Z: f32 = -10.0;
    const LEFT_Z: f32 = 10.0;

    fn referee_with(f: impl FnOnce(&mut Config)) -> RallyReferee {
        let mut config = Config::new();
        f(&mut config);
        RallyReferee::new(config)
    }

    fn ground(z: f32) -> Contact {
        Contact::ground(Vec3::new(0.0, 0.0, z))
    }

    fn paddle(side: Side, z: f32) -> Contact {
        let normal = Vec3::new(0.0, 0.0, -z.signum());
        Contact::paddle(side, Vec3::new(0.0, 1.0, z), normal)
    }

    /// Place the ball in flight on the given half, falling
    fn fly_at(referee: &mut RallyReferee, z: f32) {
        referee.track_flight(Vec3::new(0.0, 0.5, z), Vec3::new(0.0, -5.0, -z.signum() * 10.0));
    }

    #[test]
    fn test_new_referee_parks_ball_at_server() {
        let referee = RallyReferee::new(Config::new());
        let ball = referee.ball();
        assert_eq!(ball.serving_side, Side::Right);
        assert_eq!(ball.phase, RallyPhase::Serve);
        assert!(!ball.launched);
        assert_eq!(referee.court().side_of(ball.position), Side::Right);
        assert!(ball.position.y > 1.0, "Serve height includes offset and lift");
        assert!(referee.serve_shield_active(0.1));
        assert!(!referee.serve_shield_active(0.5));
    }

    #[test]
    fn test_launch_serve_heads_for_receiver() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        assert!(referee.launch_serve(&mut events));
        assert!(events.serve_launched);
        let v = referee.ball().velocity;
        assert!(v.z > 0.0, "Right serves toward +Z, got {v:?}");
        assert!(v.y > 0.0);
        assert!((v.length() - Params::SERVE_LAUNCH_SPEED).abs() < 1e-3);
        assert!(!referee.launch_serve(&mut events), "Second launch is ignored");
    }

    #[test]
    fn test_serve_landing_on_server_side_is_fault() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, RIGHT_Z);

        let outcome = referee
            .handle_contact(&ground(RIGHT_Z), 1.0, &mut events)
            .expect("serve fault");

        assert_eq!(outcome, RallyOutcome::new(Side::Left, OutcomeReason::ServeFault));
        assert_eq!(events.rally_outcome, Some(outcome));
        assert_eq!(referee.ball().phase, RallyPhase::Serve, "Re-armed for serve");
    }

    #[test]
    fn test_legal_serve_bounce_updates_bookkeeping() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, LEFT_Z);

        assert!(referee.handle_contact(&ground(LEFT_Z), 1.0, &mut events).is_none());

        let ball = referee.ball();
        assert!(events.ball_hit_ground);
        assert_eq!(ball.ground_bounce_count, 1);
        assert_eq!(ball.last_ground_side, Some(Side::Left));
        assert!(!ball.first_ground_after_serve);
        assert_eq!(ball.two_bounce, TwoBounce::AwaitReceiverReturn);
        assert_eq!(ball.velocity.y, Params::FIRST_BOUNCE_MIN_UP, "First bounce floor");
    }

    #[test]
    fn test_double_bounce_ends_rally() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, LEFT_Z);
        referee.handle_contact(&ground(LEFT_Z), 1.0, &mut events);
        fly_at(&mut referee, LEFT_Z + 3.0);

        let outcome = referee
            .handle_contact(&ground(LEFT_Z + 3.0), 1.5, &mut events)
            .expect("double bounce");

        assert_eq!(outcome, RallyOutcome::new(Side::Right, OutcomeReason::DoubleBounce));
        assert_eq!(referee.ledger().right_score(), 1, "Server scores under side-out");
    }

    #[test]
    fn test_receiver_volley_is_fault() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, LEFT_Z);

        let outcome = referee
            .handle_contact(&paddle(Side::Left, LEFT_Z), 1.0, &mut events)
            .expect("volley fault");

        assert_eq!(outcome, RallyOutcome::new(Side::Right, OutcomeReason::VolleyFault));
    }

    #[test]
    fn test_strike_sets_crossing_requirement() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);

        let outcome = referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.0, &mut events);

        assert!(outcome.is_none());
        assert!(events.ball_hit_paddle);
        let ball = referee.ball();
        assert!(ball.launched);
        assert_eq!(ball.last_hitter, Some(Side::Right));
        assert_eq!(ball.awaiting_cross_net_from, Some(Side::Right));
        assert_eq!(ball.ground_bounce_count, 0);
        assert!(ball.velocity.z > 0.0, "Struck toward Left");
    }

    #[test]
    fn test_paddle_serve_landing_on_server_side_is_serve_fault() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);
        referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.0, &mut events);
        fly_at(&mut referee, RIGHT_Z + 2.0);

        let outcome = referee
            .handle_contact(&ground(RIGHT_Z + 2.0), 1.5, &mut events)
            .expect("serve fault");

        assert_eq!(outcome, RallyOutcome::new(Side::Left, OutcomeReason::ServeFault));
    }

    #[test]
    fn test_return_landing_back_on_hitter_side_ends_rally() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);
        referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.0, &mut events);
        fly_at(&mut referee, LEFT_Z);
        assert!(referee.handle_contact(&ground(LEFT_Z), 1.5, &mut events).is_none());
        assert!(referee.handle_contact(&paddle(Side::Left, LEFT_Z), 2.0, &mut events).is_none());
        fly_at(&mut referee, LEFT_Z - 2.0);

        let outcome = referee
            .handle_contact(&ground(LEFT_Z - 2.0), 2.5, &mut events)
            .expect("return never crossed");

        assert_eq!(outcome, RallyOutcome::new(Side::Right, OutcomeReason::Standard));
    }

    #[test]
    fn test_crossing_clears_requirement_continuously() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);
        referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.0, &mut events);

        referee.track_flight(Vec3::new(0.0, 2.0, -0.5), Vec3::new(0.0, 1.0, 20.0));
        assert_eq!(referee.ball().awaiting_cross_net_from, Some(Side::Right));
        referee.track_flight(Vec3::new(0.0, 2.0, 0.5), Vec3::new(0.0, 1.0, 20.0));
        assert_eq!(referee.ball().awaiting_cross_net_from, None);
    }

    #[test]
    fn test_paddle_cooldown_suppresses_duplicates() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);
        referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.0, &mut events);
        let after_first = *referee.ball();

        events.clear();
        referee.track_flight(after_first.position, Vec3::new(0.0, 0.0, -3.0));
        let outcome = referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.02, &mut events);

        assert!(outcome.is_none());
        assert!(!events.ball_hit_paddle, "Duplicate contact ignored");
        assert_eq!(referee.ball().velocity, Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn test_wall_before_bounce_is_out() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);
        referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 1.0, &mut events);
        referee.track_flight(Vec3::new(0.0, 3.0, 44.0), Vec3::new(0.0, 0.0, 30.0));

        let wall = Contact::wall(Vec3::new(0.0, 3.0, 45.0), Vec3::new(0.0, 0.0, -1.0));
        let outcome = referee
            .handle_contact(&wall, 2.0, &mut events)
            .expect("wall out");

        assert_eq!(outcome, RallyOutcome::new(Side::Left, OutcomeReason::WallOut));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_after_bounce_on_opponent_rewards_striker() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, LEFT_Z);
        referee.handle_contact(&ground(LEFT_Z), 1.0, &mut events);

        let wall = Contact::wall(Vec3::new(0.0, 3.0, 45.0), Vec3::new(0.0, 0.0, -1.0));
        let outcome = referee
            .handle_contact(&wall, 1.5, &mut events)
            .expect("wall decides");

        assert_eq!(outcome, RallyOutcome::new(Side::Right, OutcomeReason::Standard));
    }

    #[test]
    fn test_net_touch_without_net_fault_is_let_play() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        let net = Contact::net(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(referee.handle_contact(&net, 1.0, &mut events).is_none());
        assert!(events.ball_hit_net);
        assert!(referee.ball().launched, "Rally continues");
    }

    #[test]
    fn test_net_touch_with_net_fault_charges_striker() {
        let mut referee = referee_with(|c| c.rules.net_fault = true);
        let mut events = Events::new();
        referee.reset_to_serve(Side::Left, 0.0);
        fly_at(&mut referee, LEFT_Z);
        referee.handle_contact(&paddle(Side::Left, LEFT_Z), 1.0, &mut events);

        let net = Contact::net(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let outcome = referee
            .handle_contact(&net, 1.2, &mut events)
            .expect("net fault");
        assert_eq!(outcome, RallyOutcome::new(Side::Right, OutcomeReason::NetFault));
    }

    #[test]
    fn test_virtual_hit_acceptance() {
        let mut referee = RallyReferee::new(Config::new());
        let mut events = Events::new();
        let ball_pos = Vec3::new(0.0, 1.0, RIGHT_Z);
        referee.track_flight(ball_pos, Vec3::ZERO);
        let paddle_pos = ball_pos - Vec3::new(0.0, 0.0, 0.5);

        let toward = Vec3::new(0.0, 0.0, 5.0);
        assert!(
            !referee.try_virtual_hit(paddle_pos, -toward, 1.0, 1.0, &mut events),
            "Paddle moving away is rejected"
        );
        assert!(
            !referee.try_virtual_hit(ball_pos, toward, 1.0, 1.0, &mut events),
            "Paddle at the ball centre is rejected"
        );
        assert!(referee.try_virtual_hit(paddle_pos, toward, 1.0, 1.0, &mut events));
        assert!(events.virtual_hit);
        assert_eq!(referee.ball().last_hitter, Some(Side::Right));
        assert!(referee.ball().velocity.z > 0.0);

        assert!(
            !referee.try_virtual_hit(paddle_pos, toward, 1.0, 1.05, &mut events),
            "Cooldown rejects a second request"
        );
        assert!(referee.try_virtual_hit(paddle_pos, toward, 1.0, 1.2, &mut events));
    }

    #[test]
    fn test_serve_shield_filters_body_contacts() {
        let mut referee = referee_with(|c| c.rules.allow_body_hits = true);
        assert!(!referee.accepts_body_contact(0.05), "Shielded right after serve reset");
        assert!(referee.accepts_body_contact(0.5), "Shield expires");

        referee.reset_to_serve(Side::Right, 10.0);
        assert!(!referee.accepts_body_contact(10.05));
        let mut events = Events::new();
        fly_at(&mut referee, RIGHT_Z);
        referee.handle_contact(&paddle(Side::Right, RIGHT_Z), 10.06, &mut events);
        assert!(referee.accepts_body_contact(10.07), "First paddle contact drops the shield");

        let body = Contact::body(Side::Left, Vec3::new(0.0, 1.0, LEFT_Z), Vec3::Z);
        assert!(referee.handle_contact(&body, 10.1, &mut events).is_none());
    }

    #[test]
    fn test_body_hits_disallowed_are_never_accepted() {
        let referee = RallyReferee::new(Config::new());
        assert!(!referee.accepts_body_contact(100.0));
    }

    #[test]
    fn test_always_serve_right_overrides_next_server() {
        let mut referee = referee_with(|c| {
            c.rules.always_serve_right = true;
            c.scoring = ScoringConfig {
                rally_scoring: true,
                ..ScoringConfig::default()
            };
        });
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, RIGHT_Z);
        let outcome = referee
            .handle_contact(&ground(RIGHT_Z), 1.0, &mut events)
            .expect("serve fault");
        assert_eq!(outcome.winner, Side::Left);
        assert_eq!(referee.ledger().left_score(), 1, "Point still recorded");
        assert_eq!(referee.ball().serving_side, Side::Right);
        assert_eq!(referee.ledger().current_server(), Side::Right);
    }

    #[test]
    fn test_two_bounce_disabled_allows_receiver_volley() {
        let mut referee = referee_with(|c| c.rules.enforce_two_bounce = false);
        let mut events = Events::new();
        referee.launch_serve(&mut events);
        fly_at(&mut referee, LEFT_Z);
        assert!(referee
            .handle_contact(&paddle(Side::Left, LEFT_Z), 1.0, &mut events)
            .is_none());
        assert_eq!(referee.ball().two_bounce, TwoBounce::Satisfied);
    }

    #[test]
    fn test_force_reset_respects_lock() {
        let mut referee = referee_with(|c| c.scoring.server_lock = Some(Side::Right));
        referee.force_reset_to_server_side(Side::Left, 3.0);
        assert_eq!(referee.ball().serving_side, Side::Right);
        assert_eq!(referee.ledger().current_server(), Side::Right);
    }
}
