use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Scoreboard sign convention: -1 = Left, +1 = Right
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Non-negative signs map to Right
    pub fn from_sign(sign: i32) -> Self {
        if sign >= 0 {
            Side::Right
        } else {
            Side::Left
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Coarse rally phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Ball parked at the serve point, waiting for the serve
    Serve,
    /// Ball has been served or struck
    InPlay,
}

/// Two-bounce rule progress for the current rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwoBounce {
    /// Serve must bounce once on the receiver's side
    AwaitReceiverBounce,
    /// Receiver bounce done, waiting for the return
    AwaitReceiverReturn,
    /// Return must bounce once on the server's side
    AwaitServerBounce,
    /// Volleys are legal for the rest of the rally
    Satisfied,
}

/// Why a rally ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeReason {
    DoubleBounce,
    ServeFault,
    WallOut,
    NetFault,
    VolleyFault,
    Standard,
}

/// Result of a finished rally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RallyOutcome {
    pub winner: Side,
    pub reason: OutcomeReason,
}

impl RallyOutcome {
    pub fn new(winner: Side, reason: OutcomeReason) -> Self {
        Self { winner, reason }
    }
}

/// The ball and everything the rules track about it
#[derive(Debug, Clone, Copy)]
pub struct BallBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub phase: RallyPhase,
    pub serving_side: Side,
    pub ground_bounce_count: u32, // since the last strike
    pub last_hitter: Option<Side>,
    pub awaiting_cross_net_from: Option<Side>,
    pub first_ground_after_serve: bool,
    pub last_ground_side: Option<Side>,
    pub same_side_bounce_count: u32,
    pub two_bounce: TwoBounce,
    pub launched: bool, // gravity applies once launched
}

impl BallBody {
    pub fn new(serving_side: Side, position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            phase: RallyPhase::Serve,
            serving_side,
            ground_bounce_count: 0,
            last_hitter: None,
            awaiting_cross_net_from: None,
            first_ground_after_serve: true,
            last_ground_side: None,
            same_side_bounce_count: 0,
            two_bounce: TwoBounce::AwaitReceiverBounce,
            launched: false,
        }
    }

    /// Re-arm for a fresh serve from `serving_side`
    pub fn reset_for_serve(&mut self, serving_side: Side, position: Vec3) {
        *self = Self::new(serving_side, position);
    }

    pub fn receiving_side(&self) -> Side {
        self.serving_side.opposite()
    }

    pub fn need_bounce_on_receiver(&self) -> bool {
        self.two_bounce == TwoBounce::AwaitReceiverBounce
    }

    pub fn need_bounce_on_server(&self) -> bool {
        self.two_bounce == TwoBounce::AwaitServerBounce
    }

    pub fn serve_receiver_bounce_done(&self) -> bool {
        !self.need_bounce_on_receiver()
    }

    /// Whether `side` still owes a bounce before it may volley
    pub fn must_bounce_before_volley(&self, side: Side) -> bool {
        (self.need_bounce_on_receiver() && side == self.receiving_side())
            || (self.need_bounce_on_server() && side == self.serving_side)
    }

    /// The side charged with the last strike (server before any strike)
    pub fn striker(&self) -> Side {
        self.last_hitter.unwrap_or(self.serving_side)
    }

    pub fn check_invariants(&self) -> bool {
        let crossing_follows_strike =
            self.awaiting_cross_net_from.is_none() || self.last_hitter.is_some();
        let parked_at_rest = self.phase == RallyPhase::InPlay || !self.launched;
        crossing_follows_strike && parked_at_rest
    }
}
