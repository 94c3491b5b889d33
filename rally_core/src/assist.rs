use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Events, Params, RallyReferee};

/// Invisible enlarged paddle for the Easy difficulty.
///
/// Samples the paddle once per fixed step, derives its velocity from the
/// previous sample, and asks the referee for a virtual hit whenever the ball
/// is inside `radius`. Cooldown and closing-speed checks belong to the
/// referee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasyHitAssist {
    pub radius: f32,
    pub min_closing_speed: f32,
    #[serde(skip)]
    prev_pos: Option<Vec3>,
}

impl Default for EasyHitAssist {
    fn default() -> Self {
        Self {
            radius: Params::EASY_HIT_RADIUS,
            min_closing_speed: Params::EASY_HIT_MIN_CLOSING_SPEED,
            prev_pos: None,
        }
    }
}

impl EasyHitAssist {
    pub fn new(radius: f32, min_closing_speed: f32) -> Self {
        Self {
            radius,
            min_closing_speed,
            prev_pos: None,
        }
    }

    /// Forget the previous sample, e.g. after the paddle was teleported
    pub fn reset(&mut self) {
        self.prev_pos = None;
    }

    pub fn update(
        &mut self,
        paddle_pos: Vec3,
        dt: f32,
        referee: &mut RallyReferee,
        now: f32,
        events: &mut Events,
    ) -> bool {
        let prev = self.prev_pos.replace(paddle_pos).unwrap_or(paddle_pos);
        let velocity = (paddle_pos - prev) / dt.max(1e-5);

        let to_ball = referee.ball().position - paddle_pos;
        if to_ball.length_squared() > self.radius * self.radius {
            return false;
        }

        let hit =
            referee.try_virtual_hit(paddle_pos, velocity, self.min_closing_speed, now, events);
        if hit {
            match events.rally_outcome {
                Some(outcome) => tracing::debug!(
                    ?paddle_pos,
                    winner = %outcome.winner,
                    reason = ?outcome.reason,
                    "easy-hit assist faulted"
                ),
                None => tracing::debug!(?paddle_pos, ?velocity, "easy-hit assist struck"),
            }
        }
        hit
    }
}
