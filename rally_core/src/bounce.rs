use glam::Vec3;

use crate::shot::clamp_vertical;
use crate::{BounceConfig, ShotConfig};

/// Outgoing velocity for a legal ground bounce.
///
/// Vertical speed is the larger of the restituted incoming downward speed
/// and a minimum bounce floor (higher for the first bounce after a serve).
/// The in-plane component is kept, scaled by `keep_horizontal`.
pub fn bounce_velocity(
    incoming: Vec3,
    ground_normal: Vec3,
    first_after_serve: bool,
    bounce: &BounceConfig,
    shot: &ShotConfig,
) -> Vec3 {
    let n = ground_normal.try_normalize().unwrap_or(Vec3::Y);
    let along = incoming.dot(n);
    let horizontal = (incoming - n * along) * bounce.keep_horizontal;

    let down_speed = (-along).max(0.0);
    let floor = if first_after_serve {
        bounce.first_bounce_min_up
    } else {
        bounce.min_bounce_up
    };
    let up_speed = (down_speed * bounce.restitution_y).max(floor);

    clamp_vertical(horizontal + n * up_speed, shot)
}
