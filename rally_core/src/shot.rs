use glam::Vec3;

use crate::{CourtGeometry, Params, ShotConfig, Side};

/// Clamp vertical speed to the asymmetric up/down bounds
pub fn clamp_vertical(mut v: Vec3, config: &ShotConfig) -> Vec3 {
    v.y = v.y.clamp(-config.max_down_vel, config.max_up_vel);
    v
}

/// Reflect `v` across the plane with unit normal `n`
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Computes outgoing velocity for a strike: physical reflection blended
/// with aim assist, then floored and clamped. Deterministic.
#[derive(Debug, Clone, Copy)]
pub struct ShotResolver {
    pub config: ShotConfig,
    pub court: CourtGeometry,
}

impl ShotResolver {
    pub fn new(config: ShotConfig, court: CourtGeometry) -> Self {
        Self { config, court }
    }

    pub fn resolve(&self, incoming: Vec3, normal: Vec3, hitter: Side, position: Vec3) -> Vec3 {
        let cfg = &self.config;
        let target_side = hitter.opposite();
        let z_target = self.court.target_axis_for(target_side);
        let sign_to_opp = if z_target - position.z >= 0.0 { 1.0 } else { -1.0 };
        let toward_opp = Vec3::new(0.0, 0.0, sign_to_opp);

        let normal = match normal.try_normalize() {
            Some(n) => n,
            None => {
                tracing::warn!(?normal, "degenerate contact normal; using forward axis");
                toward_opp
            }
        };

        // A hit taken at rest still needs a direction to reflect
        let incoming = if incoming.length_squared() < Params::REST_SPEED_SQ {
            -normal * 0.001
        } else {
            incoming
        };

        let reflected = reflect(incoming, normal)
            .try_normalize()
            .unwrap_or(toward_opp);

        let aim = (Vec3::new(0.0, 0.0, z_target) - position)
            .try_normalize()
            .unwrap_or(toward_opp);

        let mut dir = reflected.lerp(aim, cfg.aim_assist_blend);
        dir.x *= 1.0 - cfg.center_x_bias;

        if dir.y < cfg.min_hit_up {
            dir.y = cfg.min_hit_up;
        }
        if dir.z * sign_to_opp < cfg.min_forward {
            dir.z = sign_to_opp * cfg.min_forward;
        }
        let dir = dir.try_normalize().unwrap_or(toward_opp);

        let speed = cfg.target_speed.max(cfg.min_launch_speed);
        let mut v = dir * speed + Vec3::Y * cfg.loft;

        if self.court.distance_to_net(position) <= cfg.near_net_distance {
            v += dir * cfg.near_net_speed_boost;
        }

        if v.length() < cfg.min_launch_speed {
            v = dir * cfg.min_launch_speed + Vec3::Y * cfg.loft;
        }

        clamp_vertical(v, cfg)
    }
}
