use glam::Vec3;
use hecs::World;
use rand::Rng;
use rally_core::{BallBody, CourtGeometry, Side, Time};

use crate::{GameRng, Paddle, PaddleBrain, SimConfig, SimParams};

/// Keep a paddle target on its own half, above the floor and inside the side lines
pub fn clamp_to_half(mut target: Vec3, side: Side, court: &CourtGeometry) -> Vec3 {
    target.x = target.x.clamp(-court.half_width, court.half_width);
    target.y = target
        .y
        .clamp(SimParams::PADDLE_MIN_HEIGHT, SimParams::PADDLE_MAX_HEIGHT);
    let sign = court.axis_sign(side);
    let depth =
        ((target.z - court.net_z) * sign).clamp(SimParams::PADDLE_NET_GAP, court.half_length);
    target.z = court.net_z + sign * depth;
    target
}

/// Where a brain wants its paddle this step. It only chases balls it may
/// legally strike: launched, coming to its half, not its own shot, and not
/// owing a bounce.
pub fn brain_target(
    brain: &PaddleBrain,
    side: Side,
    ball: &BallBody,
    court: &CourtGeometry,
    config: &SimConfig,
) -> Vec3 {
    let ahead = ball.position + ball.velocity * config.paddle_lookahead;
    let engaged = ball.launched
        && court.side_of(ahead) == side
        && ball.awaiting_cross_net_from != Some(side)
        && !ball.must_bounce_before_volley(side);
    if !engaged {
        return brain.home;
    }
    clamp_to_half(ahead + brain.offset, side, court)
}

/// Move every scripted paddle toward its target at paddle speed
pub fn drive_paddles(
    world: &mut World,
    ball: &BallBody,
    court: &CourtGeometry,
    time: &Time,
    config: &SimConfig,
) {
    for (_entity, (paddle, brain)) in world.query_mut::<(&mut Paddle, &PaddleBrain)>() {
        let target = brain_target(brain, paddle.side, ball, court, config);
        let delta = (target - paddle.pos).clamp_length_max(config.paddle_speed * time.dt);
        paddle.pos += delta;
    }
}

/// New aim error for every brain
pub fn reroll_brains(world: &mut World, rng: &mut GameRng) {
    for (_entity, brain) in world.query_mut::<&mut PaddleBrain>() {
        let j = brain.jitter;
        brain.offset = if j > 0.0 {
            Vec3::new(rng.0.gen_range(-j..=j), 0.0, rng.0.gen_range(-j..=j))
        } else {
            Vec3::ZERO
        };
    }
}
