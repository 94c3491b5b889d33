use glam::Vec3;
use hecs::World;
use rally_core::shot::reflect;
use rally_core::{Contact, Events, RallyOutcome, RallyReferee, Time};

use crate::systems::integrate_ball;
use crate::{Paddle, SimConfig};

/// Fly the ball for one step and report net, wall and ground contacts.
///
/// The net is judged before the ball is synced to the referee so a ball
/// stopped by the net never counts as having crossed it.
pub fn advance_ball(
    referee: &mut RallyReferee,
    time: &Time,
    config: &SimConfig,
    events: &mut Events,
) -> Option<RallyOutcome> {
    let ball = *referee.ball();
    if !ball.launched {
        return None;
    }
    let court = *referee.court();
    let r = config.ball_radius;
    let (mut pos, mut vel) = integrate_ball(ball.position, ball.velocity, time.dt, config.gravity);

    // Net
    if court.crosses_net(ball.position, pos) && pos.y.min(ball.position.y) - r < court.net_height {
        let back = court.axis_sign(court.side_of(ball.position));
        let point = Vec3::new(pos.x, pos.y.max(0.0), court.net_z);
        let contact = Contact::net(point, Vec3::Z * back);
        if let Some(outcome) = referee.handle_contact(&contact, time.now, events) {
            return Some(outcome);
        }
        vel.z = -vel.z * config.net_damping;
        pos.z = court.net_z + back * r;
    }
    referee.track_flight(pos, vel);

    // Walls
    let side_wall = pos.x.abs() + r >= court.half_width;
    let back_wall = (pos.z - court.net_z).abs() + r >= court.half_length;
    if side_wall || back_wall {
        let normal = if side_wall {
            Vec3::X * -pos.x.signum()
        } else {
            Vec3::Z * -(pos.z - court.net_z).signum()
        };
        let contact = Contact::wall(pos, normal);
        if let Some(outcome) = referee.handle_contact(&contact, time.now, events) {
            return Some(outcome);
        }
        referee.track_flight(pos + normal * r, reflect(vel, normal));
        return None;
    }

    // Ground
    if pos.y - r <= 0.0 && vel.y < 0.0 {
        pos.y = r;
        referee.track_flight(pos, vel);
        let contact = Contact::ground(Vec3::new(pos.x, 0.0, pos.z));
        return referee.handle_contact(&contact, time.now, events);
    }
    None
}

/// Report paddles within reach of the ball. The referee's hit cooldown
/// absorbs repeated contacts from the same swing.
pub fn check_paddles(
    world: &World,
    referee: &mut RallyReferee,
    time: &Time,
    config: &SimConfig,
    events: &mut Events,
) -> Option<RallyOutcome> {
    let ball = *referee.ball();
    let court = *referee.court();
    let reach = config.paddle_reach + config.ball_radius;

    let touching: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .filter(|paddle| paddle.pos.distance(ball.position) <= reach)
        .collect();

    for paddle in touching {
        let normal = (ball.position - paddle.pos)
            .try_normalize()
            .unwrap_or(Vec3::Z * court.axis_sign(paddle.side.opposite()));
        let point = ball.position - normal * config.ball_radius;
        let contact = Contact::paddle(paddle.side, point, normal);
        if let Some(outcome) = referee.handle_contact(&contact, time.now, events) {
            return Some(outcome);
        }
    }
    None
}
