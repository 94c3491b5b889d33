use hecs::World;
use rally_core::{EasyHitAssist, Events, RallyReferee, Time};

use crate::{Paddle, ServeClock, SimConfig};

/// Launch the parked ball once it has waited `serve_delay`
pub fn auto_serve(
    referee: &mut RallyReferee,
    clock: &mut ServeClock,
    time: &Time,
    config: &SimConfig,
    events: &mut Events,
) {
    if referee.ball().launched {
        clock.reset();
        return;
    }
    clock.waiting += time.dt;
    if clock.waiting >= config.serve_delay {
        referee.launch_serve(events);
        clock.reset();
    }
}

/// Let every assisted paddle request its virtual hit
pub fn run_assists(
    world: &mut World,
    referee: &mut RallyReferee,
    time: &Time,
    events: &mut Events,
) {
    for (_entity, (paddle, assist)) in world.query_mut::<(&Paddle, &mut EasyHitAssist)>() {
        assist.update(paddle.pos, time.dt, referee, time.now, events);
    }
}
