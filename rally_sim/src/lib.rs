pub mod components;
pub mod config;
pub mod game_state;
pub mod params;
pub mod resources;
pub mod systems;


pub use components::*;
pub use config::*;
pub use game_state::*;
pub use params::*;
pub use resources::*;

use glam::Vec3;
use hecs::World;
use rally_core::{Events, RallyOutcome, RallyReferee, Side, Time};
use systems::*;

/// Run the deterministic rally simulation for one frame.
/// Returns every rally that ended during the frame.
pub fn step(
    world: &mut World,
    time: &mut Time,
    referee: &mut RallyReferee,
    config: &SimConfig,
    events: &mut Events,
    serve_clock: &mut ServeClock,
    rng: &mut GameRng,
) -> Vec<RallyOutcome> {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(SimParams::MAX_DT);
    let mut outcomes = Vec::new();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(SimParams::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        events.clear();

        // 1. Paddles chase or return home
        let ball = *referee.ball();
        let court = *referee.court();
        drive_paddles(world, &ball, &court, &step_time, config);

        // 2. Ball flight with net, wall and ground contacts
        let mut outcome = advance_ball(referee, &step_time, config, events);

        // 3. Paddle contacts
        if outcome.is_none() {
            outcome = check_paddles(world, referee, &step_time, config, events);
        }

        // 4. Easy-hit assists
        if outcome.is_none() {
            run_assists(world, referee, &step_time, events);
            outcome = events.rally_outcome;
        }

        // 5. Serve once the ball has been parked long enough
        auto_serve(referee, serve_clock, &step_time, config, events);

        if events.ball_hit_paddle || events.virtual_hit {
            reroll_brains(world, rng);
        }
        if let Some(outcome) = outcome {
            outcomes.push(outcome);
        }
    }

    time.now += clamped_dt;
    outcomes
}

/// Helper to create a scripted paddle entity
pub fn create_paddle(world: &mut World, side: Side, home: Vec3, jitter: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, home), PaddleBrain::new(home, jitter)))
}
