use glam::Vec3;
use hecs::World;
use rally_core::{
    EasyHitAssist, Events, MatchResult, MatchSetup, RallyOutcome, RallyReferee, ScoreLedger,
    ScoreObserver, Side, Time,
};

use crate::{create_paddle, step, GameRng, ServeClock, SimConfig, SimParams};

/// Match lifecycle as seen by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Ball parked at the serve point
    Serving,
    /// Ball served or struck
    Rally,
    /// Ledger declared a winner
    GameOver,
}

/// A whole simulated match: paddles, referee, clock and RNG
pub struct MatchSim {
    pub world: World,
    pub time: Time,
    pub config: SimConfig,
    pub referee: RallyReferee,
    pub setup: MatchSetup,
    pub events: Events,
    pub serve_clock: ServeClock,
    pub rng: GameRng,
    pub tick: u32,
    pub outcomes: Vec<RallyOutcome>,
}

impl MatchSim {
    pub fn new(config: SimConfig, setup: MatchSetup, seed: u64) -> Self {
        Self::with_observers(config, setup, seed, Vec::new())
    }

    /// Build a match whose ledger reports to `observers` from the first rally
    pub fn with_observers(
        config: SimConfig,
        setup: MatchSetup,
        seed: u64,
        observers: Vec<Box<dyn ScoreObserver>>,
    ) -> Self {
        let mut ledger = ScoreLedger::new(&config.rally.scoring);
        for observer in observers {
            ledger.add_observer(observer);
        }
        let referee = RallyReferee::with_ledger(config.rally, ledger);

        let mut sim = Self {
            world: World::new(),
            time: Time::new(SimParams::FIXED_DT, 0.0),
            config,
            referee,
            setup,
            events: Events::new(),
            serve_clock: ServeClock::new(),
            rng: GameRng::new(seed),
            tick: 0,
            outcomes: Vec::new(),
        };
        sim.restart();
        sim
    }

    /// Start the configured mode from 0:0 and respawn the paddles for it
    pub fn restart(&mut self) {
        self.setup.restart(&mut self.referee, self.time.now);
        self.serve_clock.reset();
        self.outcomes.clear();
        self.spawn_paddles();
    }

    fn spawn_paddles(&mut self) {
        self.world.clear();
        let court = *self.referee.court();
        for side in [Side::Left, Side::Right] {
            if !self.setup.paddle_active(side) {
                continue;
            }
            let home = Vec3::new(
                0.0,
                SimParams::HOME_HEIGHT,
                court.net_z + court.axis_sign(side) * self.config.home_depth,
            );
            let entity = create_paddle(&mut self.world, side, home, self.config.ai_jitter);
            if self.setup.assist_enabled(side) {
                let _ = self.world.insert_one(entity, EasyHitAssist::default());
            }
        }
    }

    pub fn match_state(&self) -> MatchState {
        if self.referee.ledger().is_game_over() {
            MatchState::GameOver
        } else if self.referee.ball().launched {
            MatchState::Rally
        } else {
            MatchState::Serving
        }
    }

    /// Advance the match by one frame of `dt` seconds
    pub fn advance(&mut self, dt: f32) -> Vec<RallyOutcome> {
        if self.match_state() == MatchState::GameOver {
            return Vec::new();
        }
        self.time.dt = dt;
        let outcomes = step(
            &mut self.world,
            &mut self.time,
            &mut self.referee,
            &self.config,
            &mut self.events,
            &mut self.serve_clock,
            &mut self.rng,
        );
        self.tick += 1;
        self.outcomes.extend_from_slice(&outcomes);
        outcomes
    }

    /// Run until game over or `max_seconds` of simulated time
    pub fn run(&mut self, max_seconds: f32) -> MatchResult {
        let frame = SimParams::FIXED_DT * 2.0;
        while self.match_state() != MatchState::GameOver && self.time.now < max_seconds {
            self.advance(frame);
        }
        tracing::info!(
            rallies = self.outcomes.len(),
            seconds = self.time.now,
            game_over = self.referee.ledger().is_game_over(),
            "simulation stopped"
        );
        self.result()
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::from_match(&self.setup, self.referee.ledger())
    }
}
