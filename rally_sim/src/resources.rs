/// Deterministic RNG for paddle AI
#[derive(Debug, Clone)]
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::SimParams::DEFAULT_SEED)
    }
}

/// How long the ball has been parked at the serve point
#[derive(Debug, Clone, Copy, Default)]
pub struct ServeClock {
    pub waiting: f32,
}

impl ServeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.waiting = 0.0;
    }
}
