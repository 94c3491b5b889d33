use crate::RallyOutcome;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Events that occurred during this step, for SFX and HUD listeners
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_ground: bool,
    pub ball_hit_wall: bool,
    pub ball_hit_net: bool,
    pub virtual_hit: bool,
    pub serve_launched: bool,
    pub rally_outcome: Option<RallyOutcome>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_paddle = false;
        self.ball_hit_ground = false;
        self.ball_hit_wall = false;
        self.ball_hit_net = false;
        self.virtual_hit = false;
        self.serve_launched = false;
        self.rally_outcome = None;
    }
}
