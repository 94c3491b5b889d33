/// Simulation tuning for the headless driver
#[derive(Debug, Clone, Copy)]
pub struct SimParams;

impl SimParams {
    // Ball
    pub const GRAVITY: f32 = 30.0;
    pub const BALL_RADIUS: f32 = 0.25;
    pub const NET_DAMPING: f32 = 0.3; // z speed kept after bouncing off the net

    // Paddles
    pub const PADDLE_REACH: f32 = 1.5;
    pub const PADDLE_SPEED: f32 = 30.0; // units per second
    pub const PADDLE_LOOKAHEAD: f32 = 0.15; // seconds of ball flight to lead by
    pub const PADDLE_MIN_HEIGHT: f32 = 0.3;
    pub const PADDLE_MAX_HEIGHT: f32 = 2.5;
    pub const PADDLE_NET_GAP: f32 = 1.0; // closest a paddle gets to the net
    pub const HOME_DEPTH: f32 = 26.0; // from the net
    pub const HOME_HEIGHT: f32 = 1.0;
    pub const AI_JITTER: f32 = 0.8;

    // Serve
    pub const SERVE_DELAY: f32 = 0.6; // seconds parked before auto-serve

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 120.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
    pub const DEFAULT_SEED: u64 = 12345;
}
