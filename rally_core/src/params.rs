/// Default tuning for the rally engine
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const NET_Z: f32 = 0.0;
    pub const NET_HEIGHT: f32 = 0.9;
    pub const RIGHT_COURT_IS_POSITIVE_Z: bool = false; // Right plays on -Z
    pub const BACK_LINE_DISTANCE: f32 = 60.0; // nominal aim target from the net
    pub const COURT_HALF_WIDTH: f32 = 15.0;
    pub const COURT_HALF_LENGTH: f32 = 45.0;
    pub const SERVE_DEPTH: f32 = 20.0;

    // Shot
    pub const TARGET_SPEED: f32 = 46.0;
    pub const LOFT: f32 = 1.2;
    pub const MAX_UP_VEL: f32 = 12.0;
    pub const MAX_DOWN_VEL: f32 = 25.0;
    pub const AIM_ASSIST_BLEND: f32 = 0.65;
    pub const CENTER_X_BIAS: f32 = 0.55;
    pub const MIN_HIT_UP: f32 = 0.22;
    pub const MIN_FORWARD: f32 = 0.42;
    pub const NEAR_NET_DISTANCE: f32 = 1.2;
    pub const NEAR_NET_SPEED_BOOST: f32 = 6.0;
    pub const MIN_LAUNCH_SPEED: f32 = 4.0;

    // Ground bounce
    pub const FIRST_BOUNCE_MIN_UP: f32 = 7.0;
    pub const MIN_BOUNCE_UP: f32 = 5.0;
    pub const RESTITUTION_Y: f32 = 1.02;
    pub const KEEP_HORIZONTAL: f32 = 1.0;

    // Serve
    pub const SERVE_OFFSET_X: f32 = 0.0;
    pub const SERVE_OFFSET_Y: f32 = 1.2;
    pub const SERVE_OFFSET_Z: f32 = 2.0; // toward the opponent
    pub const SERVE_LIFT: f32 = 0.18;
    pub const SERVE_SHIELD_SECONDS: f32 = 0.20;
    pub const SERVE_LAUNCH_ANGLE_DEG: f32 = 12.0;
    pub const SERVE_LAUNCH_SPEED: f32 = 44.0;

    // Hit spam guards
    pub const POST_VIRTUAL_HIT_IGNORE: f32 = 0.12;
    pub const POST_REAL_HIT_IGNORE: f32 = 0.08;

    // Easy-hit assist
    pub const EASY_HIT_RADIUS: f32 = 1.8;
    pub const EASY_HIT_MIN_CLOSING_SPEED: f32 = 1.0;

    // Score
    pub const TARGET_POINTS: u32 = 11;
    pub const TRAINING_TARGET_POINTS: u32 = 9999;

    // Degenerate input thresholds
    pub const REST_SPEED_SQ: f32 = 1e-6;
    pub const MIN_PADDLE_DISTANCE: f32 = 1e-4;
}
