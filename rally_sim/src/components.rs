use glam::Vec3;
use rally_core::Side;

/// A player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec3,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec3) -> Self {
        Self { side, pos }
    }
}

/// Scripted opponent: chases the ball on its own half, otherwise returns home
#[derive(Debug, Clone, Copy)]
pub struct PaddleBrain {
    pub home: Vec3,
    pub jitter: f32,
    pub offset: Vec3, // aim error, re-rolled after every strike
}

impl PaddleBrain {
    pub fn new(home: Vec3, jitter: f32) -> Self {
        Self {
            home,
            jitter,
            offset: Vec3::ZERO,
        }
    }
}
