use glam::Vec3;

use crate::Side;

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Ground,
    Wall,
    Net,
    Paddle,
    /// A player's body (not the paddle)
    Body,
}

/// One discrete contact reported by the physics layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub kind: ContactKind,
    pub point: Vec3,
    /// Surface normal pointing toward the ball
    pub normal: Vec3,
    /// Owner of the touched body, when the physics layer knows it
    pub other_side: Option<Side>,
}

impl Contact {
    pub fn new(kind: ContactKind, point: Vec3, normal: Vec3) -> Self {
        Self {
            kind,
            point,
            normal,
            other_side: None,
        }
    }

    pub fn ground(point: Vec3) -> Self {
        Self::new(ContactKind::Ground, point, Vec3::Y)
    }

    pub fn wall(point: Vec3, normal: Vec3) -> Self {
        Self::new(ContactKind::Wall, point, normal)
    }

    pub fn net(point: Vec3, normal: Vec3) -> Self {
        Self::new(ContactKind::Net, point, normal)
    }

    pub fn paddle(side: Side, point: Vec3, normal: Vec3) -> Self {
        Self {
            other_side: Some(side),
            ..Self::new(ContactKind::Paddle, point, normal)
        }
    }

    pub fn body(side: Side, point: Vec3, normal: Vec3) -> Self {
        Self {
            other_side: Some(side),
            ..Self::new(ContactKind::Body, point, normal)
        }
    }
}
