use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{Params, Side};

/// Static court reference data. The court axis is world Z; the net is the
/// plane `z = net_z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtGeometry {
    pub net_z: f32,
    pub net_height: f32,
    /// Tick if the Right player's court lies on positive Z
    pub right_court_is_positive_z: bool,
    pub back_line_distance: f32,
    pub half_width: f32,
    pub half_length: f32,
    pub serve_depth: f32,
}

impl Default for CourtGeometry {
    fn default() -> Self {
        Self {
            net_z: Params::NET_Z,
            net_height: Params::NET_HEIGHT,
            right_court_is_positive_z: Params::RIGHT_COURT_IS_POSITIVE_Z,
            back_line_distance: Params::BACK_LINE_DISTANCE,
            half_width: Params::COURT_HALF_WIDTH,
            half_length: Params::COURT_HALF_LENGTH,
            serve_depth: Params::SERVE_DEPTH,
        }
    }
}

impl CourtGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which half a world position belongs to. Points on the net plane
    /// count as the negative-Z half.
    pub fn side_of(&self, point: Vec3) -> Side {
        let positive = point.z > self.net_z;
        if positive == self.right_court_is_positive_z {
            Side::Right
        } else {
            Side::Left
        }
    }

    /// +1.0 if `side` lies on positive Z, -1.0 otherwise
    pub fn axis_sign(&self, side: Side) -> f32 {
        let right = if self.right_court_is_positive_z { 1.0 } else { -1.0 };
        match side {
            Side::Right => right,
            Side::Left => -right,
        }
    }

    /// Nominal back-boundary Z for a side, used to aim shots
    pub fn target_axis_for(&self, side: Side) -> f32 {
        self.net_z + self.axis_sign(side) * self.back_line_distance
    }

    /// Ground-level serve spot for a side
    pub fn serve_point(&self, side: Side) -> Vec3 {
        Vec3::new(0.0, 0.0, self.net_z + self.axis_sign(side) * self.serve_depth)
    }

    pub fn distance_to_net(&self, point: Vec3) -> f32 {
        (point.z - self.net_z).abs()
    }

    /// True when moving from `from` to `to` crosses the net plane
    pub fn crosses_net(&self, from: Vec3, to: Vec3) -> bool {
        self.side_of(from) != self.side_of(to)
    }
}
