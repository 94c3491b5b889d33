use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{CourtGeometry, Params, Side};

/// Shot resolution tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    pub target_speed: f32,
    pub loft: f32,
    pub max_up_vel: f32,
    pub max_down_vel: f32,
    pub aim_assist_blend: f32,
    pub center_x_bias: f32,
    pub min_hit_up: f32,
    pub min_forward: f32,
    pub near_net_distance: f32,
    pub near_net_speed_boost: f32,
    pub min_launch_speed: f32,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            target_speed: Params::TARGET_SPEED,
            loft: Params::LOFT,
            max_up_vel: Params::MAX_UP_VEL,
            max_down_vel: Params::MAX_DOWN_VEL,
            aim_assist_blend: Params::AIM_ASSIST_BLEND,
            center_x_bias: Params::CENTER_X_BIAS,
            min_hit_up: Params::MIN_HIT_UP,
            min_forward: Params::MIN_FORWARD,
            near_net_distance: Params::NEAR_NET_DISTANCE,
            near_net_speed_boost: Params::NEAR_NET_SPEED_BOOST,
            min_launch_speed: Params::MIN_LAUNCH_SPEED,
        }
    }
}

/// Ground bounce tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    pub first_bounce_min_up: f32,
    pub min_bounce_up: f32,
    pub restitution_y: f32,
    pub keep_horizontal: f32,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            first_bounce_min_up: Params::FIRST_BOUNCE_MIN_UP,
            min_bounce_up: Params::MIN_BOUNCE_UP,
            restitution_y: Params::RESTITUTION_Y,
            keep_horizontal: Params::KEEP_HORIZONTAL,
        }
    }
}

/// Serve placement, launch and safety windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// x = sideways, y = up, z = toward the opponent
    pub offset: Vec3,
    pub lift: f32,
    pub shield_seconds: f32,
    pub launch_angle_deg: f32,
    pub launch_speed: f32,
    pub post_virtual_hit_ignore: f32,
    pub post_real_hit_ignore: f32,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(
                Params::SERVE_OFFSET_X,
                Params::SERVE_OFFSET_Y,
                Params::SERVE_OFFSET_Z,
            ),
            lift: Params::SERVE_LIFT,
            shield_seconds: Params::SERVE_SHIELD_SECONDS,
            launch_angle_deg: Params::SERVE_LAUNCH_ANGLE_DEG,
            launch_speed: Params::SERVE_LAUNCH_SPEED,
            post_virtual_hit_ignore: Params::POST_VIRTUAL_HIT_IGNORE,
            post_real_hit_ignore: Params::POST_REAL_HIT_IGNORE,
        }
    }
}

/// Rule toggles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub enforce_two_bounce: bool,
    /// Any net touch faults the striker. Off = let play.
    pub net_fault: bool,
    /// Training convenience: every serve comes from Right
    pub always_serve_right: bool,
    pub allow_body_hits: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enforce_two_bounce: true,
            net_fault: false,
            always_serve_right: false,
            allow_body_hits: false,
        }
    }
}

/// Match scoring rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub target_points: u32,
    pub win_by_two: bool,
    pub rally_scoring: bool,
    pub starting_server: Side,
    pub server_lock: Option<Side>,
    /// Flip incoming winners once if the scene is mirrored
    pub invert_winner: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            target_points: Params::TARGET_POINTS,
            win_by_two: true,
            rally_scoring: false,
            starting_server: Side::Right,
            server_lock: None,
            invert_winner: false,
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court: CourtGeometry,
    pub shot: ShotConfig,
    pub bounce: BounceConfig,
    pub serve: ServeConfig,
    pub rules: RulesConfig,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ron_str(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).context("parse RON config")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_ron_str(&data).with_context(|| format!("load config {}", path.display()))
    }

    /// Load `path`, falling back to defaults. Returns the error text on fallback.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    /// Out-of-range tuning, reported as warnings rather than errors
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let shot = &self.shot;
        if shot.target_speed < shot.min_launch_speed {
            warnings.push(format!(
                "shot.target_speed {} below min_launch_speed {}; floor applies",
                shot.target_speed, shot.min_launch_speed
            ));
        }
        if shot.min_launch_speed <= 0.0 {
            warnings.push("shot.min_launch_speed should be > 0".into());
        }
        if !(0.0..=1.0).contains(&shot.aim_assist_blend) {
            warnings.push("shot.aim_assist_blend outside [0,1]".into());
        }
        if !(0.0..=1.0).contains(&shot.center_x_bias) {
            warnings.push("shot.center_x_bias outside [0,1]".into());
        }
        if !(0.0..=0.9).contains(&shot.min_hit_up) {
            warnings.push("shot.min_hit_up outside [0,0.9]".into());
        }
        if !(0.0..=0.9).contains(&shot.min_forward) {
            warnings.push("shot.min_forward outside [0,0.9]".into());
        }
        if shot.max_up_vel <= 0.0 || shot.max_down_vel <= 0.0 {
            warnings.push("shot vertical clamps must be > 0".into());
        }
        let bounce = &self.bounce;
        if bounce.first_bounce_min_up < bounce.min_bounce_up {
            warnings.push("bounce.first_bounce_min_up lower than min_bounce_up".into());
        }
        if !(0.9..=1.08).contains(&bounce.restitution_y) {
            warnings.push("bounce.restitution_y outside [0.9,1.08]".into());
        }
        if !(0.98..=1.02).contains(&bounce.keep_horizontal) {
            warnings.push("bounce.keep_horizontal outside [0.98,1.02]".into());
        }
        if self.serve.shield_seconds < 0.0 {
            warnings.push("serve.shield_seconds negative".into());
        }
        if self.serve.post_real_hit_ignore < 0.0 || self.serve.post_virtual_hit_ignore < 0.0 {
            warnings.push("serve hit cooldowns negative".into());
        }
        if self.scoring.target_points == 0 {
            warnings.push("scoring.target_points is 0; first point ends the match".into());
        }
        if self.court.back_line_distance <= 0.0 {
            warnings.push("court.back_line_distance should be > 0".into());
        }
        warnings
    }
}
