use anyhow::Context;
use rally_core::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::SimParams;

/// Driver configuration. `rally` carries the engine tuning; the rest is
/// physics and paddle AI for the headless simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub gravity: f32,
    pub ball_radius: f32,
    pub net_damping: f32,
    pub paddle_reach: f32,
    pub paddle_speed: f32,
    pub paddle_lookahead: f32,
    pub home_depth: f32,
    pub ai_jitter: f32,
    pub serve_delay: f32,
    pub rally: Config,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: SimParams::GRAVITY,
            ball_radius: SimParams::BALL_RADIUS,
            net_damping: SimParams::NET_DAMPING,
            paddle_reach: SimParams::PADDLE_REACH,
            paddle_speed: SimParams::PADDLE_SPEED,
            paddle_lookahead: SimParams::PADDLE_LOOKAHEAD,
            home_depth: SimParams::HOME_DEPTH,
            ai_jitter: SimParams::AI_JITTER,
            serve_delay: SimParams::SERVE_DELAY,
            rally: Config::default(),
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ron_str(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).context("parse RON sim config")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read sim config {}", path.display()))?;
        Self::from_ron_str(&data).with_context(|| format!("load sim config {}", path.display()))
    }

    pub fn validate(&self) -> Vec<String> {
        let mut warnings = self.rally.validate();
        if self.gravity <= 0.0 {
            warnings.push("gravity should be > 0; the ball will never land".into());
        }
        if self.ball_radius <= 0.0 {
            warnings.push("ball_radius should be > 0".into());
        }
        if !(0.0..=1.0).contains(&self.net_damping) {
            warnings.push("net_damping outside [0,1]".into());
        }
        if self.paddle_reach <= 0.0 || self.paddle_speed <= 0.0 {
            warnings.push("paddle_reach and paddle_speed should be > 0".into());
        }
        if self.ai_jitter < 0.0 {
            warnings.push("ai_jitter should be >= 0".into());
        }
        if self.serve_delay < 0.0 {
            warnings.push("serve_delay should be >= 0".into());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sim_config_is_valid() {
        let cfg = SimConfig::new();
        assert!(cfg.validate().is_empty(), "Defaults should validate: {:?}", cfg.validate());
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let cfg = SimConfig::from_ron_str("(gravity: 20.0, rally: (rules: (net_fault: true)))")
            .expect("partial sim config parses");
        assert_eq!(cfg.gravity, 20.0);
        assert_eq!(cfg.paddle_reach, SimParams::PADDLE_REACH);
        assert!(cfg.rally.rules.net_fault);
        assert!(cfg.rally.rules.enforce_two_bounce);
    }

    #[test]
    fn test_validate_flags_bad_physics() {
        let cfg = SimConfig {
            gravity: 0.0,
            serve_delay: -1.0,
            ..SimConfig::default()
        };
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.contains("gravity")));
        assert!(warnings.iter().any(|w| w.contains("serve_delay")));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("rally_sim_missing_config.ron");
        let _ = std::fs::remove_file(&path);
        let err = SimConfig::load_from_file(&path).expect_err("missing file");
        assert!(format!("{err:#}").contains("read sim config"));
    }
}
