use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Params, RallyReferee, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Right player alone, serving every rally, endless target
    Training,
    Competition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Paddle gets the easy-hit assist
    Easy,
    Medium,
    /// Detached paddle; identical to Medium for the rules
    Hard,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Training => write!(f, "Training"),
            GameMode::Competition => write!(f, "Competition"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for GameMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "training" => Ok(GameMode::Training),
            "competition" => Ok(GameMode::Competition),
            other => anyhow::bail!("unknown game mode '{other}' (training|competition)"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "med" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => anyhow::bail!("unknown difficulty '{other}' (easy|medium|hard)"),
        }
    }
}

/// Mode, per-side difficulty and player names for the current match.
///
/// Starting a mode reconfigures the ledger and the referee together; the
/// scoreboard and the result export read names and difficulties from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub mode: GameMode,
    pub left_difficulty: Difficulty,
    pub right_difficulty: Difficulty,
    pub left_name: String,
    pub right_name: String,
    pub training_target_points: u32,
    pub competition_target_points: u32,
    pub competition_win_by_two: bool,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            mode: GameMode::Competition,
            left_difficulty: Difficulty::Medium,
            right_difficulty: Difficulty::Medium,
            left_name: "Left".to_string(),
            right_name: "Right".to_string(),
            training_target_points: Params::TRAINING_TARGET_POINTS,
            competition_target_points: Params::TARGET_POINTS,
            competition_win_by_two: true,
        }
    }
}

impl MatchSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_name,
            Side::Right => &self.right_name,
        }
    }

    pub fn difficulty_of(&self, side: Side) -> Difficulty {
        match side {
            Side::Left => self.left_difficulty,
            Side::Right => self.right_difficulty,
        }
    }

    /// Blank names are ignored
    pub fn set_name(&mut self, side: Side, name: &str) {
        if name.trim().is_empty() {
            return;
        }
        match side {
            Side::Left => self.left_name = name.to_string(),
            Side::Right => self.right_name = name.to_string(),
        }
    }

    pub fn set_difficulty(&mut self, side: Side, difficulty: Difficulty) {
        match side {
            Side::Left => self.left_difficulty = difficulty,
            Side::Right => self.right_difficulty = difficulty,
        }
    }

    /// Whether `side` has a paddle in play. Training benches the left side.
    pub fn paddle_active(&self, side: Side) -> bool {
        !(self.mode == GameMode::Training && side == Side::Left)
    }

    pub fn assist_enabled(&self, side: Side) -> bool {
        self.paddle_active(side) && self.difficulty_of(side) == Difficulty::Easy
    }

    pub fn start_training(&mut self, referee: &mut RallyReferee, now: f32) {
        self.mode = GameMode::Training;

        let ledger = referee.ledger_mut();
        ledger.set_rally_scoring(true);
        ledger.set_rules(self.training_target_points, false);
        ledger.set_server_lock(true, Side::Right);
        ledger.reset_match(Side::Right);

        let mut rules = *referee.rules();
        rules.always_serve_right = true;
        referee.set_rules(rules);
        referee.force_reset_to_server_side(Side::Right, now);
        tracing::info!(mode = %self.mode, "match started");
    }

    pub fn start_competition(&mut self, referee: &mut RallyReferee, now: f32) {
        self.mode = GameMode::Competition;

        let starting = referee.config().scoring.starting_server;
        let ledger = referee.ledger_mut();
        ledger.set_server_lock(false, Side::Right);
        ledger.set_rally_scoring(true);
        ledger.set_rules(self.competition_target_points, self.competition_win_by_two);
        ledger.reset_match(starting);

        let mut rules = *referee.rules();
        rules.always_serve_right = false;
        referee.set_rules(rules);
        let server = referee.ledger().current_server();
        referee.force_reset_to_server_side(server, now);
        tracing::info!(mode = %self.mode, server = %server, "match started");
    }

    /// Start the current mode over from 0:0
    pub fn restart(&mut self, referee: &mut RallyReferee, now: f32) {
        match self.mode {
            GameMode::Training => self.start_training(referee, now),
            GameMode::Competition => self.start_competition(referee, now),
        }
    }
}
