//! Score and server ownership.
//!
//! The ledger is mutated only by [`ScoreLedger::on_rally_ended`] and the
//! configuration setters. Every mutation re-applies the server lock and
//! notifies registered [`ScoreObserver`]s.

use serde::Serialize;

use crate::{ScoringConfig, Side};

/// Scoreboard refresh payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreUpdate {
    pub left_score: u32,
    pub right_score: u32,
    pub server: Side,
}

/// Emitted once per match when a side wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub winner: Side,
    pub left_score: u32,
    pub right_score: u32,
}

/// Presentation/export sink for ledger changes
pub trait ScoreObserver {
    fn on_score_changed(&self, update: ScoreUpdate);
    fn on_game_over(&self, summary: GameOverSummary);
}

pub struct ScoreLedger {
    left_score: u32,
    right_score: u32,
    target_points: u32,
    win_by_two: bool,
    rally_scoring: bool,
    starting_server: Side,
    current_server: Side,
    server_lock_enabled: bool,
    server_lock_side: Side,
    invert_winner: bool,
    game_over: bool,
    winner: Option<Side>,
    observers: Vec<Box<dyn ScoreObserver>>,
}

impl std::fmt::Debug for ScoreLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreLedger")
            .field("left_score", &self.left_score)
            .field("right_score", &self.right_score)
            .field("target_points", &self.target_points)
            .field("win_by_two", &self.win_by_two)
            .field("rally_scoring", &self.rally_scoring)
            .field("current_server", &self.current_server)
            .field("server_lock_enabled", &self.server_lock_enabled)
            .field("server_lock_side", &self.server_lock_side)
            .field("game_over", &self.game_over)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ScoreLedger {
    pub fn new(config: &ScoringConfig) -> Self {
        let mut ledger = Self {
            left_score: 0,
            right_score: 0,
            target_points: config.target_points,
            win_by_two: config.win_by_two,
            rally_scoring: config.rally_scoring,
            starting_server: config.starting_server,
            current_server: config.starting_server,
            server_lock_enabled: config.server_lock.is_some(),
            server_lock_side: config.server_lock.unwrap_or(Side::Right),
            invert_winner: config.invert_winner,
            game_over: false,
            winner: None,
            observers: Vec::new(),
        };
        ledger.apply_lock();
        ledger
    }

    pub fn add_observer(&mut self, observer: Box<dyn ScoreObserver>) {
        self.observers.push(observer);
    }

    pub fn left_score(&self) -> u32 {
        self.left_score
    }

    pub fn right_score(&self) -> u32 {
        self.right_score
    }

    pub fn score_of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn current_server(&self) -> Side {
        self.current_server
    }

    pub fn starting_server(&self) -> Side {
        self.starting_server
    }

    pub fn target_points(&self) -> u32 {
        self.target_points
    }

    pub fn win_by_two(&self) -> bool {
        self.win_by_two
    }

    pub fn rally_scoring(&self) -> bool {
        self.rally_scoring
    }

    pub fn server_lock(&self) -> Option<Side> {
        self.server_lock_enabled.then_some(self.server_lock_side)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Zero the scores and start a new match served by `starting_server`
    pub fn reset_match(&mut self, starting_server: Side) {
        self.left_score = 0;
        self.right_score = 0;
        self.starting_server = starting_server;
        self.current_server = starting_server;
        self.game_over = false;
        self.winner = None;
        self.apply_lock();
        tracing::debug!(server = %self.current_server, "match reset");
        self.notify_score();
    }

    /// Record a finished rally. Returns the side that serves next.
    pub fn on_rally_ended(&mut self, winner: Side) -> Side {
        if self.game_over {
            return self.current_server;
        }

        let winner = if self.invert_winner {
            winner.opposite()
        } else {
            winner
        };
        let server_scored = winner == self.current_server;
        let mut finished = None;

        if self.rally_scoring {
            finished = self.add_point(winner);
            self.current_server = winner;
        } else if server_scored {
            finished = self.add_point(winner);
        } else {
            self.current_server = self.current_server.opposite();
            tracing::debug!(server = %self.current_server, "side-out");
        }

        if let Some(champion) = finished {
            self.game_over = true;
            self.winner = Some(champion);
            self.current_server = champion;
            tracing::info!(
                winner = %champion,
                left = self.left_score,
                right = self.right_score,
                "game over"
            );
        }

        self.apply_lock();
        self.notify_score();
        if let Some(champion) = finished {
            self.notify_game_over(champion);
        }
        self.current_server
    }

    /// Who has won under the current rules, if anyone
    pub fn check_win(&self) -> Option<Side> {
        let (l, r) = (self.left_score, self.right_score);
        let margin = if self.win_by_two { 2 } else { 1 };
        if l >= self.target_points && l >= r + margin {
            Some(Side::Left)
        } else if r >= self.target_points && r >= l + margin {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn force_server(&mut self, side: Side) {
        self.current_server = side;
        self.apply_lock();
        tracing::debug!(server = %self.current_server, "server forced");
        self.notify_score();
    }

    pub fn set_rules(&mut self, target_points: u32, win_by_two: bool) {
        self.target_points = target_points;
        self.win_by_two = win_by_two;
        self.apply_lock();
        self.notify_score();
    }

    pub fn set_rally_scoring(&mut self, rally_scoring: bool) {
        self.rally_scoring = rally_scoring;
        self.apply_lock();
        self.notify_score();
    }

    pub fn set_server_lock(&mut self, enabled: bool, side: Side) {
        self.server_lock_enabled = enabled;
        self.server_lock_side = side;
        self.apply_lock();
        self.notify_score();
    }

    fn add_point(&mut self, side: Side) -> Option<Side> {
        match side {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
        tracing::debug!(
            side = %side,
            left = self.left_score,
            right = self.right_score,
            "point"
        );
        self.check_win()
    }

    fn apply_lock(&mut self) {
        if self.server_lock_enabled {
            self.current_server = self.server_lock_side;
        }
    }

    fn notify_score(&self) {
        let update = ScoreUpdate {
            left_score: self.left_score,
            right_score: self.right_score,
            server: self.current_server,
        };
        for observer in &self.observers {
            observer.on_score_changed(update);
        }
    }

    fn notify_game_over(&self, winner: Side) {
        let summary = GameOverSummary {
            winner,
            left_score: self.left_score,
            right_score: self.right_score,
        };
        for observer in &self.observers {
            observer.on_game_over(summary);
        }
    }
}
