use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::{Difficulty, GameMode, MatchSetup, ScoreLedger, Side};

/// Summary of a match, built from the ledger and the match setup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub mode: GameMode,
    pub rally_scoring: bool,
    pub target_points: u32,
    pub win_by_two: bool,
    pub starting_server: Side,
    pub final_server: Side,
    pub left_name: String,
    pub right_name: String,
    pub left_difficulty: Difficulty,
    pub right_difficulty: Difficulty,
    pub left_score: u32,
    pub right_score: u32,
    /// Declared winner, or the leader of an unfinished match
    pub winner: Option<Side>,
    pub game_over: bool,
}

impl MatchResult {
    pub fn from_match(setup: &MatchSetup, ledger: &ScoreLedger) -> Self {
        let (left_score, right_score) = (ledger.left_score(), ledger.right_score());
        let winner = ledger.winner().or(match left_score.cmp(&right_score) {
            Ordering::Greater => Some(Side::Left),
            Ordering::Less => Some(Side::Right),
            Ordering::Equal => None,
        });
        Self {
            mode: setup.mode,
            rally_scoring: ledger.rally_scoring(),
            target_points: ledger.target_points(),
            win_by_two: ledger.win_by_two(),
            starting_server: ledger.starting_server(),
            final_server: ledger.current_server(),
            left_name: setup.left_name.clone(),
            right_name: setup.right_name.clone(),
            left_difficulty: setup.left_difficulty,
            right_difficulty: setup.right_difficulty,
            left_score,
            right_score,
            winner,
            game_over: ledger.is_game_over(),
        }
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|side| match side {
            Side::Left => self.left_name.as_str(),
            Side::Right => self.right_name.as_str(),
        })
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Pickleball Match Result ===")?;
        writeln!(
            f,
            "Mode: {}  (Rally Scoring: {})",
            self.mode,
            on_off(self.rally_scoring)
        )?;
        writeln!(
            f,
            "Target Points: {}  |  Win By Two: {}",
            self.target_points,
            yes_no(self.win_by_two)
        )?;
        writeln!(f, "Starting Server: {}", self.starting_server)?;
        writeln!(f, "Final Server:    {}", self.final_server)?;
        writeln!(f)?;
        writeln!(
            f,
            "Left : {}   (Difficulty: {})",
            self.left_name, self.left_difficulty
        )?;
        writeln!(
            f,
            "Right: {}  (Difficulty: {})",
            self.right_name, self.right_difficulty
        )?;
        writeln!(
            f,
            "Score: {} {} : {} {}",
            self.left_name, self.left_score, self.right_score, self.right_name
        )?;
        writeln!(f, "Winner: {}", self.winner_name().unwrap_or("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringConfig;

    fn ledger_with(points: &[Side]) -> ScoreLedger {
        let mut ledger = ScoreLedger::new(&ScoringConfig {
            rally_scoring: true,
            target_points: 3,
            win_by_two: false,
            ..ScoringConfig::default()
        });
        for &side in points {
            ledger.on_rally_ended(side);
        }
        ledger
    }

    #[test]
    fn test_result_reports_declared_winner() {
        let ledger = ledger_with(&[Side::Left, Side::Left, Side::Right, Side::Left]);
        let result = MatchResult::from_match(&MatchSetup::new(), &ledger);
        assert!(result.game_over);
        assert_eq!(result.winner, Some(Side::Left));
        assert_eq!(result.left_score, 3);
        assert_eq!(result.right_score, 1);
        assert_eq!(result.final_server, Side::Left);
    }

    #[test]
    fn test_unfinished_tie_has_no_winner() {
        let ledger = ledger_with(&[Side::Left, Side::Right]);
        let result = MatchResult::from_match(&MatchSetup::new(), &ledger);
        assert!(!result.game_over);
        assert_eq!(result.winner, None);
        assert!(result.to_string().contains("Winner: -"));
    }

    #[test]
    fn test_text_rendering() {
        let mut setup = MatchSetup::new();
        setup.set_name(Side::Left, "Ana");
        setup.set_name(Side::Right, "Ben");
        setup.set_difficulty(Side::Right, Difficulty::Easy);
        let ledger = ledger_with(&[Side::Right, Side::Right, Side::Right]);
        let text = MatchResult::from_match(&setup, &ledger).to_string();

        assert!(text.contains("Mode: Competition  (Rally Scoring: ON)"), "{text}");
        assert!(text.contains("Target Points: 3  |  Win By Two: No"), "{text}");
        assert!(text.contains("Right: Ben  (Difficulty: Easy)"), "{text}");
        assert!(text.contains("Score: Ana 0 : 3 Ben"), "{text}");
        assert!(text.contains("Winner: Ben"), "{text}");
    }

    #[test]
    fn test_json_export() {
        let ledger = ledger_with(&[Side::Right]);
        let result = MatchResult::from_match(&MatchSetup::new(), &ledger);
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["right_score"], 1);
        assert_eq!(json["winner"], "Right");
        assert_eq!(json["mode"], "Competition");
    }
}
