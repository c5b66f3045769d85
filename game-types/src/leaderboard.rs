use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Difficulty, RoundResult};

/// Minute-resolution timestamp format used in the leaderboard file
pub const LEADERBOARD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Maximum number of entries kept on the leaderboard
pub const LEADERBOARD_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub difficulty: Difficulty,
    pub date: String, // "YYYY-MM-DD HH:MM"
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32, difficulty: Difficulty, at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            score,
            difficulty,
            date: at.format(LEADERBOARD_DATE_FORMAT).to_string(),
        }
    }
}

impl From<&RoundResult> for LeaderboardEntry {
    fn from(result: &RoundResult) -> Self {
        LeaderboardEntry::new(
            result.player_name.clone(),
            result.total_score,
            result.difficulty,
            result.timestamp,
        )
    }
}

/// Podium placing for the first three ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 0-based rank, if it is on the podium
    pub fn for_rank(rank: usize) -> Option<Medal> {
        match rank {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "GOLD MEDAL",
            Medal::Silver => "SILVER MEDAL",
            Medal::Bronze => "BRONZE MEDAL",
        }
    }
}
