use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::GameError;

/// Per-tier round parameters. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub word_count: usize,
    pub time_limit_secs: u64,
    pub points_per_word: u32,
}

impl DifficultyConfig {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}

const EASY: DifficultyConfig = DifficultyConfig {
    word_count: 10,
    time_limit_secs: 60,
    points_per_word: 10,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    word_count: 15,
    time_limit_secs: 45,
    points_per_word: 20,
};

const HARD: DifficultyConfig = DifficultyConfig {
    word_count: 20,
    time_limit_secs: 30,
    points_per_word: 30,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }

    /// Whether a word of `len` characters belongs to this tier's length band
    pub fn admits_length(self, len: usize) -> bool {
        match self {
            Difficulty::Easy => len <= 5,
            Difficulty::Medium => (6..=8).contains(&len),
            Difficulty::Hard => len >= 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_table() {
        assert_eq!(Difficulty::Easy.config(), EASY);
        assert_eq!(Difficulty::Easy.config().word_count, 10);
        assert_eq!(Difficulty::Medium.config().time_limit_secs, 45);
        assert_eq!(Difficulty::Hard.config().points_per_word, 30);
        assert_eq!(Difficulty::Hard.config().time_limit(), Duration::from_secs(30));
    }

    #[test]
    fn test_length_bands() {
        assert!(Difficulty::Easy.admits_length(4));
        assert!(Difficulty::Easy.admits_length(5));
        assert!(!Difficulty::Easy.admits_length(6));

        assert!(Difficulty::Medium.admits_length(6));
        assert!(Difficulty::Medium.admits_length(8));
        assert!(!Difficulty::Medium.admits_length(9));

        assert!(Difficulty::Hard.admits_length(9));
        assert!(Difficulty::Hard.admits_length(12));
        assert!(!Difficulty::Hard.admits_length(8));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Medium.to_string(), "medium");
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let parsed: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
    }
}
