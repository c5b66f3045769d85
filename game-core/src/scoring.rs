use game_types::{DifficultyConfig, WordOutcome};
use std::time::Duration;

/// Seconds of unused time that earn one bonus point
pub const SECONDS_PER_BONUS_POINT: u64 = 5;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Evaluate an answer against the target word.
    ///
    /// `None` means the deadline passed with no answer. Any answer arriving at
    /// or after the time limit scores as a timeout whatever it says.
    pub fn evaluate_answer(
        answer: Option<&str>,
        target: &str,
        elapsed: Duration,
        config: &DifficultyConfig,
    ) -> WordOutcome {
        let time_limit = config.time_limit();
        let answer = match answer {
            Some(answer) if elapsed < time_limit => answer,
            _ => return WordOutcome::Timeout,
        };

        if Self::is_match(answer, target) {
            WordOutcome::Correct {
                base_points: config.points_per_word,
                time_bonus: Self::time_bonus(time_limit, elapsed),
            }
        } else {
            WordOutcome::Incorrect
        }
    }

    /// floor((limit - elapsed) / 5), never negative
    pub fn time_bonus(time_limit: Duration, elapsed: Duration) -> u32 {
        let remaining = time_limit.saturating_sub(elapsed).as_secs();
        u32::try_from(remaining / SECONDS_PER_BONUS_POINT).unwrap_or(u32::MAX)
    }

    /// Case-insensitive exact match; whitespace counts
    pub fn is_match(answer: &str, target: &str) -> bool {
        answer.to_lowercase() == target.to_lowercase()
    }

    /// Best score a single word can earn at this tier
    pub fn max_word_points(config: &DifficultyConfig) -> u32 {
        config.points_per_word + Self::time_bonus(config.time_limit(), Duration::ZERO)
    }
}
