use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Difficulty;

/// Where a round is in its word-by-word lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Idle,          // Round built, nothing shown yet
    WordPresented, // Scrambled word on screen, clock running
    Evaluating,    // Answer received, being scored
    NextWord,      // Word scored, more words remain
    RoundComplete, // Every word consumed
}

/// What the player sees for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPrompt {
    pub index: usize, // 1-based
    pub total: usize,
    pub scrambled: String,
    pub time_limit: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordOutcome {
    Correct { base_points: u32, time_bonus: u32 },
    Incorrect,
    Timeout,
}

impl WordOutcome {
    pub fn points(&self) -> u32 {
        match self {
            WordOutcome::Correct {
                base_points,
                time_bonus,
            } => base_points + time_bonus,
            WordOutcome::Incorrect | WordOutcome::Timeout => 0,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, WordOutcome::Correct { .. })
    }
}

/// Scored answer for a single word; the target is revealed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    pub word: String,
    pub scrambled: String,
    pub answer: Option<String>,
    pub outcome: WordOutcome,
    pub elapsed: Duration,
}

impl WordResult {
    pub fn points(&self) -> u32 {
        self.outcome.points()
    }
}

/// Produced once when a round finishes. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_name: String,
    pub total_score: u32,
    pub difficulty: Difficulty,
    pub timestamp: NaiveDateTime,
    pub words_attempted: usize,
    pub words_solved: usize,
}
