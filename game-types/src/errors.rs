use thiserror::Error;

use crate::{Difficulty, RoundPhase};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Word bank is empty")]
    EmptyWordBank,
    #[error("Word bank has {available} words but {difficulty} rounds need {needed}")]
    InsufficientWords {
        difficulty: Difficulty,
        needed: usize,
        available: usize,
    },
    #[error("Unknown difficulty: {value}")]
    UnknownDifficulty { value: String },
    #[error("Cannot {action} while round is {phase:?}")]
    InvalidRoundState { action: String, phase: RoundPhase },
}

impl GameError {
    pub fn invalid_state(action: &str, phase: RoundPhase) -> Self {
        GameError::InvalidRoundState {
            action: action.to_string(),
            phase,
        }
    }
}
