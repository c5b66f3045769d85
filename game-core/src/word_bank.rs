use anyhow::{Context, Result};
use game_types::{Difficulty, GameError};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_WORDS: &str = include_str!("../words/word_bank.txt");

pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Create a word bank from a newline-separated word list.
    /// Blank lines and `#` comments are skipped, duplicates keep their first position.
    pub fn new(word_list: &str) -> Self {
        let mut seen = HashSet::new();
        let words = word_list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    /// The word bank shipped with the game
    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS)
    }

    /// Load a word list from a file on disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        Ok(Self::new(&contents))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }

    /// All words inside the tier's length band, in bank order
    pub fn tier_words(&self, difficulty: Difficulty) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| difficulty.admits_length(word.chars().count()))
            .map(String::as_str)
            .collect()
    }

    /// Check that every tier can fill a round. Run once at startup so a bad
    /// bank never surfaces mid-round.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyWordBank);
        }

        for difficulty in Difficulty::ALL {
            let needed = difficulty.config().word_count;
            if self.words.len() < needed {
                return Err(GameError::InsufficientWords {
                    difficulty,
                    needed,
                    available: self.words.len(),
                });
            }
        }

        Ok(())
    }

    /// Pick the play order for one round: exactly `word_count` distinct words.
    ///
    /// The tier's own words are preferred. When the band is too small it is
    /// topped up with words from outside the band, never repeating a word.
    pub fn words_for_tier<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Vec<String>, GameError> {
        let needed = difficulty.config().word_count;
        if self.words.is_empty() {
            return Err(GameError::EmptyWordBank);
        }
        if self.words.len() < needed {
            return Err(GameError::InsufficientWords {
                difficulty,
                needed,
                available: self.words.len(),
            });
        }

        let (mut candidates, mut others): (Vec<&String>, Vec<&String>) = self
            .words
            .iter()
            .partition(|word| difficulty.admits_length(word.chars().count()));

        if candidates.len() < needed {
            let shortfall = needed - candidates.len();
            debug!(
                "Topping up {} tier with {} words from outside its length band",
                difficulty, shortfall
            );
            others.shuffle(rng);
            candidates.extend(others.into_iter().take(shortfall));
        }

        candidates.shuffle(rng);
        candidates.truncate(needed);

        Ok(candidates.into_iter().cloned().collect())
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
