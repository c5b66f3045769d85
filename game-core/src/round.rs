use chrono::{Local, NaiveDateTime};
use game_types::{
    Difficulty, DifficultyConfig, GameError, RoundPhase, RoundResult, WordPrompt, WordResult,
};
use rand::Rng;
use std::time::{Duration, Instant};

use crate::{RoundEvent, RoundEventBus, RoundEventHandler, ScoringEngine, scramble};

#[derive(Debug, Clone)]
struct RoundWord {
    target: String,
    scrambled: String,
}

/// One player's pass through a list of scrambled words.
///
/// Owns the running score for its lifetime; `finish` folds it into a
/// `RoundResult` and drops the rest.
pub struct Round {
    player_name: String,
    difficulty: Difficulty,
    config: DifficultyConfig,
    words: Vec<RoundWord>,
    results: Vec<WordResult>,
    score: u32,
    phase: RoundPhase,
    current: usize,
    presented_at: Option<Instant>,
    event_bus: RoundEventBus,
}

impl Round {
    /// Build a round over `words` in play order, scrambling each one up front.
    pub fn new<R: Rng + ?Sized>(
        player_name: impl Into<String>,
        difficulty: Difficulty,
        words: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordBank);
        }

        let words = words
            .into_iter()
            .map(|target| RoundWord {
                scrambled: scramble(&target, rng),
                target,
            })
            .collect();

        Ok(Self {
            player_name: player_name.into(),
            difficulty,
            config: difficulty.config(),
            words,
            results: Vec::new(),
            score: 0,
            phase: RoundPhase::Idle,
            current: 0,
            presented_at: None,
            event_bus: RoundEventBus::new(),
        })
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    /// Reset the score and present the first word
    pub fn start(&mut self) -> Result<WordPrompt, GameError> {
        if self.phase != RoundPhase::Idle {
            return Err(GameError::invalid_state("start round", self.phase));
        }

        self.score = 0;
        self.results.clear();
        self.current = 0;

        self.event_bus.publish(RoundEvent::RoundStarted {
            player_name: self.player_name.clone(),
            difficulty: self.difficulty,
            word_count: self.words.len(),
        });

        Ok(self.present_current())
    }

    /// Present the following word, or `None` once every word is consumed
    pub fn next_word(&mut self) -> Result<Option<WordPrompt>, GameError> {
        match self.phase {
            RoundPhase::NextWord => Ok(Some(self.present_current())),
            RoundPhase::RoundComplete => Ok(None),
            phase => Err(GameError::invalid_state("advance to next word", phase)),
        }
    }

    /// Score an answer typed by the player, timed from when the word appeared
    pub fn submit_answer(&mut self, answer: &str) -> Result<WordResult, GameError> {
        let elapsed = self.elapsed_since_presented();
        self.submit_answer_with_elapsed(Some(answer), elapsed)
    }

    /// Record that the deadline passed with no answer
    pub fn submit_timeout(&mut self) -> Result<WordResult, GameError> {
        let elapsed = self.elapsed_since_presented().max(self.config.time_limit());
        self.submit_answer_with_elapsed(None, elapsed)
    }

    /// Score an answer with an externally measured elapsed time.
    /// `None` means no answer arrived before the deadline.
    pub fn submit_answer_with_elapsed(
        &mut self,
        answer: Option<&str>,
        elapsed: Duration,
    ) -> Result<WordResult, GameError> {
        if self.phase != RoundPhase::WordPresented {
            return Err(GameError::invalid_state("submit answer", self.phase));
        }
        self.phase = RoundPhase::Evaluating;

        let word = &self.words[self.current];
        let outcome = ScoringEngine::evaluate_answer(answer, &word.target, elapsed, &self.config);
        let result = WordResult {
            word: word.target.clone(),
            scrambled: word.scrambled.clone(),
            answer: answer.map(str::to_string),
            outcome,
            elapsed,
        };

        self.score += result.points();
        self.results.push(result.clone());
        self.presented_at = None;

        self.event_bus.publish(RoundEvent::WordScored {
            index: self.current + 1,
            result: result.clone(),
            round_score: self.score,
        });

        self.current += 1;
        self.phase = if self.current < self.words.len() {
            RoundPhase::NextWord
        } else {
            RoundPhase::RoundComplete
        };

        Ok(result)
    }

    /// Close the round, stamped with the current local time
    pub fn finish(self) -> Result<RoundResult, GameError> {
        self.finish_at(Local::now().naive_local())
    }

    pub fn finish_at(mut self, timestamp: NaiveDateTime) -> Result<RoundResult, GameError> {
        if self.phase != RoundPhase::RoundComplete {
            return Err(GameError::invalid_state("finish round", self.phase));
        }

        let result = RoundResult {
            player_name: self.player_name.clone(),
            total_score: self.score,
            difficulty: self.difficulty,
            timestamp,
            words_attempted: self.results.len(),
            words_solved: self.words_solved(),
        };

        self.event_bus.publish(RoundEvent::RoundCompleted {
            result: result.clone(),
        });

        Ok(result)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn results(&self) -> &[WordResult] {
        &self.results
    }

    pub fn words_solved(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.is_correct())
            .count()
    }

    fn present_current(&mut self) -> WordPrompt {
        self.phase = RoundPhase::WordPresented;
        self.presented_at = Some(Instant::now());

        let prompt = self.prompt_for(self.current);
        self.event_bus.publish(RoundEvent::WordPresented {
            prompt: prompt.clone(),
        });
        prompt
    }

    fn prompt_for(&self, index: usize) -> WordPrompt {
        WordPrompt {
            index: index + 1,
            total: self.words.len(),
            scrambled: self.words[index].scrambled.clone(),
            time_limit: self.config.time_limit(),
        }
    }

    fn elapsed_since_presented(&self) -> Duration {
        self.presented_at
            .map(|at| at.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}
