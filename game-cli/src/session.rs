use anyhow::{Context, Result};
use game_core::{Round, TracingEventHandler, WordBank};
use game_persistence::{Leaderboard, LeaderboardRepository};
use game_types::{Difficulty, LeaderboardEntry, RoundResult};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// What a finished round left behind
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub result: RoundResult,
    /// 0-based leaderboard position, `None` if the score missed the board
    pub rank: Option<usize>,
    pub leaderboard: Leaderboard,
}

/// State that outlives a single round: who is playing, at what tier,
/// and where their scores go.
pub struct GameSession {
    player_name: String,
    difficulty: Difficulty,
    word_bank: WordBank,
    repository: LeaderboardRepository,
    rng: StdRng,
}

impl GameSession {
    pub fn new(word_bank: WordBank, repository: LeaderboardRepository) -> Self {
        Self::with_rng(word_bank, repository, StdRng::from_os_rng())
    }

    pub fn with_rng(word_bank: WordBank, repository: LeaderboardRepository, rng: StdRng) -> Self {
        Self {
            player_name: String::new(),
            difficulty: Difficulty::default(),
            word_bank,
            repository,
            rng,
        }
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
        info!("Player {} joined", self.player_name);
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        info!("Difficulty set to {}", difficulty);
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Draw a fresh set of words for the current tier and wrap them in a round
    pub fn start_round(&mut self) -> Result<Round> {
        let words = self
            .word_bank
            .words_for_tier(self.difficulty, &mut self.rng)
            .with_context(|| format!("Failed to pick words for a {} round", self.difficulty))?;

        let mut round = Round::new(self.player_name.clone(), self.difficulty, words, &mut self.rng)?;
        round.add_handler(Box::new(TracingEventHandler));

        Ok(round)
    }

    /// Close a completed round and record it on the leaderboard
    pub async fn complete_round(&mut self, round: Round) -> Result<RoundSummary> {
        let result = round.finish()?;
        let outcome = self
            .repository
            .record(LeaderboardEntry::from(&result))
            .await
            .context("Failed to save the leaderboard")?;

        Ok(RoundSummary {
            result,
            rank: outcome.rank,
            leaderboard: outcome.leaderboard,
        })
    }

    pub async fn leaderboard(&self) -> Leaderboard {
        self.repository.load().await
    }

    pub async fn high_score(&self) -> u32 {
        self.repository.high_score(&self.player_name).await
    }
}
