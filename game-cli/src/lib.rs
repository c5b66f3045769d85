pub mod app;
pub mod config;
pub mod input;
pub mod menu;
pub mod render;
pub mod session;

use anyhow::{Context, Result};
use game_core::WordBank;
use game_persistence::LeaderboardRepository;
use game_types::Difficulty;
use std::io;
use tracing::{debug, info};

use crate::app::{App, Pacing};
use crate::config::Config;
use crate::input::StdinSource;
use crate::render::Screen;
use crate::session::GameSession;

/// Load the configured word bank, refusing one that cannot fill every tier
pub fn load_word_bank(config: &Config) -> Result<WordBank> {
    let bank = match &config.word_list_path {
        Some(path) => {
            info!("Loading words from {}", path.display());
            WordBank::from_file(path)?
        }
        None => WordBank::builtin(),
    };

    bank.validate().context("Word bank cannot supply every difficulty")?;
    info!("Word bank ready with {} words", bank.len());
    for difficulty in Difficulty::ALL {
        debug!(
            "{} tier has {} words in its length band",
            difficulty,
            bank.tier_words(difficulty).len()
        );
    }

    Ok(bank)
}

/// Play on the process's terminal until the player exits
pub async fn run(config: Config) -> Result<()> {
    let word_bank = load_word_bank(&config)?;
    let repository = LeaderboardRepository::new(config.leaderboard_path.clone());
    info!("Leaderboard at {}", repository.path().display());

    let session = GameSession::new(word_bank, repository);
    let mut app = App::new(
        session,
        StdinSource::new(),
        Screen::new(io::stdout()),
        Pacing::from_config(&config),
    );

    app.run().await
}
