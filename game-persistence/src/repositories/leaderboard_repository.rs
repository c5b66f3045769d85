use game_types::LeaderboardEntry;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::storage::write_atomic;
use crate::{Leaderboard, LeaderboardError};

/// Result of recording a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    pub leaderboard: Leaderboard,
    /// 0-based position of the new entry, `None` if it did not make the board
    pub rank: Option<usize>,
}

/// Leaderboard persisted as a JSON array in a single file
pub struct LeaderboardRepository {
    path: PathBuf,
}

impl LeaderboardRepository {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored leaderboard. A missing, unreadable or malformed file
    /// reads as an empty board.
    pub async fn load(&self) -> Leaderboard {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No leaderboard at {}, starting empty", self.path.display());
                return Leaderboard::new();
            }
            Err(e) => {
                warn!(
                    "Failed to read leaderboard {}: {}; treating as empty",
                    self.path.display(),
                    e
                );
                return Leaderboard::new();
            }
        };

        match serde_json::from_slice::<Vec<LeaderboardEntry>>(&bytes) {
            Ok(entries) => Leaderboard::from_entries(entries),
            Err(e) => {
                warn!(
                    "Leaderboard {} is malformed: {}; treating as empty",
                    self.path.display(),
                    e
                );
                Leaderboard::new()
            }
        }
    }

    /// Write the whole board, replacing the file atomically
    pub async fn save(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = serde_json::to_vec_pretty(leaderboard)?;

        write_atomic(&self.path, &json)
            .await
            .map_err(|source| LeaderboardError::Write {
                path: self.path.clone(),
                source,
            })
    }

    /// Load, insert `entry`, trim to the top ten and save.
    pub async fn record(&self, entry: LeaderboardEntry) -> Result<RecordOutcome, LeaderboardError> {
        let mut leaderboard = self.load().await;
        let name = entry.name.clone();
        let score = entry.score;

        let rank = leaderboard.insert(entry);
        self.save(&leaderboard).await?;

        match rank {
            Some(rank) => info!("Recorded {} for {} at rank {}", score, name, rank + 1),
            None => info!("Score {} for {} did not make the leaderboard", score, name),
        }

        Ok(RecordOutcome { leaderboard, rank })
    }

    /// Highest stored score for `name`, or 0 if they have none
    pub async fn high_score(&self, name: &str) -> u32 {
        self.load().await.high_score(name)
    }
}
