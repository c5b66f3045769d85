use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("Failed to serialize leaderboard: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write leaderboard to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
