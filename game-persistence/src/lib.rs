pub mod error;
pub mod leaderboard;
pub mod repositories;
pub mod storage;

pub use error::LeaderboardError;
pub use leaderboard::Leaderboard;
pub use repositories::{LeaderboardRepository, RecordOutcome};
