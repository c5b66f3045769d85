pub mod difficulty;
pub mod errors;
pub mod game;
pub mod leaderboard;

// Re-export all types
pub use difficulty::*;
pub use errors::*;
pub use game::*;
pub use leaderboard::*;
