pub mod game_events;
pub mod round;
pub mod scoring;
pub mod scrambler;
pub mod word_bank;

// Re-export main components
pub use game_events::*;
pub use round::*;
pub use scoring::*;
pub use scrambler::*;
pub use word_bank::*;
