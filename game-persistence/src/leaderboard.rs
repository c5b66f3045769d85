use game_types::{LeaderboardEntry, LEADERBOARD_CAPACITY};
use serde::Serialize;

/// Top scores, highest first, at most `LEADERBOARD_CAPACITY` long.
/// Equal scores keep the order they were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw entries (e.g. a hand-edited file), restoring the ordering invariant
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        // sort_by is stable, so ties keep file order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry and return its 0-based rank, or `None` if it fell off the board.
    ///
    /// The entry goes after every existing entry with an equal or higher score,
    /// which is where an append followed by a stable descending sort puts it.
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let position = self
            .entries
            .partition_point(|existing| existing.score >= entry.score);

        self.entries.insert(position, entry);
        self.entries.truncate(LEADERBOARD_CAPACITY);

        (position < LEADERBOARD_CAPACITY).then_some(position)
    }

    /// Highest score recorded under `name`, or 0
    pub fn high_score(&self, name: &str) -> u32 {
        self.entries
            .iter()
            .filter(|entry| entry.name == name)
            .map(|entry| entry.score)
            .max()
            .unwrap_or(0)
    }
}
