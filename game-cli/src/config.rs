use anyhow::{Context, Result};
use game_persistence::storage::DEFAULT_LEADERBOARD_FILE;
use std::env;
use std::path::PathBuf;
use tracing::Level;

pub const LEADERBOARD_PATH_VAR: &str = "WORD_SCRAMBLE_LEADERBOARD";
pub const WORD_LIST_VAR: &str = "WORD_SCRAMBLE_WORDS";
pub const LOG_LEVEL_VAR: &str = "WORD_SCRAMBLE_LOG";
pub const COUNTDOWN_VAR: &str = "WORD_SCRAMBLE_COUNTDOWN";

#[derive(Debug, Clone)]
pub struct Config {
    pub leaderboard_path: PathBuf,
    pub word_list_path: Option<PathBuf>,
    pub log_level: Level,
    pub countdown_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            leaderboard_path: lookup(LEADERBOARD_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.leaderboard_path),
            word_list_path: lookup(WORD_LIST_VAR).map(PathBuf::from),
            log_level: match lookup(LOG_LEVEL_VAR) {
                Some(level) => level
                    .parse()
                    .with_context(|| format!("Invalid {}: {}", LOG_LEVEL_VAR, level))?,
                None => defaults.log_level,
            },
            countdown_seconds: match lookup(COUNTDOWN_VAR) {
                Some(secs) => secs
                    .parse()
                    .with_context(|| format!("Invalid {}: {}", COUNTDOWN_VAR, secs))?,
                None => defaults.countdown_seconds,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            word_list_path: None,
            log_level: Level::WARN,
            countdown_seconds: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(
            config.leaderboard_path,
            PathBuf::from("word_scramble_leaderboard.json")
        );
        assert_eq!(config.word_list_path, None);
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.countdown_seconds, 3);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LEADERBOARD_PATH_VAR, "/tmp/scores.json"),
            (WORD_LIST_VAR, "words.txt"),
            (LOG_LEVEL_VAR, "debug"),
            (COUNTDOWN_VAR, "0"),
        ]))
        .unwrap();

        assert_eq!(config.leaderboard_path, PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.word_list_path, Some(PathBuf::from("words.txt")));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.countdown_seconds, 0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_lookup(lookup_from(&[(COUNTDOWN_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().contains(COUNTDOWN_VAR));

        let err = Config::from_lookup(lookup_from(&[(LOG_LEVEL_VAR, "loud")])).unwrap_err();
        assert!(err.to_string().contains(LOG_LEVEL_VAR));
    }
}
