use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// An answer line, or notice that the deadline passed first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimedAnswer {
    Answered(String),
    TimedOut,
}

/// Where player input comes from.
///
/// Both reads return `None` once the input is closed.
#[async_trait]
pub trait AnswerSource: Send {
    /// Next line, waiting as long as it takes
    async fn read_line(&mut self) -> Result<Option<String>>;

    /// Next line, or `TimedOut` if nothing arrives within `limit`
    async fn read_answer(&mut self, limit: Duration) -> Result<Option<TimedAnswer>>;
}

/// Line reader over the process's standard input
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerSource for StdinSource {
    async fn read_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next_line()
            .await
            .context("Failed to read from standard input")
    }

    async fn read_answer(&mut self, limit: Duration) -> Result<Option<TimedAnswer>> {
        // next_line is cancel safe: a half-typed line stays buffered for the next read
        match tokio::time::timeout(limit, self.lines.next_line()).await {
            Ok(line) => Ok(line
                .context("Failed to read from standard input")?
                .map(TimedAnswer::Answered)),
            Err(_) => Ok(Some(TimedAnswer::TimedOut)),
        }
    }
}
