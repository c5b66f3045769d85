use game_types::{Difficulty, RoundResult, WordPrompt, WordResult};

#[derive(Debug, Clone)]
pub enum RoundEvent {
    RoundStarted {
        player_name: String,
        difficulty: Difficulty,
        word_count: usize,
    },
    WordPresented {
        prompt: WordPrompt,
    },
    WordScored {
        index: usize,
        result: WordResult,
        round_score: u32,
    },
    RoundCompleted {
        result: RoundResult,
    },
}

impl RoundEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RoundEvent::RoundStarted { .. } => "round_started",
            RoundEvent::WordPresented { .. } => "word_presented",
            RoundEvent::WordScored { .. } => "word_scored",
            RoundEvent::RoundCompleted { .. } => "round_completed",
        }
    }
}

/// Event handler trait for processing round events
pub trait RoundEventHandler {
    fn handle_event(&mut self, event: RoundEvent);
}

/// Simple event bus for distributing round events
pub struct RoundEventBus {
    handlers: Vec<Box<dyn RoundEventHandler>>,
}

impl RoundEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: RoundEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for RoundEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards every round event to `tracing`
pub struct TracingEventHandler;

impl RoundEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: RoundEvent) {
        match &event {
            RoundEvent::RoundStarted {
                player_name,
                difficulty,
                word_count,
            } => tracing::info!(
                "Round started for {} on {} ({} words)",
                player_name,
                difficulty,
                word_count
            ),
            RoundEvent::WordPresented { prompt } => {
                tracing::debug!("Word {}/{} presented", prompt.index, prompt.total)
            }
            RoundEvent::WordScored {
                index,
                result,
                round_score,
            } => tracing::debug!(
                "Word {} scored {:?} in {:.1}s, round score {}",
                index,
                result.outcome,
                result.elapsed.as_secs_f64(),
                round_score
            ),
            RoundEvent::RoundCompleted { result } => tracing::info!(
                "Round completed for {} with {} points",
                result.player_name,
                result.total_score
            ),
        }
    }
}
