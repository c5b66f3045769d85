#![allow(dead_code)]

use game_core::{Round, RoundEvent, RoundEventHandler, WordBank};
use game_types::Difficulty;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Deterministic RNG for repeatable selections and scrambles
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a small word bank with enough words for every tier
pub fn create_test_bank() -> WordBank {
    let word_list = "cake\ngame\nblue\njump\nplay\ntalk\nwalk\nfast\nswim\nread\n\
                     computer\nlanguage\ninternet\nvictory\njourney\n\
                     intelligence\ndevelopment\nadventure\nwonderful\nbeautiful";
    WordBank::new(word_list)
}

/// Creates a round over a known play order
pub fn create_round_with_words(name: &str, difficulty: Difficulty, words: &[&str]) -> Round {
    let mut rng = seeded_rng(1);
    let words = words.iter().map(|w| w.to_string()).collect();
    Round::new(name, difficulty, words, &mut rng).unwrap()
}

/// Answers every word in `answers` order after `elapsed`, returns the final score
pub fn play_answers(round: &mut Round, answers: &[&str], elapsed: Duration) -> u32 {
    round.start().unwrap();
    for (i, answer) in answers.iter().enumerate() {
        if i > 0 {
            round.next_word().unwrap();
        }
        round
            .submit_answer_with_elapsed(Some(answer), elapsed)
            .unwrap();
    }
    round.score()
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<RoundEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.name()).collect()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl RoundEventHandler for EventCollector {
    fn handle_event(&mut self, event: RoundEvent) {
        self.events.lock().unwrap().push(event);
    }
}
