use anyhow::Result;
use game_core::Round;
use game_types::{Difficulty, Medal};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::input::{AnswerSource, TimedAnswer};
use crate::menu::{MenuChoice, parse_difficulty_choice, parse_player_name};
use crate::render::Screen;
use crate::session::GameSession;

const COUNTDOWN_TICK: Duration = Duration::from_millis(700);
const NOTICE_PAUSE: Duration = Duration::from_millis(1500);

/// Delays between screens. Zero everywhere makes the app fully input-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub countdown_seconds: u64,
    pub countdown_tick: Duration,
    pub notice: Duration,
}

impl Pacing {
    pub fn from_config(config: &Config) -> Self {
        Self {
            countdown_seconds: config.countdown_seconds,
            countdown_tick: COUNTDOWN_TICK,
            notice: NOTICE_PAUSE,
        }
    }

    pub fn instant() -> Self {
        Self {
            countdown_seconds: 0,
            countdown_tick: Duration::ZERO,
            notice: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input closed; unwind to the caller
    Quit,
}

/// Interactive front end: menus, rounds and the screens between them
pub struct App<S: AnswerSource, W: Write> {
    session: GameSession,
    source: S,
    screen: Screen<W>,
    pacing: Pacing,
}

impl<S: AnswerSource, W: Write> App<S, W> {
    pub fn new(session: GameSession, source: S, screen: Screen<W>, pacing: Pacing) -> Self {
        Self {
            session,
            source,
            screen,
            pacing,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.screen.into_inner()
    }

    /// Run until the player exits or input closes
    pub async fn run(&mut self) -> Result<()> {
        self.screen.welcome()?;

        let Some(name) = self.prompt_player_name().await? else {
            debug!("Input closed before a name was entered");
            return Ok(());
        };
        self.session.set_player_name(name);

        loop {
            self.screen.main_menu(self.session.player_name())?;

            let Some(line) = self.source.read_line().await? else {
                debug!("Input closed at the main menu");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Play) => self.play().await?,
                Some(MenuChoice::Leaderboard) => self.show_leaderboard().await?,
                Some(MenuChoice::Instructions) => {
                    self.screen.instructions()?;
                    self.wait_for_enter("Press Enter to return to main menu...")
                        .await?
                }
                Some(MenuChoice::Exit) => {
                    let high_score = self.session.high_score().await;
                    self.screen
                        .exit_screen(self.session.player_name(), high_score)?;
                    return Ok(());
                }
                None => {
                    self.screen.invalid_choice("1-4")?;
                    self.pause(self.pacing.notice).await;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    async fn prompt_player_name(&mut self) -> Result<Option<String>> {
        loop {
            self.screen.name_prompt()?;
            let Some(line) = self.source.read_line().await? else {
                return Ok(None);
            };
            match parse_player_name(&line) {
                Some(name) => return Ok(Some(name)),
                None => self.screen.invalid_name()?,
            }
        }
    }

    async fn choose_difficulty(&mut self) -> Result<Option<Difficulty>> {
        loop {
            self.screen.difficulty_menu()?;
            let Some(line) = self.source.read_line().await? else {
                return Ok(None);
            };
            match parse_difficulty_choice(&line) {
                Some(difficulty) => return Ok(Some(difficulty)),
                None => {
                    self.screen.invalid_choice("1, 2, or 3")?;
                    self.pause(self.pacing.notice).await;
                }
            }
        }
    }

    async fn play(&mut self) -> Result<Flow> {
        let Some(difficulty) = self.choose_difficulty().await? else {
            return Ok(Flow::Quit);
        };
        self.session.select_difficulty(difficulty);

        let mut round = self.session.start_round()?;

        self.screen.round_intro(difficulty)?;
        if self.wait_for_enter("Press Enter to start...").await? == Flow::Quit {
            return Ok(Flow::Quit);
        }
        self.countdown().await?;

        if self.play_words(&mut round).await? == Flow::Quit {
            warn!(
                "Input closed mid-round; abandoning {} round for {}",
                difficulty,
                round.player_name()
            );
            return Ok(Flow::Quit);
        }

        let summary = self.session.complete_round(round).await?;
        self.screen.round_summary(&summary.result)?;

        if let Some(rank) = summary.rank.filter(|rank| Medal::for_rank(*rank).is_some()) {
            self.pause(self.pacing.notice).await;
            self.screen.congratulations(
                &summary.result.player_name,
                rank,
                summary.result.total_score,
            )?;
        }

        self.wait_for_enter("Press Enter to return to main menu...")
            .await
    }

    async fn play_words(&mut self, round: &mut Round) -> Result<Flow> {
        let difficulty = round.difficulty();
        let mut prompt = Some(round.start()?);

        while let Some(current) = prompt {
            self.screen.word_prompt(&current, difficulty)?;

            let (result, timed_out) = match self.source.read_answer(current.time_limit).await? {
                Some(TimedAnswer::Answered(answer)) => (round.submit_answer(&answer)?, false),
                Some(TimedAnswer::TimedOut) => (round.submit_timeout()?, true),
                None => return Ok(Flow::Quit),
            };

            self.screen
                .word_result(&result, round.score(), round.config())?;

            if timed_out {
                // Whatever the player types after the deadline lands here
                if self.wait_for_enter("Press Enter to continue...").await? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            } else {
                self.pause(self.pacing.notice).await;
            }

            prompt = round.next_word()?;
        }

        Ok(Flow::Continue)
    }

    async fn show_leaderboard(&mut self) -> Result<Flow> {
        let leaderboard = self.session.leaderboard().await;
        self.screen.leaderboard(&leaderboard)?;
        self.wait_for_enter("Press Enter to return to main menu...")
            .await
    }

    async fn countdown(&mut self) -> Result<()> {
        if self.pacing.countdown_seconds == 0 {
            return Ok(());
        }

        self.screen.get_ready(self.session.player_name())?;
        for remaining in (1..=self.pacing.countdown_seconds).rev() {
            self.screen.countdown_tick(remaining)?;
            self.pause(self.pacing.countdown_tick).await;
        }
        self.screen.go()?;
        Ok(())
    }

    async fn wait_for_enter(&mut self, message: &str) -> Result<Flow> {
        self.screen.press_enter(message)?;
        Ok(match self.source.read_line().await? {
            Some(_) => Flow::Continue,
            None => Flow::Quit,
        })
    }

    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
