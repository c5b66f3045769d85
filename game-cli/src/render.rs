use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, StyledContent, Stylize, style};
use crossterm::terminal::{Clear, ClearType};
use game_core::ScoringEngine;
use game_persistence::Leaderboard;
use game_types::{Difficulty, DifficultyConfig, Medal, RoundResult, WordOutcome, WordPrompt, WordResult};
use std::io::{self, Write};

const WIDTH: usize = 70;

const LOGO: &str = r"
 __        __            _    ____                           _     _
 \ \      / /__  _ __ __| |  / ___|  ___ _ __ __ _ _ __ ___ | |__ | | ___
  \ \ /\ / / _ \| '__/ _` |  \___ \ / __| '__/ _` | '_ ` _ \| '_ \| |/ _ \
   \ V  V / (_) | | | (_| |   ___) | (__| | | (_| | | | | | | |_) | |  __/
    \_/\_/ \___/|_|  \__,_|  |____/ \___|_|  \__,_|_| |_| |_|_.__/|_|\___|
";

const TROPHY: &str = r"
      .-=========-.
      \'-=======-'/
      _|   .=.   |_
     ((|  {{1}}  |))
      \|   /|\   |/
       \__ '`' __/
         _`) (`_
       _/_______\_
      /___________\
";

pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

fn medal_color(medal: Medal) -> Color {
    match medal {
        Medal::Gold => Color::Yellow,
        Medal::Silver => Color::White,
        Medal::Bronze => Color::Red,
    }
}

fn rule(ch: char, color: Color) -> StyledContent<String> {
    ch.to_string().repeat(WIDTH).with(color)
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = WIDTH)
}

/// Writes every game screen to a terminal (or any writer)
pub struct Screen<W: Write> {
    out: W,
    clear_between_screens: bool,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_between_screens: true,
        }
    }

    /// Never emit clear-screen sequences; each screen is appended instead
    pub fn without_clearing(out: W) -> Self {
        Self {
            out,
            clear_between_screens: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_between_screens {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn header(&mut self, title: &str, color: Color) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "{}", LOGO.cyan())?;
        writeln!(self.out, "{}", rule('=', color))?;
        writeln!(self.out, "{}", centered(title).yellow())?;
        writeln!(self.out, "{}", rule('=', color))
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        self.header("WELCOME TO WORD SCRAMBLE CHALLENGE", Color::Yellow)?;
        self.out.flush()
    }

    pub fn name_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "\n{}", "Enter your name: ".cyan())?;
        self.out.flush()
    }

    pub fn invalid_name(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "Please enter a valid name.".red())
    }

    pub fn main_menu(&mut self, player_name: &str) -> io::Result<()> {
        self.header(
            &format!("WORD SCRAMBLE CHALLENGE - Player: {}", player_name),
            Color::Yellow,
        )?;
        writeln!(self.out, "{} Play Game", "1.".green())?;
        writeln!(self.out, "{} View Leaderboard", "2.".yellow())?;
        writeln!(self.out, "{} Instructions", "3.".cyan())?;
        writeln!(self.out, "{} Exit", "4.".red())?;
        write!(self.out, "\n{}", "Enter your choice (1-4): ".cyan())?;
        self.out.flush()
    }

    pub fn invalid_choice(&mut self, options: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("Invalid choice. Please enter {}.", options).red()
        )?;
        self.out.flush()
    }

    pub fn difficulty_menu(&mut self) -> io::Result<()> {
        self.header("DIFFICULTY SELECTION", Color::Yellow)?;

        for (number, difficulty, label, lengths) in [
            ("1", Difficulty::Easy, "EASY MODE - BEGINNER", "Shorter words (4-5)"),
            ("2", Difficulty::Medium, "MEDIUM MODE - CASUAL", "Medium words (6-8)"),
            ("3", Difficulty::Hard, "HARD MODE - EXPERT", "Longer words (9+)"),
        ] {
            let config = difficulty.config();
            let color = difficulty_color(difficulty);
            writeln!(self.out)?;
            writeln!(self.out, "{}", format!("{}. {}", number, label).with(color))?;
            writeln!(self.out, "   - {} words", config.word_count)?;
            writeln!(self.out, "   - {} seconds per word", config.time_limit_secs)?;
            writeln!(self.out, "   - {} points per word", config.points_per_word)?;
            writeln!(self.out, "   - {}", lengths)?;
        }

        write!(self.out, "\n{}", "Enter your choice (1-3): ".cyan())?;
        self.out.flush()
    }

    pub fn round_intro(&mut self, difficulty: Difficulty) -> io::Result<()> {
        let config = difficulty.config();
        let color = difficulty_color(difficulty);

        self.header(
            &format!(
                "WORD SCRAMBLE CHALLENGE - {} MODE",
                difficulty.as_str().to_uppercase()
            ),
            color,
        )?;
        writeln!(
            self.out,
            "Unscramble {} words. {} seconds per word.",
            config.word_count, config.time_limit_secs
        )?;
        writeln!(
            self.out,
            "Each correct answer: {} + time bonus!",
            format!("+{} points", config.points_per_word).green()
        )?;
        writeln!(self.out, "{}", rule('=', color))?;
        self.out.flush()
    }

    pub fn press_enter(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "\n{}", message.cyan())?;
        self.out.flush()
    }

    pub fn get_ready(&mut self, player_name: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", format!("Get ready, {}!", player_name).yellow())?;
        self.out.flush()
    }

    pub fn countdown_tick(&mut self, remaining: u64) -> io::Result<()> {
        let color = match remaining {
            3 => Color::Red,
            2 => Color::Yellow,
            _ => Color::Green,
        };
        write!(self.out, "{}   \r", format!("{}...", remaining).with(color))?;
        self.out.flush()
    }

    pub fn go(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}          ", "GO!".cyan())?;
        self.out.flush()
    }

    pub fn word_prompt(&mut self, prompt: &WordPrompt, difficulty: Difficulty) -> io::Result<()> {
        let color = difficulty_color(difficulty);
        let label = format!(
            "Word {}/{}: {}",
            prompt.index,
            prompt.total,
            prompt.scrambled.to_uppercase()
        );

        writeln!(self.out, "\n{}", "-".repeat(40).with(color))?;
        writeln!(self.out, "{}", format!("+{}+", "-".repeat(label.len() + 2)).with(color))?;
        writeln!(self.out, "{} {} {}", "|".with(color), label.as_str().yellow(), "|".with(color))?;
        writeln!(self.out, "{}", format!("+{}+", "-".repeat(label.len() + 2)).with(color))?;
        writeln!(
            self.out,
            "{}",
            format!("Time: {} seconds", prompt.time_limit.as_secs()).green()
        )?;
        write!(self.out, "{}", "Your answer: ".cyan())?;
        self.out.flush()
    }

    pub fn word_result(
        &mut self,
        result: &WordResult,
        round_score: u32,
        config: &DifficultyConfig,
    ) -> io::Result<()> {
        match result.outcome {
            WordOutcome::Correct {
                base_points,
                time_bonus,
            } => {
                writeln!(self.out, "\n{}", "CORRECT!".green())?;
                writeln!(
                    self.out,
                    "+{} points + {} time bonus = {}",
                    base_points,
                    time_bonus,
                    format!("+{} points", base_points + time_bonus).yellow()
                )?;
                writeln!(
                    self.out,
                    "Current Score: {}  (max {} per word)",
                    style(round_score).yellow(),
                    ScoringEngine::max_word_points(config)
                )?;
            }
            WordOutcome::Incorrect => {
                let answer = result.answer.as_deref().unwrap_or_default();
                writeln!(self.out, "\n{}", "WRONG!".red())?;
                writeln!(self.out, "Your answer: {}", answer.to_uppercase().yellow())?;
                writeln!(self.out, "Correct word: {}", result.word.to_uppercase().yellow())?;
            }
            WordOutcome::Timeout => {
                writeln!(
                    self.out,
                    "\n{} The word was: {}",
                    "Time's up!".red(),
                    result.word.to_uppercase().yellow()
                )?;
            }
        }
        self.out.flush()
    }

    pub fn round_summary(&mut self, result: &RoundResult) -> io::Result<()> {
        writeln!(self.out, "\n{}", rule('=', Color::Green))?;
        writeln!(self.out, "{}", centered("GAME COMPLETE!").yellow())?;
        writeln!(self.out, "{}", rule('=', Color::Green))?;
        writeln!(
            self.out,
            "{}",
            format!("Final Score: {} points!", result.total_score).yellow()
        )?;
        writeln!(
            self.out,
            "\nDifficulty: {}",
            result
                .difficulty
                .as_str()
                .with(difficulty_color(result.difficulty))
        )?;
        writeln!(self.out, "Words attempted: {}", result.words_attempted)?;
        writeln!(self.out, "Words solved: {}", result.words_solved)?;
        self.out.flush()
    }

    /// Podium screen for a new top-three entry; `rank` is 0-based
    pub fn congratulations(&mut self, player_name: &str, rank: usize, score: u32) -> io::Result<()> {
        let Some(medal) = Medal::for_rank(rank) else {
            return Ok(());
        };

        self.clear()?;
        writeln!(self.out, "{}", TROPHY.cyan())?;
        writeln!(
            self.out,
            "\n{}",
            format!("CONGRATULATIONS {}!", player_name.to_uppercase()).yellow()
        )?;
        writeln!(self.out, "\n{}", medal.label().with(medal_color(medal)))?;
        writeln!(
            self.out,
            "\nYou've reached {} on the leaderboard!",
            format!("RANK #{}", rank + 1).cyan()
        )?;
        writeln!(self.out, "Your score: {}", format!("{} points", score).yellow())?;
        self.out.flush()
    }

    pub fn leaderboard(&mut self, leaderboard: &Leaderboard) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "\n{}", rule('=', Color::Cyan))?;
        writeln!(self.out, "{}", centered("WORD SCRAMBLE CHALLENGE LEADERBOARD").yellow())?;
        writeln!(self.out, "{}", rule('=', Color::Cyan))?;

        if leaderboard.is_empty() {
            writeln!(self.out, "{}", centered("No scores recorded yet. Be the first one!"))?;
        } else {
            writeln!(
                self.out,
                "{}",
                format!(
                    "{:<6}{:<15}{:<10}{:<12}{:<20}",
                    "Rank", "Name", "Score", "Difficulty", "Date"
                )
                .cyan()
            )?;
            writeln!(self.out, "{}", rule('-', Color::Cyan))?;

            for (i, entry) in leaderboard.entries().iter().enumerate() {
                let rank_color = Medal::for_rank(i).map(medal_color).unwrap_or(Color::Cyan);
                writeln!(
                    self.out,
                    "{}{}{}{}{}",
                    format!("{:<6}", i + 1).with(rank_color),
                    format!("{:<15}", entry.name),
                    format!("{:<10}", entry.score).green(),
                    format!("{:<12}", entry.difficulty.as_str()).with(difficulty_color(entry.difficulty)),
                    format!("{:<20}", entry.date).cyan()
                )?;
            }
        }

        writeln!(self.out, "{}", rule('=', Color::Cyan))?;
        self.out.flush()
    }

    pub fn instructions(&mut self) -> io::Result<()> {
        self.header("HOW TO PLAY WORD SCRAMBLE CHALLENGE", Color::Yellow)?;

        for (i, line) in [
            "Words will appear with their letters scrambled",
            "Type the correct unscrambled word before time runs out",
            "You earn points for each correct answer",
            "You get bonus points for answering quickly",
            "Try to get the highest score and top the leaderboard!",
        ]
        .iter()
        .enumerate()
        {
            writeln!(self.out, "{} {}", format!("{}.", i + 1).green(), line)?;
        }

        writeln!(self.out, "\n{}", "Example:".cyan())?;
        writeln!(self.out, "If you see: {}", "ESDTU".yellow())?;
        writeln!(self.out, "You should type: {}", "DUETS".green())?;

        let easy = Difficulty::Easy.config();
        let hard = Difficulty::Hard.config();
        writeln!(self.out, "\n{}", "Scoring:".cyan())?;
        writeln!(
            self.out,
            "Correct answer: {} (depends on difficulty)",
            format!("+{}-{} points", easy.points_per_word, hard.points_per_word).green()
        )?;
        writeln!(
            self.out,
            "Speed bonus: {} for quick answers (1 point per 5 seconds left)",
            format!(
                "Up to +{} points",
                ScoringEngine::max_word_points(&easy) - easy.points_per_word
            )
            .green()
        )?;

        writeln!(self.out, "\n{}", "Difficulty Levels:".cyan())?;
        writeln!(self.out, "{} Shorter words, more time", "Easy:".green())?;
        writeln!(self.out, "{} Medium words, moderate time", "Medium:".yellow())?;
        writeln!(self.out, "{} Longer words, less time", "Hard:".red())?;
        self.out.flush()
    }

    pub fn exit_screen(&mut self, player_name: &str, high_score: u32) -> io::Result<()> {
        self.clear()?;
        writeln!(
            self.out,
            "\n{}",
            format!("Thanks for playing Word Scramble Challenge, {}!", player_name).yellow()
        )?;
        writeln!(self.out, "\nWe hope to see you again soon!")?;
        writeln!(
            self.out,
            "\nYour highest score: {}",
            style(high_score).green()
        )?;
        self.out.flush()
    }

    pub fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\n{}", "Game interrupted. Thanks for playing!".yellow())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::LeaderboardEntry;
    use std::time::Duration;

    fn rendered(draw: impl FnOnce(&mut Screen<Vec<u8>>) -> io::Result<()>) -> String {
        let mut screen = Screen::without_clearing(Vec::new());
        draw(&mut screen).unwrap();
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn test_word_prompt_shows_uppercase_scramble() {
        let prompt = WordPrompt {
            index: 3,
            total: 10,
            scrambled: "ekac".to_string(),
            time_limit: Duration::from_secs(60),
        };
        let text = rendered(|s| s.word_prompt(&prompt, Difficulty::Easy));

        assert!(text.contains("Word 3/10: EKAC"));
        assert!(text.contains("Time: 60 seconds"));
    }

    #[test]
    fn test_word_results() {
        let config = Difficulty::Easy.config();
        let mut result = WordResult {
            word: "cake".to_string(),
            scrambled: "ekac".to_string(),
            answer: Some("cake".to_string()),
            outcome: WordOutcome::Correct {
                base_points: 10,
                time_bonus: 10,
            },
            elapsed: Duration::from_secs(10),
        };

        let text = rendered(|s| s.word_result(&result, 20, &config));
        assert!(text.contains("CORRECT!"));
        assert!(text.contains("+20 points"));

        result.answer = Some("kace".to_string());
        result.outcome = WordOutcome::Incorrect;
        let text = rendered(|s| s.word_result(&result, 0, &config));
        assert!(text.contains("WRONG!"));
        assert!(text.contains("KACE"));
        assert!(text.contains("CAKE"));

        result.answer = None;
        result.outcome = WordOutcome::Timeout;
        let text = rendered(|s| s.word_result(&result, 0, &config));
        assert!(text.contains("Time's up!"));
        assert!(text.contains("CAKE"));
    }

    #[test]
    fn test_leaderboard_table() {
        let text = rendered(|s| s.leaderboard(&Leaderboard::new()));
        assert!(text.contains("No scores recorded yet"));

        let mut board = Leaderboard::new();
        board.insert(LeaderboardEntry {
            name: "Ava".to_string(),
            score: 220,
            difficulty: Difficulty::Easy,
            date: "2024-06-01 09:15".to_string(),
        });
        let text = rendered(|s| s.leaderboard(&board));
        assert!(text.contains("Ava"));
        assert!(text.contains("220"));
        assert!(text.contains("2024-06-01 09:15"));
    }

    #[test]
    fn test_congratulations_only_for_podium() {
        let text = rendered(|s| s.congratulations("Ava", 1, 220));
        assert!(text.contains("CONGRATULATIONS AVA!"));
        assert!(text.contains("SILVER MEDAL"));
        assert!(text.contains("RANK #2"));

        assert!(rendered(|s| s.congratulations("Ava", 3, 100)).is_empty());
    }

    #[test]
    fn test_clearing_can_be_disabled() {
        let mut screen = Screen::new(Vec::new());
        screen.clear().unwrap();
        assert!(!screen.into_inner().is_empty());

        assert!(rendered(|s| s.clear()).is_empty());
    }
}
