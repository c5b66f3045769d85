
use game_core::WordBank;
use game_types::Difficulty;
use test_helpers::*;

#[tokio::test]
async fn test_exit_immediately() {
    let mut test = TestApp::new(vec![line("Ava"), line("4")]);
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert!(text.contains("WELCOME TO WORD SCRAMBLE CHALLENGE"));
    assert!(text.contains("Thanks for playing Word Scramble Challenge, Ava!"));
    assert!(test.repository().load().await.is_empty());
    assert!(!test.leaderboard_path.exists());
}

#[tokio::test]
async fn test_blank_name_is_reprompted() {
    let mut test = TestApp::new(vec![line(""), line("   "), line(" Ava "), line("4")]);
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert_eq!(text.matches("Please enter a valid name.").count(), 2);
    assert_eq!(test.app.session().player_name(), "Ava");
}

#[tokio::test]
async fn test_invalid_menu_input_reprompts() {
    let mut test = TestApp::new(vec![line("Ava"), line("9"), line("play"), line("4")]);
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert_eq!(text.matches("Invalid choice. Please enter 1-4.").count(), 2);
    assert_eq!(text.matches("Enter your choice (1-4)").count(), 3);
}

#[tokio::test]
async fn test_view_empty_leaderboard_and_instructions() {
    let mut test = TestApp::new(vec![line("Ava"), line("2"), line(""), line("3"), line(""), line("4")]);
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert!(text.contains("No scores recorded yet. Be the first one!"));
    assert!(text.contains("HOW TO PLAY WORD SCRAMBLE CHALLENGE"));
    assert!(text.contains("ESDTU"));
}

#[tokio::test]
async fn test_input_closed_at_start_ends_quietly() {
    let mut test = TestApp::new(vec![]);
    test.app.run().await.unwrap();
    assert!(test.output.text().contains("Enter your name"));
}

#[tokio::test]
async fn test_all_timeouts_score_zero_and_are_recorded() {
    let count = Difficulty::Easy.config().word_count;
    let mut test = TestApp::new(round_script("1", count, Step::Timeout));
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert_eq!(text.matches("Time's up!").count(), count);
    assert!(text.contains("Final Score: 0 points!"));
    assert!(text.contains("Words attempted: 10"));
    assert!(text.contains("Words solved: 0"));

    let board = test.repository().load().await;
    assert_eq!(board.len(), 1);
    assert_eq!(board.entries()[0].name, "Ava");
    assert_eq!(board.entries()[0].score, 0);
    assert_eq!(board.entries()[0].difficulty, Difficulty::Easy);

    test.cleanup().await;
}

#[tokio::test]
async fn test_wrong_answers_score_zero() {
    let count = Difficulty::Medium.config().word_count;
    let mut test = TestApp::new(round_script("2", count, line("zzzz")));
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert_eq!(text.matches("WRONG!").count(), count);
    assert!(text.contains("ZZZZ"));
    assert!(text.contains("Final Score: 0 points!"));
    assert_eq!(test.repository().load().await.entries()[0].difficulty, Difficulty::Medium);

    test.cleanup().await;
}

#[tokio::test]
async fn test_perfect_easy_round_tops_leaderboard() {
    let bank = WordBank::new(EASY_WORDS);
    let count = Difficulty::Easy.config().word_count;
    let mut test = TestApp::with_bank(bank, round_script("easy", count, Step::Solve));
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert_eq!(text.matches("CORRECT!").count(), count);
    assert!(text.contains("Words solved: 10"));
    assert!(text.contains("CONGRATULATIONS AVA!"));
    assert!(text.contains("GOLD MEDAL"));
    assert!(text.contains("RANK #1"));

    // Answers arrive well inside the first five seconds: 10 points plus an 11 or 12 point bonus
    let board = test.repository().load().await;
    let score = board.entries()[0].score;
    assert!((210..=220).contains(&score), "score {}", score);
    assert!(text.contains("Your highest score: "));

    test.cleanup().await;
}

#[tokio::test]
async fn test_input_closed_mid_round_persists_nothing() {
    let mut test = TestApp::new(vec![
        line("Ava"),
        line("1"),
        line("1"),
        line(""),
        Step::Timeout,
        line(""),
        line("cake"),
    ]);
    test.app.run().await.unwrap();

    assert!(test.output.text().contains("Word 3/10"));
    assert!(test.repository().load().await.is_empty());
    assert!(!test.leaderboard_path.exists());
}

#[tokio::test]
async fn test_invalid_difficulty_reprompts() {
    let mut test = TestApp::new(vec![line("Ava"), line("1"), line("7"), line("3"), line("")]);
    test.app.run().await.unwrap();

    let text = test.output.text();
    assert!(text.contains("Invalid choice. Please enter 1, 2, or 3."));
    assert!(text.contains("WORD SCRAMBLE CHALLENGE - HARD MODE"));
    assert!(text.contains("Word 1/20"));
}

#[tokio::test]
async fn test_second_round_ranks_below_first() {
    let count = Difficulty::Easy.config().word_count;
    let mut steps = round_script("1", count, line("zzzz"));
    steps.pop();
    steps.extend(round_script("1", count, Step::Timeout).into_iter().skip(1));

    let mut test = TestApp::new(steps);
    test.app.run().await.unwrap();

    let board = test.repository().load().await;
    assert_eq!(board.len(), 2);
    // Equal scores keep insertion order
    assert!(board.entries().iter().all(|entry| entry.score == 0));

    let text = test.output.text();
    assert!(text.contains("RANK #1"));
    assert!(text.contains("RANK #2"));
    assert!(text.contains("Your highest score: "));

    test.cleanup().await;
}
