use game_types::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    Leaderboard,
    Instructions,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::Leaderboard),
            "3" => Some(MenuChoice::Instructions),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu number or tier name
pub fn parse_difficulty_choice(input: &str) -> Option<Difficulty> {
    match input.trim() {
        "1" => Some(Difficulty::Easy),
        "2" => Some(Difficulty::Medium),
        "3" => Some(Difficulty::Hard),
        other => other.parse().ok(),
    }
}

/// Trimmed name, rejected when blank
pub fn parse_player_name(input: &str) -> Option<String> {
    let name = input.trim();
    (!name.is_empty()).then(|| name.to_string())
}
