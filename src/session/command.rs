/// A line of driver input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Coordinate notation such as `e2e4`.
    Play(String),
    Undo,
    Moves,
    Board,
    Fen,
    /// Play this many random moves.
    Random(usize),
    Perft(usize),
    New,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let count = |default: usize| {
        parts
            .get(1)
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(default)
    };

    let cmd = match first {
        "undo" | "u" => Command::Undo,
        "moves" | "m" => Command::Moves,
        "board" | "b" => Command::Board,
        "fen" => Command::Fen,
        "random" | "r" => Command::Random(count(1)),
        "perft" => Command::Perft(count(1)),
        "new" => Command::New,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        mv if mv.len() == 4 && mv.is_ascii() => Command::Play(mv.to_ascii_lowercase()),
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
