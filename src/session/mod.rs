//! Line-oriented driver for playing a game from a terminal.
//!
//! Each input line is one [`Command`]. The board is printed after every
//! change so the session can be followed without a graphical front end.

mod command;

pub use command::{parse_command, Command};

use std::io::{self, BufRead, Write};

use rand::prelude::*;

use crate::board::{GameState, RulesConfig};

/// Deepest `perft` the driver will run.
pub const MAX_PERFT_DEPTH: usize = 6;
/// Most moves a single `random` command will play.
pub const MAX_RANDOM_MOVES: usize = 1000;

/// `value` capped at `max`, with a notice written when it was lowered.
fn clamp_count<W: Write>(value: usize, max: usize, what: &str, out: &mut W) -> io::Result<usize> {
    if value > max {
        writeln!(out, "{what} {value} is above the limit, using {max}")?;
        return Ok(max);
    }
    Ok(value)
}

/// An interactive game plus the random source used by `random`.
pub struct Session<R: Rng> {
    state: GameState,
    config: RulesConfig,
    rng: R,
}

impl Session<StdRng> {
    /// Session with an entropy-seeded random source.
    pub fn new(config: RulesConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: RulesConfig, rng: R) -> Self {
        Session {
            state: GameState::with_config(config),
            config,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Execute one command, writing its output to `out`.
    ///
    /// Returns `Ok(false)` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<bool> {
        match cmd {
            Command::Play(notation) => match self.state.play_notation(&notation) {
                Ok(mv) => {
                    writeln!(out, "played {mv}")?;
                    self.print_board(out)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Undo => match self.state.undo() {
                Some(mv) => {
                    writeln!(out, "undid {mv}")?;
                    self.print_board(out)?;
                }
                None => writeln!(out, "nothing to undo")?,
            },
            Command::Moves => {
                let moves = self.state.valid_moves();
                let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
                writeln!(out, "{} moves: {}", moves.len(), list.join(" "))?;
            }
            Command::Board => self.print_board(out)?,
            Command::Fen => writeln!(out, "{}", self.state.to_fen())?,
            Command::Random(count) => {
                let count = clamp_count(count, MAX_RANDOM_MOVES, "random count", out)?;
                let played = self.play_random(count);
                writeln!(out, "played {played} random moves")?;
                self.print_board(out)?;
            }
            Command::Perft(depth) => {
                let depth = clamp_count(depth, MAX_PERFT_DEPTH, "perft depth", out)?;
                let nodes = self.state.perft(depth);
                writeln!(out, "perft {depth}: {nodes}")?;
            }
            Command::New => {
                self.state = GameState::with_config(self.config);
                self.print_board(out)?;
            }
            Command::Help => {
                writeln!(
                    out,
                    "commands: <from><to> (e.g. e2e4), undo, moves, board, fen, random [n], perft [n], new, quit"
                )?;
            }
            Command::Quit => return Ok(false),
            Command::Unknown(line) => writeln!(out, "unknown command: {line}")?,
        }
        Ok(true)
    }

    /// Play up to `count` uniformly chosen moves, stopping early if the side
    /// to move has none. Returns how many were played.
    pub fn play_random(&mut self, count: usize) -> usize {
        let mut played = 0;
        for _ in 0..count {
            let moves = self.state.valid_moves();
            let Some(&mv) = moves.as_slice().choose(&mut self.rng) else {
                break;
            };
            self.state.apply(mv);
            played += 1;
        }
        played
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.state.board().codes() {
            writeln!(out, "{}", row.join(" "))?;
        }
        writeln!(out, "{} to move", self.state.side_to_move())
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<B: BufRead, W: Write>(&mut self, input: B, out: &mut W) -> io::Result<()> {
        self.print_board(out)?;
        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_command(&line) else {
                continue;
            };
            if !self.execute(cmd, out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<StdRng> {
        Session::with_rng(RulesConfig::default(), StdRng::seed_from_u64(7))
    }

    fn run(input: &str) -> (Session<StdRng>, String) {
        let mut s = session();
        let mut out = Vec::new();
        s.run(input.as_bytes(), &mut out).unwrap();
        (s, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_play_and_undo() {
        let (s, out) = run("e2e4\nundo\nundo\n");
        assert!(out.contains("played e2e4"));
        assert!(out.contains("undid e2e4"));
        assert!(out.contains("nothing to undo"));
        assert_eq!(s.state().history_len(), 0);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let (s, out) = run("e2e5\n");
        assert!(out.contains("error:"));
        assert_eq!(s.state().history_len(), 0);
    }

    #[test]
    fn test_board_prints_codes() {
        let (_, out) = run("board\n");
        assert!(out.contains("bR bN bB bQ bK bB bN bR"));
        assert!(out.contains("wp wp wp wp wp wp wp wp"));
        assert!(out.contains("-- -- -- -- -- -- -- --"));
        assert!(out.contains("White to move"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (s, _) = run("quit\ne2e4\n");
        assert_eq!(s.state().history_len(), 0);
    }

    #[test]
    fn test_random_moves_are_recorded() {
        let mut s = session();
        let played = s.play_random(10);
        assert_eq!(played, 10);
        assert_eq!(s.state().history_len(), 10);
        assert!(s.state().white_to_move());
    }

    #[test]
    fn test_moves_and_perft_output() {
        let (_, out) = run("moves\nperft 2\n");
        assert!(out.contains("20 moves: a2a3 a2a4"));
        assert!(out.contains("perft 2: 400"));
    }

    #[test]
    fn test_new_resets_game() {
        let (s, _) = run("e2e4\ne7e5\nnew\n");
        assert_eq!(s.state().history_len(), 0);
        assert_eq!(s.state().to_fen(), GameState::new().to_fen());
    }

    #[test]
    fn test_large_counts_are_clamped() {
        let mut s = session();
        let mut out = Vec::new();
        s.execute(Command::Random(5_000), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("random count 5000 is above the limit, using 1000"));
        assert!(s.state().history_len() <= MAX_RANDOM_MOVES);

        let mut out = Vec::new();
        let mut out_ok = Vec::new();
        assert_eq!(clamp_count(12, MAX_PERFT_DEPTH, "perft depth", &mut out).unwrap(), 6);
        assert!(String::from_utf8(out).unwrap().contains("perft depth 12"));
        assert_eq!(clamp_count(3, MAX_PERFT_DEPTH, "perft depth", &mut out_ok).unwrap(), 3);
        assert!(out_ok.is_empty());
    }
}
