use super::error::MoveError;
use super::{GameState, Move, Occupant};

impl GameState {
    /// Play `mv` without checking it against the move set.
    ///
    /// The start square is emptied, the end square receives the recorded
    /// mover, the move is pushed onto the history and the turn passes.
    /// Callers are expected to pass a move taken from
    /// [`GameState::valid_moves`]; use [`GameState::try_apply`] otherwise.
    pub fn apply(&mut self, mv: Move) {
        self.board.set(mv.start(), Occupant::Empty);
        self.board.set(mv.end(), mv.piece_moved());
        self.history.push(mv);
        self.white_to_move = !self.white_to_move;

        #[cfg(feature = "logging")]
        log::debug!("applied {:?}, {} to move", mv, self.side_to_move());
    }

    /// Take back the most recent move.
    ///
    /// Returns the move that was undone, or `None` (leaving the state
    /// untouched) when the history is empty.
    pub fn undo(&mut self) -> Option<Move> {
        let Some(mv) = self.history.pop() else {
            #[cfg(feature = "logging")]
            log::trace!("undo requested with empty history");
            return None;
        };

        self.board.set(mv.start(), mv.piece_moved());
        self.board.set(mv.end(), mv.piece_captured());
        self.white_to_move = !self.white_to_move;

        #[cfg(feature = "logging")]
        log::debug!("undid {:?}, {} to move", mv, self.side_to_move());
        Some(mv)
    }

    /// Play `mv` only if a move with the same endpoints is in
    /// [`GameState::valid_moves`].
    ///
    /// The enumerated instance is the one applied, so the recorded mover and
    /// capture always reflect the current board.
    pub fn try_apply(&mut self, mv: &Move) -> Result<Move, MoveError> {
        let Some(found) = self.valid_moves().find(mv) else {
            #[cfg(feature = "logging")]
            log::debug!("rejected {mv}: not in move set");
            return Err(MoveError::NotInMoveSet {
                notation: mv.to_string(),
            });
        };
        self.apply(found);
        Ok(found)
    }

    /// Parse coordinate notation (`e2e4`) and play it through
    /// [`GameState::try_apply`].
    pub fn play_notation(&mut self, notation: &str) -> Result<Move, MoveError> {
        let mv = Move::parse(notation, &self.board)?;
        self.try_apply(&mv)
    }
}
