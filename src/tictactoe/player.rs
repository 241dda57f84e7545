//! Minimax-backed move selector

use super::{board::BoardState, search::find_best_move};
use crate::{Result, ports::MoveSelector};

/// Plays the exhaustive minimax choice for whichever side is to move.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    pub fn new() -> Self {
        Self::with_name("Minimax")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for MinimaxPlayer {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        find_best_move(state, state.to_move).ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Game, GameOutcome, Player};

    #[test]
    fn finished_board_is_an_error() {
        let state = BoardState::from_string("XXXOO....").unwrap();
        let err = MinimaxPlayer::new().select_move(&state).unwrap_err();
        assert!(matches!(err, crate::Error::NoValidMoves));
    }

    #[test]
    fn never_loses_after_a_weak_opening() {
        // O opens on an edge; minimax plays both sides from there
        let mut game = Game::new(Player::O);
        game.play(1).unwrap();
        let mut ai = MinimaxPlayer::new();
        while !game.is_over() {
            let mv = ai.select_move(game.current_state()).unwrap();
            game.play(mv).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }
}
