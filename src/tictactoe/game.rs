//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished board, `None` while play continues
    pub fn of(state: &BoardState) -> Option<GameOutcome> {
        match state.winner() {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if state.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// A game in progress with its move history
///
/// Rejected moves leave the game unchanged, so callers can simply ask for
/// another move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    state: BoardState,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty board
    pub fn new(first_player: Player) -> Self {
        Self::from_state(BoardState::new_with_player(first_player))
    }

    /// Continue from an arbitrary position
    pub fn from_state(state: BoardState) -> Self {
        Game {
            state,
            moves: Vec::new(),
            outcome: GameOutcome::of(&state),
        }
    }

    /// Play a move for the player whose turn it is
    ///
    /// # Errors
    ///
    /// - [`GameOver`](crate::Error::GameOver) once the game has an outcome
    /// - [`InvalidPosition`](crate::Error::InvalidPosition) for an index past 8
    /// - [`InvalidMove`](crate::Error::InvalidMove) for an occupied cell
    pub fn play(&mut self, position: usize) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.state.to_move;
        self.state = self.state.make_move(position)?;
        self.moves.push(Move { position, player });
        self.outcome = GameOutcome::of(&self.state);

        tracing::debug!(%player, position, outcome = ?self.outcome, "move played");
        Ok(())
    }

    pub fn current_state(&self) -> &BoardState {
        &self.state
    }

    pub fn to_move(&self) -> Player {
        self.state.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_moves_and_outcome() {
        let mut game = Game::default();
        for pos in [0, 3, 1, 4, 2] {
            game.play(pos).unwrap();
        }

        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        assert_eq!(game.moves().len(), 5);
        assert_eq!(game.moves()[1], Move { position: 3, player: Player::O });
        assert!(matches!(game.play(5), Err(crate::Error::GameOver)));
    }

    #[test]
    fn rejected_moves_leave_game_unchanged() {
        let mut game = Game::new(Player::O);
        game.play(4).unwrap();
        let before = *game.current_state();

        assert!(matches!(game.play(4), Err(crate::Error::InvalidMove { position: 4 })));
        assert!(matches!(game.play(12), Err(crate::Error::InvalidPosition { .. })));
        assert_eq!(*game.current_state(), before);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn draw_is_detected() {
        let mut game = Game::default();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(pos).unwrap();
        }
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn from_finished_state_is_over() {
        let state = BoardState::from_string("XXXOO....").unwrap();
        assert!(Game::from_state(state).is_over());
    }
}
