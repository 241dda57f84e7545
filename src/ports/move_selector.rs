//! Move selector port - who decides the next move
//!
//! A game loop only needs a move for the current position. Whether that move
//! comes from a person at the terminal or from the minimax search is decided
//! by which adapter the caller plugs in.

use crate::{Result, tictactoe::BoardState};

/// Source of moves for one side of a game.
///
/// # Examples
///
/// ```
/// use tutor::{
///     ports::MoveSelector,
///     tictactoe::{BoardState, MinimaxPlayer},
/// };
///
/// let mut ai = MinimaxPlayer::new();
/// let board = BoardState::from_string("XX.OO....")?;
/// assert_eq!(ai.select_move(&board)?, 2);
/// # Ok::<(), tutor::Error>(())
/// ```
pub trait MoveSelector {
    /// Select a move for the player to move in `state`.
    ///
    /// Returning a move does not guarantee it is legal; the game validates
    /// it and the caller asks again after a rejection.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. on a finished board.
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Name used in prompts and logs.
    fn name(&self) -> &str;
}
