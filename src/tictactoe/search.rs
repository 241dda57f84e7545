//! Exhaustive minimax search with depth tie-breaking
//!
//! Scores are from the maximizer's point of view:
//!
//! - maximizer wins: `WIN_SCORE - depth`
//! - minimizer wins: `-WIN_SCORE + depth`
//! - draw: `0`
//!
//! `depth` counts plies from the position being evaluated, so a quicker win
//! always outscores a slower one and a slower loss outscores a quicker one.
//! A 3x3 game lasts at most 9 plies, which keeps every win positive and
//! every loss negative.
//!
//! There is no pruning and no memoization. Hypothetical moves are made on a
//! private working copy through [`Placement`], which undoes the move when it
//! goes out of scope.

use std::ops::{Deref, DerefMut};

use super::board::{BoardState, Cell, Player};

/// Base score of a win before the depth adjustment
pub const WIN_SCORE: i32 = 10;

/// A hypothetical move that is retracted on drop.
struct Placement<'a> {
    board: &'a mut BoardState,
    position: usize,
    mover: Player,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut BoardState, position: usize) -> Self {
        debug_assert_eq!(board.cells[position], Cell::Empty);
        let mover = board.to_move;
        board.cells[position] = mover.to_cell();
        board.to_move = mover.opponent();
        Self {
            board,
            position,
            mover,
        }
    }
}

impl Deref for Placement<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position] = Cell::Empty;
        self.board.to_move = self.mover;
    }
}

/// Score a finished position, or `None` if play continues.
pub fn terminal_score(board: &BoardState, maximizer: Player, depth: i32) -> Option<i32> {
    match board.winner() {
        Some(winner) if winner == maximizer => Some(WIN_SCORE - depth),
        Some(_) => Some(-WIN_SCORE + depth),
        None if board.is_full() => Some(0),
        None => None,
    }
}

fn minimax(board: &mut BoardState, maximizer: Player, depth: i32) -> i32 {
    if let Some(score) = terminal_score(board, maximizer, depth) {
        return score;
    }

    let maximizing = board.to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for position in 0..9 {
        if !board.is_empty(position) {
            continue;
        }
        let score = {
            let mut placed = Placement::new(board, position);
            minimax(&mut placed, maximizer, depth + 1)
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax value of `board` for `maximizer`, with `board.to_move` to play.
///
/// Depth is counted from `board` itself, so a board that is already won by
/// the maximizer scores exactly [`WIN_SCORE`]. The caller's board is not
/// modified.
///
/// ```
/// use tutor::tictactoe::{BoardState, Player, evaluate_position};
///
/// // X to move can complete the top row immediately
/// let board = BoardState::from_string("XX.OO....")?;
/// assert_eq!(evaluate_position(&board, Player::X), 9);
/// assert_eq!(evaluate_position(&BoardState::new(), Player::X), 0);
/// # Ok::<(), tutor::Error>(())
/// ```
pub fn evaluate_position(board: &BoardState, maximizer: Player) -> i32 {
    let mut working = *board;
    minimax(&mut working, maximizer, 0)
}

fn candidate_scores(board: &BoardState, maximizer: Player) -> Vec<(usize, i32)> {
    let mut working = *board;
    working.to_move = maximizer;

    let mut scores = Vec::with_capacity(9);
    for position in 0..9 {
        if !working.is_empty(position) {
            continue;
        }
        let mut placed = Placement::new(&mut working, position);
        scores.push((position, minimax(&mut placed, maximizer, 0)));
    }
    scores
}

/// Score every legal move for `maximizer`, in increasing cell order.
///
/// Each score is the value of the position right after the move, with the
/// opponent to play and depth counted from that position. Empty for a
/// finished board.
pub fn scored_moves(board: &BoardState, maximizer: Player) -> Vec<(usize, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }
    candidate_scores(board, maximizer)
}

/// Best cell for `maximizer` to play, or `None` when the board is full or
/// already decided.
///
/// Cells are tried in increasing index order and the best is replaced only
/// on a strictly higher score, so among equally good moves the lowest index
/// wins.
///
/// ```
/// use tutor::tictactoe::{BoardState, Player, find_best_move};
///
/// let board = BoardState::from_string("XX.OO....")?;
/// assert_eq!(find_best_move(&board, Player::X), Some(2));
///
/// let won = BoardState::from_string("XXXOO....")?;
/// assert_eq!(find_best_move(&won, Player::O), None);
/// # Ok::<(), tutor::Error>(())
/// ```
pub fn find_best_move(board: &BoardState, maximizer: Player) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (position, score) in scored_moves(board, maximizer) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((position, score)),
        }
    }

    if let Some((position, score)) = best {
        tracing::debug!(board = %board.encode(), position, score, "best move");
    }
    best.map(|(position, _)| position)
}
