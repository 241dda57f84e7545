//! Tic-Tac-Toe game implementation and exhaustive minimax search

pub mod board;
pub mod game;
pub mod input;
pub mod lines;
pub mod player;
pub mod search;

pub use board::{BoardState, Cell, Player};
pub use game::{Game, GameOutcome, Move};
pub use input::parse_move;
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use player::MinimaxPlayer;
pub use search::{WIN_SCORE, evaluate_position, find_best_move, scored_moves, terminal_score};
