//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
                context: s.to_string(),
            }),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// This type implements `Copy` since it's only 10 bytes, so searches can
/// explore hypothetical moves on their own copy and leave the caller's board
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (whitespace, `|` and `,`
    /// are filtered out) and may end with a `_X` or `_O` suffix naming the
    /// player to move. Without a suffix the player is inferred from the piece
    /// counts, with X moving first.
    ///
    /// ```
    /// use tutor::tictactoe::{BoardState, Cell, Player};
    ///
    /// let board = BoardState::from_string("XX. OO. ...")?;
    /// assert_eq!(board.get(0), Cell::X);
    /// assert_eq!(board.to_move, Player::X);
    ///
    /// let board = BoardState::from_string("........._O")?;
    /// assert_eq!(board.to_move, Player::O);
    /// # Ok::<(), tutor::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not have exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than one
    /// - The suffix is not `X` or `O`
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
            .collect();
        // '_' doubles as an empty cell, so only a suffix after exactly nine
        // cells names the player to move
        let (board_part, specified_turn) = match cleaned.rsplit_once('_') {
            Some((board, suffix)) if board.chars().count() == 9 && !suffix.is_empty() => {
                (board, Some(suffix.parse::<Player>()?))
            }
            _ => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        let to_move = specified_turn.unwrap_or(if x_count > o_count {
            Player::O
        } else {
            Player::X
        });

        Ok(BoardState { cells, to_move })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in increasing order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return a new board state
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`](crate::Error::InvalidPosition) for an index
    /// past 8 and [`InvalidMove`](crate::Error::InvalidMove) for an occupied
    /// cell.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Get a compact string representation, e.g. `XO......._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
