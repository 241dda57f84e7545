//! Best-move command - Ask the search about a single position

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_kv, print_section, render_board},
    tictactoe::{BoardState, Player, evaluate_position, find_best_move, scored_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Print the minimax move for a board position")]
pub struct BestMoveArgs {
    /// Nine cells row by row using X, O and '.', optionally suffixed with
    /// `_X` or `_O` for the side to move
    pub board: String,

    /// Side to find a move for (defaults to the side to move)
    #[arg(long)]
    pub player: Option<Player>,

    /// Also print the score of every candidate move
    #[arg(long)]
    pub explain: bool,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    run(&args, &mut io::stdout().lock())
}

pub fn run<W: Write>(args: &BestMoveArgs, out: &mut W) -> Result<()> {
    let board = BoardState::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let player = args.player.unwrap_or(board.to_move);

    writeln!(out, "{}", render_board(&board))?;
    match find_best_move(&board, player) {
        Some(position) => writeln!(
            out,
            "Best move for {player}: {},{} (cell {position})",
            position / 3,
            position % 3
        )?,
        None => writeln!(out, "No move: the board is full or already decided")?,
    }

    if args.explain {
        print_section(out, "Candidates")?;
        for (position, score) in scored_moves(&board, player) {
            print_kv(out, &format!("{},{}", position / 3, position % 3), &score.to_string())?;
        }
        let mut as_player = board;
        as_player.to_move = player;
        print_kv(
            out,
            "Position value",
            &evaluate_position(&as_player, player).to_string(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(board: &str, player: Option<Player>, explain: bool) -> Result<String> {
        let args = BestMoveArgs {
            board: board.to_string(),
            player,
            explain,
        };
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn finds_the_winning_cell() {
        let output = ask("XX.OO....", None, false).unwrap();
        assert!(output.contains("Best move for X: 0,2 (cell 2)"));
    }

    #[test]
    fn explicit_player_blocks() {
        let output = ask("XX.O.....", Some(Player::O), false).unwrap();
        assert!(output.contains("Best move for O: 0,2"));
    }

    #[test]
    fn decided_board_has_no_move() {
        let output = ask("XXXOO....", None, true).unwrap();
        assert!(output.contains("No move"));
        assert!(output.contains("Position value"));
    }

    #[test]
    fn explain_lists_each_candidate() {
        let output = ask("XOXOXO...", None, true).unwrap();
        assert!(output.contains("2,0:"));
        assert!(output.contains("2,1:"));
        assert!(output.contains("2,2:"));
    }

    #[test]
    fn bad_board_is_an_error() {
        assert!(ask("XXX", None, false).is_err());
        assert!(ask("XOX......XXXXXX", None, false).is_err());
    }
}
