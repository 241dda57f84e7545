//! Output formatting and progress spinners for CLI

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{rules::Fact, tictactoe::BoardState};

/// Create a spinner shown while the search thinks
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Print a section header
pub fn print_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))
}

/// Print a key-value pair
pub fn print_kv<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:20} {}", format!("{key}:"), value)
}

/// Join facts for display, or `None` when there are none
pub fn format_facts<'a>(facts: impl IntoIterator<Item = &'a Fact>) -> String {
    let joined: Vec<&str> = facts.into_iter().map(Fact::as_str).collect();
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined.join(", ")
    }
}

/// Render the board with row and column labels for `row,col` input
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::from("    0   1   2\n");
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| match board.get(row * 3 + col).to_player() {
                Some(player) => player.to_string(),
                None => " ".to_string(),
            })
            .collect();
        out.push_str(&format!("{row}   {}\n", cells.join(" | ")));
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}
