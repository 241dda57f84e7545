//! Play command - Interactive Tic-Tac-Toe on the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{AppConfig, PlayMode},
        output::{create_spinner, render_board},
        prompt::Prompt,
    },
    ports::MoveSelector,
    tictactoe::{Game, GameOutcome, MinimaxPlayer, Player, parse_move},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play Tic-Tac-Toe against a friend or the minimax search")]
pub struct PlayArgs {
    /// Two humans, or one human against the search
    #[arg(long, value_enum)]
    pub mode: Option<PlayMode>,

    /// Mark played by the search in AI mode (X or O)
    #[arg(long)]
    pub ai: Option<Player>,

    /// Mark that moves first (X or O)
    #[arg(long)]
    pub first: Option<Player>,
}

/// Resolved game settings after flags override the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySettings {
    pub mode: PlayMode,
    pub ai_player: Player,
    pub first_player: Player,
}

impl PlaySettings {
    pub fn resolve(args: &PlayArgs, config: &AppConfig) -> Self {
        Self {
            mode: args.mode.unwrap_or(config.mode),
            ai_player: args.ai.unwrap_or(config.ai_player),
            first_player: args.first.unwrap_or(config.first_player),
        }
    }
}

enum Seat {
    Human,
    Machine(Box<dyn MoveSelector>),
}

struct Seats {
    x: Seat,
    o: Seat,
}

impl Seats {
    fn new(settings: &PlaySettings) -> Self {
        let machine = || Seat::Machine(Box::new(MinimaxPlayer::new()));
        match settings.mode {
            PlayMode::Human => Seats {
                x: Seat::Human,
                o: Seat::Human,
            },
            PlayMode::Ai if settings.ai_player == Player::X => Seats {
                x: machine(),
                o: Seat::Human,
            },
            PlayMode::Ai => Seats {
                x: Seat::Human,
                o: machine(),
            },
        }
    }

    fn for_player(&mut self, player: Player) -> &mut Seat {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }
}

pub fn execute(args: PlayArgs, config: &AppConfig) -> Result<()> {
    let settings = PlaySettings::resolve(&args, config);
    tracing::info!(?settings, "starting game");

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout().lock());
    run(settings, &mut prompt)?;
    Ok(())
}

/// Play one game to the end.
///
/// Returns the outcome, or `None` if the user quit first.
pub fn run<R: BufRead, W: Write>(
    settings: PlaySettings,
    prompt: &mut Prompt<R, W>,
) -> Result<Option<GameOutcome>> {
    let mut seats = Seats::new(&settings);
    let mut game = Game::new(settings.first_player);

    writeln!(prompt.output(), "Welcome to Tic-Tac-Toe!")?;
    if settings.mode == PlayMode::Ai {
        writeln!(
            prompt.output(),
            "You are {}, the computer is {}.",
            settings.ai_player.opponent(),
            settings.ai_player
        )?;
    }
    writeln!(
        prompt.output(),
        "Enter moves as row,col (0-2), or 'quit' to exit."
    )?;

    while !game.is_over() {
        writeln!(prompt.output(), "\n{}", render_board(game.current_state()))?;
        let player = game.to_move();

        match seats.for_player(player) {
            Seat::Machine(selector) => {
                let spinner = create_spinner(&format!("{} is thinking...", selector.name()));
                let position = selector.select_move(game.current_state());
                spinner.finish_and_clear();

                let position = position?;
                game.play(position)?;
                writeln!(
                    prompt.output(),
                    "Computer ({player}) plays {},{}",
                    position / 3,
                    position % 3
                )?;
            }
            Seat::Human => {
                let question = format!("Player {player}'s turn. Enter move (row,col): ");
                let Some(line) = prompt.ask(&question)? else {
                    writeln!(prompt.output(), "\nGoodbye.")?;
                    return Ok(None);
                };
                if let Err(e) = parse_move(&line).and_then(|position| game.play(position)) {
                    writeln!(prompt.output(), "Invalid move: {e}. Try again.")?;
                }
            }
        }
    }

    writeln!(prompt.output(), "\n{}", render_board(game.current_state()))?;
    let outcome = game.outcome();
    match outcome {
        Some(GameOutcome::Win(winner)) => writeln!(prompt.output(), "Player {winner} wins!")?,
        Some(GameOutcome::Draw) => writeln!(prompt.output(), "It's a draw!")?,
        None => {}
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn play(settings: PlaySettings, input: &str) -> (Option<GameOutcome>, String) {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(input.to_string()), &mut out);
        let outcome = run(settings, &mut prompt).unwrap();
        drop(prompt);
        (outcome, String::from_utf8(out).unwrap())
    }

    fn human_game() -> PlaySettings {
        PlaySettings {
            mode: PlayMode::Human,
            ai_player: Player::X,
            first_player: Player::X,
        }
    }

    #[test]
    fn two_humans_play_to_a_win() {
        let (outcome, output) = play(human_game(), "0,0\n1,0\n0,1\n1,1\n0,2\n");
        assert_eq!(outcome, Some(GameOutcome::Win(Player::X)));
        assert!(output.contains("Player X wins!"));
    }

    #[test]
    fn invalid_moves_are_reprompted() {
        let input = "0,0\n0,0\n3,3\nabc\n1,0\n0,1\n1,1\n0,2\n";
        let (outcome, output) = play(human_game(), input);
        assert_eq!(outcome, Some(GameOutcome::Win(Player::X)));
        assert_eq!(output.matches("Invalid move").count(), 3);
    }

    #[test]
    fn quitting_mid_game_is_clean() {
        let (outcome, output) = play(human_game(), "1,1\nquit\n");
        assert_eq!(outcome, None);
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn end_of_input_is_clean() {
        let (outcome, _) = play(human_game(), "");
        assert_eq!(outcome, None);
    }

    #[test]
    fn computer_blocks_and_wins() {
        // O takes the center, blocks the top row, then completes the diagonal
        let settings = PlaySettings {
            mode: PlayMode::Ai,
            ai_player: Player::O,
            first_player: Player::X,
        };
        let (outcome, output) = play(settings, "0,0\n0,1\n2,2\n");

        assert!(output.contains("Computer (O) plays 1,1"));
        assert!(output.contains("Computer (O) plays 0,2"));
        assert!(output.contains("Computer (O) plays 2,0"));
        assert_eq!(outcome, Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn computer_opens_in_the_first_corner() {
        let settings = PlaySettings {
            mode: PlayMode::Ai,
            ai_player: Player::X,
            first_player: Player::X,
        };
        let (_, output) = play(settings, "quit\n");
        assert!(output.contains("Computer (X) plays 0,0"));
    }

    #[test]
    fn flags_override_config() {
        let args = PlayArgs {
            mode: Some(PlayMode::Human),
            first: Some(Player::O),
            ..Default::default()
        };
        let settings = PlaySettings::resolve(&args, &AppConfig::default());
        assert_eq!(settings.mode, PlayMode::Human);
        assert_eq!(settings.first_player, Player::O);
        assert_eq!(settings.ai_player, Player::X);
    }
}
