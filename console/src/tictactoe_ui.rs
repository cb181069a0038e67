use std::error::Error;
use std::io::Write;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{
    AI_MARK, Move, Outcome, PLAYER_MARK, Side, TicTacToeGameState, BOARD_SIZE,
};
use common::{debug_log, log};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::TicTacToeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Move),
    NewGame,
    Help,
    Quit,
}

/// Accepts `row col` (0-2 each), a cell number 1-9, or a keyword.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "new" | "n" | "restart" => return Ok(Command::NewGame),
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [number] => {
            let number: usize = number
                .parse()
                .map_err(|_| format!("Unknown command '{}'", input))?;
            Move::from_cell_number(number)
                .map(Command::Place)
                .ok_or_else(|| "Cell number must be between 1 and 9".to_string())
        }
        [row, col] => {
            let row: usize = row
                .parse()
                .map_err(|_| format!("Invalid row '{}'", row))?;
            let col: usize = col
                .parse()
                .map_err(|_| format!("Invalid column '{}'", col))?;
            let mv = Move::new(row, col);
            if !mv.is_in_bounds() {
                return Err(format!(
                    "Row and column must be between 0 and {}",
                    BOARD_SIZE - 1
                ));
            }
            Ok(Command::Place(mv))
        }
        _ => Err(format!("Unknown command '{}'", input)),
    }
}

pub fn status_message(game: &TicTacToeGameState) -> String {
    match game.outcome() {
        Outcome::Draw => "Game over! It's a draw.".to_string(),
        Outcome::PlayerWin => "Game over! Congratulations, you win!".to_string(),
        Outcome::AiWin => "Game over! The AI wins. Better luck next time.".to_string(),
        Outcome::InProgress => match game.current_turn() {
            Side::Player => "Your turn.".to_string(),
            Side::Ai => "AI is thinking...".to_string(),
        },
    }
}

fn print_help() {
    println!(
        "You are '{}', the AI plays '{}'. Enter a cell as 'row col' (0-2) or a number 1-9.",
        PLAYER_MARK, AI_MARK
    );
    println!("Commands: 'new' starts a new game, 'help' shows this text, 'quit' leaves.");
}

fn render(game: &TicTacToeGameState) {
    println!();
    print!("{}", game.board());
    if let Some(line) = game.winning_line() {
        println!("Line of '{}' from {} to {}.", line.mark, line.start, line.end);
    }
    println!("{}", status_message(game));
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

async fn play_ai_turn(
    game: &mut TicTacToeGameState,
    delay: Duration,
) -> Result<(), Box<dyn Error>> {
    if game.is_over() || game.current_turn() != Side::Ai {
        return Ok(());
    }

    println!("{}", status_message(game));
    tokio::time::sleep(delay).await;

    match game.place_ai_mark()? {
        Some(mv) => debug_log!("AI placed {} at {}", AI_MARK, mv),
        None => log!("AI had no move on a full board"),
    }
    Ok(())
}

pub async fn run(config: &TicTacToeConfig) -> Result<(), Box<dyn Error>> {
    let mut rng = SessionRng::from_optional_seed(config.seed);
    let delay = Duration::from_millis(config.ai_delay_ms);
    let mut game = TicTacToeGameState::new(config.first_player, &mut rng);
    log!(
        "Tic-Tac-Toe started (first player: {:?}, seed: {})",
        config.first_player,
        rng.seed()
    );

    print_help();
    play_ai_turn(&mut game, delay).await?;
    render(&game);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => print_help(),
            Ok(Command::NewGame) => {
                game.reset(&mut rng);
                log!("New game");
                play_ai_turn(&mut game, delay).await?;
                render(&game);
            }
            Ok(Command::Place(mv)) => match game.place_player_mark(mv) {
                Ok(outcome) => {
                    debug_log!("Player placed {} at {} -> {:?}", PLAYER_MARK, mv, outcome);
                    play_ai_turn(&mut game, delay).await?;
                    render(&game);
                    if game.is_over() {
                        log!("Game finished: {:?}", game.outcome());
                        println!("Type 'new' to play again or 'quit' to leave.");
                    }
                }
                Err(err) => println!("{}", capitalize(&err.to_string())),
            },
            Err(message) => println!("{}", message),
        }
        prompt()?;
    }

    Ok(())
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::FirstPlayer;

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_command("1 2"), Ok(Command::Place(Move::new(1, 2))));
        assert_eq!(parse_command(" 0,0 "), Ok(Command::Place(Move::new(0, 0))));
        assert!(parse_command("3 0").is_err());
        assert!(parse_command("a b").is_err());
    }

    #[test]
    fn test_parse_cell_number() {
        assert_eq!(parse_command("5"), Ok(Command::Place(Move::new(1, 1))));
        assert_eq!(parse_command("9"), Ok(Command::Place(Move::new(2, 2))));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("NEW"), Ok(Command::NewGame));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert!(parse_command("dance").is_err());
        assert!(parse_command("1 2 3").is_err());
    }

    #[test]
    fn test_status_messages() {
        let mut rng = SessionRng::new(0);
        let mut game = TicTacToeGameState::new(FirstPlayer::Human, &mut rng);
        assert_eq!(status_message(&game), "Your turn.");

        game.place_player_mark(Move::new(0, 0)).unwrap();
        assert_eq!(status_message(&game), "AI is thinking...");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cell (0, 0) is already marked"), "Cell (0, 0) is already marked");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn test_ai_turn_without_delay() {
        let mut rng = SessionRng::new(0);
        let mut game = TicTacToeGameState::new(FirstPlayer::Human, &mut rng);
        game.place_player_mark(Move::new(1, 1)).unwrap();

        play_ai_turn(&mut game, Duration::ZERO).await.unwrap();
        assert_eq!(game.last_move(), Some(Move::new(0, 0)));
        assert_eq!(game.current_turn(), Side::Player);

        // Nothing happens when it is not the AI's turn.
        play_ai_turn(&mut game, Duration::ZERO).await.unwrap();
        assert_eq!(game.last_move(), Some(Move::new(0, 0)));
    }
}
