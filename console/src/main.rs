mod chat_ui;
mod config;
mod tictactoe_ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use common::{log, logger};

#[derive(Parser)]
#[command(name = "mini_games_console", about = "Tic-Tac-Toe against a minimax AI, and a rule-based chatbot")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Also log every move and chat classification.
    #[arg(long)]
    verbose: bool,

    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Clone, Copy)]
enum Mode {
    /// Play Tic-Tac-Toe as X against the AI.
    Tictactoe,
    /// Talk to the chatbot.
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = config::get_config_manager(&args.config).get_config()?;
    log!("{}", config::config_source_message(&args.config));

    match args.mode {
        Mode::Tictactoe => tictactoe_ui::run(&config.tictactoe).await?,
        Mode::Chat => chat_ui::run(&config.chatbot).await?,
    }

    log!("Bye");
    Ok(())
}
