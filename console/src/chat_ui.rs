use std::error::Error;
use std::io::Write;

use common::chatbot::{Chatbot, Reply};
use common::games::SessionRng;
use common::{debug_log, log};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::ChatbotConfig;

fn format_reply(name: &str, text: &str) -> String {
    format!("{}: {}", name, text)
}

fn prompt() -> std::io::Result<()> {
    print!("you> ");
    std::io::stdout().flush()
}

/// Answers one line of user input. Returns `None` for blank input.
pub fn handle_line(bot: &mut Chatbot, line: &str) -> Option<Reply> {
    if line.trim().is_empty() {
        return None;
    }
    let reply = bot.respond(line);
    debug_log!("Classified {:?} as {}", line.trim(), reply.category);
    Some(reply)
}

pub async fn run(config: &ChatbotConfig) -> Result<(), Box<dyn Error>> {
    let rng = SessionRng::from_optional_seed(config.seed);
    log!("Chat started (bot: {}, seed: {})", config.name, rng.seed());
    let mut bot = Chatbot::new(config.persona(), rng)?;
    let name = bot.persona().name.clone();

    println!("Type 'help' to see what I understand, 'bye' or 'quit' to leave.");
    println!("{}", format_reply(&name, &bot.welcome()));
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if let Some(reply) = handle_line(&mut bot, &line) {
            println!("{}", format_reply(&name, &reply.text));
            if reply.ends_conversation() {
                log!("Chat ended by user");
                return Ok(());
            }
        }
        prompt()?;
    }

    log!("Chat input closed");
    Ok(())
}
