use std::path::Path;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::chatbot::Persona;
use common::games::tictactoe::FirstPlayer;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "console_config.yaml";
const MAX_AI_DELAY_MS: u64 = 5_000;

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Log line for startup. A missing file is not an error; the defaults apply.
pub fn config_source_message(path: &Path) -> String {
    if path.is_file() {
        format!("Loaded config from {}", path.display())
    } else {
        format!("No config file at {}, using defaults", path.display())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    pub chatbot: ChatbotConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.chatbot.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Pause before the AI answers, purely cosmetic.
    pub ai_delay_ms: u64,
    pub first_player: FirstPlayer,
    pub seed: Option<u64>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: 500,
            first_player: FirstPlayer::Human,
            seed: None,
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {}",
                MAX_AI_DELAY_MS
            ));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ChatbotConfig {
    pub name: String,
    pub creator: String,
    pub organization: String,
    pub seed: Option<u64>,
}

impl ChatbotConfig {
    pub fn persona(&self) -> Persona {
        Persona {
            name: self.name.clone(),
            creator: self.creator.clone(),
            organization: self.organization.clone(),
        }
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        let persona = Persona::default();
        Self {
            name: persona.name,
            creator: persona.creator,
            organization: persona.organization,
            seed: None,
        }
    }
}

impl Validate for ChatbotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("chatbot name must not be empty".to_string());
        }
        if self.creator.trim().is_empty() {
            return Err("chatbot creator must not be empty".to_string());
        }
        if self.organization.trim().is_empty() {
            return Err("chatbot organization must not be empty".to_string());
        }
        Ok(())
    }
}
