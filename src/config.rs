//! TOML configuration.
//!
//! ```toml
//! [assistant]
//! name = "Roko"
//! wake_words = ["hey roko", "roko"]
//!
//! [library]
//! path = "./data/library.json"
//!
//! [quiz]
//! default_questions = 5
//!
//! [server]
//! bind = "127.0.0.1:7341"
//!
//! [logging]
//! filter = "info"
//! ```
//!
//! Only `[library]` and `[server]` are required.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::quiz::{MAX_QUESTIONS, MIN_QUESTIONS};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    pub library: LibraryConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_wake_words")]
    pub wake_words: Vec<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            wake_words: default_wake_words(),
        }
    }
}

fn default_name() -> String {
    "Roko".to_string()
}
fn default_wake_words() -> Vec<String> {
    vec!["hey roko".to_string(), "roko".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct LibraryConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuizConfig {
    #[serde(default = "default_questions")]
    pub default_questions: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_questions: default_questions(),
        }
    }
}

fn default_questions() -> usize {
    MIN_QUESTIONS
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Defaults for commands that run without a config file.
    pub fn minimal() -> Self {
        Self {
            assistant: AssistantConfig::default(),
            library: LibraryConfig {
                path: PathBuf::from("./data/library.json"),
            },
            quiz: QuizConfig::default(),
            server: ServerConfig {
                bind: "127.0.0.1:7341".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.assistant.wake_words.is_empty() {
        anyhow::bail!("assistant.wake_words must not be empty");
    }
    if config
        .assistant
        .wake_words
        .iter()
        .any(|w| w.trim().is_empty())
    {
        anyhow::bail!("assistant.wake_words must not contain blank entries");
    }

    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&config.quiz.default_questions) {
        anyhow::bail!(
            "quiz.default_questions must be in [{}, {}]",
            MIN_QUESTIONS,
            MAX_QUESTIONS
        );
    }

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}
