use std::path::PathBuf;

use crate::game::Player;

/// Errors that stop a game before it reaches an outcome.
///
/// None of these are game-rule failures; the board is left as it was before
/// the failed request.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended while waiting for a move")]
    EndOfInput,

    #[error("{0} quit the game")]
    Quit(String),

    #[error("scripted moves for {} ran out", .0.name())]
    ScriptExhausted(Player),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
