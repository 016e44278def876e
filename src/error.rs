use std::path::PathBuf;

/// Errors that can occur when assembling a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("at least one player is required")]
    NoPlayers,

    #[error("player {index} has an empty name")]
    EmptyName { index: usize },

    #[error("players '{first}' and '{second}' would share the token '{token}'")]
    DuplicateToken {
        token: char,
        first: String,
        second: String,
    },
}

/// Errors that can end a console session early.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not start the game: {0}")]
    Game(#[from] GameError),
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

    #[error("invalid roster: {0}")]
    Roster(#[from] GameError),
}
