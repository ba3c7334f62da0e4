use std::error::Error;
use std::fmt;

pub type Result<T> = std::result::Result<T, LexError>;

/// The only failure that aborts a whole submission: a byte no token
/// pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: usize,
    pub found: char,
}

impl LexError {
    pub fn new(position: usize, found: char) -> LexError {
        LexError { position, found }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected character '{}' at offset {}",
            self.found.escape_default(),
            self.position
        )
    }
}

impl Error for LexError {}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    UnknownFlag(String),
    TooManyArguments(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "unknown flag: `{}`", flag),
            ConfigError::TooManyArguments(got) => write!(
                f,
                "wrong number of arguments: expected at most `1`, got `{}`",
                got
            ),
        }
    }
}

impl Error for ConfigError {}
