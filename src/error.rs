// error.rs

use thiserror::Error;

/// Rejected command lines. None of these touch the calculator's history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("{0}: command not found")]
    UnknownCommand(String),
    #[error("{0}: not a number")]
    InvalidNumber(String),
    #[error("{command}: expected two numbers")]
    MissingOperand { command: &'static str },
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("history: {0}: numeric argument required")]
    InvalidCount(String),
    #[error("exit: {0}: numeric argument required")]
    InvalidExitCode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
