//! Quiz error types.
//!
//! Configuration problems are fatal and must surface before the first
//! question is shown. Answer validation errors never leave the answer loop.

use thiserror::Error;

/// Problems with question content, detected when a bank is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A bank with zero questions cannot be scored.
    #[error("question bank is empty")]
    EmptyBank,

    /// A question needs at least two options to be a choice.
    #[error("question {index} has {count} option(s), at least 2 required")]
    TooFewOptions { index: usize, count: usize },

    /// An option key was blank after trimming.
    #[error("question {index} has an empty option key")]
    EmptyOptionKey { index: usize },

    /// Two option keys collide once normalized to lowercase.
    #[error("question {index} has duplicate option key '{key}'")]
    DuplicateOptionKey { index: usize, key: String },

    /// The correct key is not one of the question's own options.
    #[error("question {index}: correct key '{key}' is not among options [{available}]")]
    UnknownCorrectKey {
        index: usize,
        key: String,
        available: String,
    },

    /// No built-in bank exists for the requested locale.
    #[error("no built-in question bank for locale '{0}'")]
    UnknownLocale(String),

    /// The retry token is blank, so an empty reply would count as "yes".
    #[error("message 'retry_token' must not be blank")]
    BlankRetryToken,

    /// A message template references a placeholder that is never supplied.
    #[error("message '{message}' uses unknown placeholder '{{{placeholder}}}'")]
    InvalidTemplate {
        message: String,
        placeholder: String,
    },
}

/// Errors raised by the quiz engine.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Fatal configuration problem.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The operator typed something that is not an option key.
    #[error("invalid answer '{input}', expected one of: {expected}")]
    InvalidAnswer { input: String, expected: String },

    /// A score larger than the question count was passed to `summarize`.
    #[error("score {score} exceeds total {total}")]
    ScoreOutOfRange { score: usize, total: usize },

    /// The session state machine was driven out of order.
    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns `true` for errors the answer loop recovers from by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::InvalidAnswer { .. })
    }
}
