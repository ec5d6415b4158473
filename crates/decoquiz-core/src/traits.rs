//! The console seam between the quiz engine and the operator.
//!
//! The CLI implements `Console` over the terminal; tests use
//! [`ScriptedConsole`](crate::mock::ScriptedConsole).

use async_trait::async_trait;

use crate::error::QuizError;

/// One blocking read from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// A line of text, without its trailing newline.
    Line(String),
    /// The operator asked to stop (Ctrl-C or end of input).
    Interrupted,
}

/// Line-oriented operator I/O.
#[async_trait]
pub trait Console: Send {
    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), QuizError>;

    /// Show `prompt` without a newline and wait for the operator.
    ///
    /// Waits indefinitely; there is no timeout.
    async fn read_line(&mut self, prompt: &str) -> Result<ConsoleInput, QuizError>;
}
