//! Terminal console over tokio stdin and std stdout.

use std::io::{Stdout, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use decoquiz_core::traits::{Console, ConsoleInput};
use decoquiz_core::QuizError;

/// Reads answers from stdin; Ctrl-C and end of input both count as an
/// operator interrupt.
pub struct TerminalConsole {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: std::io::stdout(),
        }
    }
}

#[async_trait]
impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) -> Result<(), QuizError> {
        writeln!(self.stdout, "{line}")?;
        Ok(())
    }

    async fn read_line(&mut self, prompt: &str) -> Result<ConsoleInput, QuizError> {
        write!(self.stdout, "{prompt}")?;
        self.stdout.flush()?;

        tokio::select! {
            line = self.lines.next_line() => match line? {
                Some(line) => Ok(ConsoleInput::Line(line)),
                None => {
                    // keep the farewell off the prompt line
                    writeln!(self.stdout)?;
                    tracing::debug!("stdin closed");
                    Ok(ConsoleInput::Interrupted)
                }
            },
            signal = tokio::signal::ctrl_c() => {
                signal?;
                tracing::debug!("received Ctrl-C");
                Ok(ConsoleInput::Interrupted)
            }
        }
    }
}
