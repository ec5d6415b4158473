//! Scripted console for testing.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::QuizError;
use crate::traits::{Console, ConsoleInput};

#[derive(Debug)]
enum Scripted {
    Line(String),
    Interrupt,
    Fail(String),
}

/// A console that replays queued input and records everything written.
///
/// Once the script runs out, every read reports an interruption, the same
/// way the terminal console treats end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    script: VecDeque<Scripted>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    /// Queue `lines` as successive operator replies.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|l| Scripted::Line(l.into())).collect(),
            ..Default::default()
        }
    }

    /// Queue more replies after the existing ones.
    pub fn then_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script
            .extend(lines.into_iter().map(|l| Scripted::Line(l.into())));
        self
    }

    /// Queue an operator interrupt.
    pub fn then_interrupt(mut self) -> Self {
        self.script.push_back(Scripted::Interrupt);
        self
    }

    /// Queue an I/O failure with the given message.
    pub fn then_fail(mut self, message: &str) -> Self {
        self.script.push_back(Scripted::Fail(message.to_string()));
        self
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Output joined with newlines, handy for `contains` checks.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Prompts shown for each read, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<(), QuizError> {
        self.output.push(line.to_string());
        Ok(())
    }

    async fn read_line(&mut self, prompt: &str) -> Result<ConsoleInput, QuizError> {
        self.prompts.push(prompt.to_string());
        match self.script.pop_front() {
            Some(Scripted::Line(line)) => Ok(ConsoleInput::Line(line)),
            Some(Scripted::Interrupt) | None => Ok(ConsoleInput::Interrupted),
            Some(Scripted::Fail(message)) => Err(QuizError::Io(std::io::Error::other(message))),
        }
    }
}
