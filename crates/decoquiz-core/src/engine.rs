//! The interactive quiz engine.
//!
//! Drives sessions over a [`Console`]: present each question once, collect
//! one valid answer, grade it, and summarize when the bank is exhausted.

use crate::error::QuizError;
use crate::model::{Messages, Question, QuestionBank};
use crate::scoring::{summarize, Summary};
use crate::session::{grade, Grade, SessionState};
use crate::traits::{Console, ConsoleInput};

/// Presentation knobs for the engine.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Wait for Enter before the first question and between questions.
    pub pause_between_questions: bool,
    /// Ask whether to start over after a completed session.
    pub offer_retry: bool,
    /// Width of the `=` rules around headers.
    pub rule_width: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            pause_between_questions: true,
            offer_retry: true,
            rule_width: 70,
        }
    }
}

/// Outcome of reading one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRead {
    /// A normalized option key of the current question.
    Key(String),
    Interrupted,
}

/// Outcome of one session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed(Summary),
    Interrupted,
}

/// Outcome of a whole run, which may span several sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Summaries of completed sessions, in order.
    pub sessions: Vec<Summary>,
    /// Whether the operator stopped the run early.
    pub interrupted: bool,
}

/// The quiz engine for one question bank.
pub struct QuizEngine<'a> {
    bank: &'a QuestionBank,
    options: EngineOptions,
}

impl<'a> QuizEngine<'a> {
    pub fn new(bank: &'a QuestionBank, options: EngineOptions) -> Self {
        Self { bank, options }
    }

    fn messages(&self) -> &Messages {
        self.bank.messages()
    }

    fn rule(&self) -> String {
        "=".repeat(self.options.rule_width)
    }

    /// Run sessions until the operator declines a retry or interrupts.
    ///
    /// Faults other than interruption are returned without a summary.
    pub async fn run(&self, console: &mut dyn Console) -> Result<RunReport, QuizError> {
        let mut report = RunReport::default();

        loop {
            match self.run_session(console).await? {
                SessionOutcome::Completed(summary) => report.sessions.push(summary),
                SessionOutcome::Interrupted => {
                    self.farewell(console)?;
                    report.interrupted = true;
                    return Ok(report);
                }
            }

            if !self.options.offer_retry {
                return Ok(report);
            }

            let m = self.messages();
            console.write_line("")?;
            console.write_line(&m.retry_question)?;
            let prompt =
                Messages::render(&m.retry_prompt, &[("token", m.retry_token.as_str())]);
            match console.read_line(&prompt).await? {
                ConsoleInput::Line(reply)
                    if reply.trim().to_lowercase() == m.retry_token.to_lowercase() =>
                {
                    tracing::debug!("operator chose to retry");
                    console.write_line("")?;
                }
                ConsoleInput::Line(_) => {
                    console.write_line("")?;
                    console.write_line(&m.goodbye)?;
                    return Ok(report);
                }
                ConsoleInput::Interrupted => {
                    self.farewell(console)?;
                    report.interrupted = true;
                    return Ok(report);
                }
            }
        }
    }

    /// Run one session over the bank with fresh state.
    pub async fn run_session(
        &self,
        console: &mut dyn Console,
    ) -> Result<SessionOutcome, QuizError> {
        let questions = self.bank.questions();
        let mut state = SessionState::new(questions.len())?;

        self.banner(console)?;
        if self.options.pause_between_questions
            && self.pause(console, &self.messages().press_enter_start).await?
        {
            return Ok(SessionOutcome::Interrupted);
        }

        state = state.advance()?;
        while !state.is_complete() {
            let index = state.position();
            let question = &questions[index];

            self.present(console, question, index, state.total())?;
            state = state.await_answer()?;

            let key = match self.read_answer(console, question).await? {
                AnswerRead::Key(key) => key,
                AnswerRead::Interrupted => return Ok(SessionOutcome::Interrupted),
            };

            let (graded, result) = grade(state, question, &key)?;
            self.feedback(console, &result)?;
            state = graded.advance()?;

            if !state.is_complete()
                && self.options.pause_between_questions
                && self
                    .pause(console, &self.messages().press_enter_continue)
                    .await?
            {
                return Ok(SessionOutcome::Interrupted);
            }
        }

        let summary = summarize(state.score(), state.total())?;
        tracing::info!(
            "session complete: {}/{} ({:.1}%), tier {}",
            summary.score,
            summary.total,
            summary.percentage,
            summary.tier
        );
        self.print_summary(console, &summary)?;
        Ok(SessionOutcome::Completed(summary))
    }

    /// Render the header, prompt, and options in sorted key order.
    ///
    /// `index` is 0-based; the header shows it 1-based.
    pub fn present(
        &self,
        console: &mut dyn Console,
        question: &Question,
        index: usize,
        total: usize,
    ) -> Result<(), QuizError> {
        let header = Messages::render(
            &self.messages().question_header,
            &[
                ("n", (index + 1).to_string().as_str()),
                ("total", total.to_string().as_str()),
            ],
        );

        console.write_line("")?;
        console.write_line(&self.rule())?;
        console.write_line(&header)?;
        console.write_line(&self.rule())?;
        console.write_line("")?;
        for line in question.prompt().lines() {
            console.write_line(line)?;
        }
        console.write_line("")?;
        for (key, text) in question.options() {
            console.write_line(&format!("  {key}) {text}"))?;
        }
        console.write_line("")?;
        Ok(())
    }

    /// Prompt until the operator enters one of the question's keys.
    ///
    /// Invalid input is answered with a retry message and never leaves this
    /// loop; there is no retry limit.
    pub async fn read_answer(
        &self,
        console: &mut dyn Console,
        question: &Question,
    ) -> Result<AnswerRead, QuizError> {
        let m = self.messages();
        let keys = question.key_list();
        let prompt = Messages::render(&m.answer_prompt, &[("keys", keys.as_str())]);

        loop {
            let line = match console.read_line(&prompt).await? {
                ConsoleInput::Line(line) => line,
                ConsoleInput::Interrupted => return Ok(AnswerRead::Interrupted),
            };

            match question.parse_answer(&line) {
                Ok(key) => return Ok(AnswerRead::Key(key)),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("{e}");
                    console.write_line(&Messages::render(
                        &m.invalid_answer,
                        &[("keys", keys.as_str())],
                    ))?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Print the final score block.
    pub fn print_summary(
        &self,
        console: &mut dyn Console,
        summary: &Summary,
    ) -> Result<(), QuizError> {
        let m = self.messages();
        let score_line = Messages::render(
            &m.score_line,
            &[
                ("score", summary.score.to_string().as_str()),
                ("total", summary.total.to_string().as_str()),
                ("percentage", format!("{:.1}", summary.percentage).as_str()),
            ],
        );

        console.write_line("")?;
        console.write_line(&self.rule())?;
        console.write_line(&m.completed)?;
        console.write_line(&self.rule())?;
        console.write_line("")?;
        console.write_line(&score_line)?;
        console.write_line("")?;
        console.write_line(summary.tier.message(m))?;
        console.write_line("")?;
        console.write_line(&self.rule())?;
        Ok(())
    }

    fn banner(&self, console: &mut dyn Console) -> Result<(), QuizError> {
        let m = self.messages();
        console.write_line("")?;
        console.write_line(&self.rule())?;
        console.write_line(self.bank.title())?;
        console.write_line(&self.rule())?;
        console.write_line("")?;
        for line in m.intro.lines() {
            console.write_line(line)?;
        }
        console.write_line("")?;
        console.write_line(&Messages::render(
            &m.total_questions,
            &[("total", self.bank.len().to_string().as_str())],
        ))?;
        console.write_line(&m.lets_begin)?;
        console.write_line("")?;
        Ok(())
    }

    fn feedback(&self, console: &mut dyn Console, result: &Grade) -> Result<(), QuizError> {
        let m = self.messages();
        console.write_line("")?;
        if result.is_correct {
            console.write_line(&m.correct)?;
        } else {
            console.write_line(&Messages::render(
                &m.incorrect,
                &[("key", result.correct_key.as_str())],
            ))?;
        }
        console.write_line(&Messages::render(
            &m.explanation,
            &[("text", result.explanation.as_str())],
        ))?;
        Ok(())
    }

    /// Wait for Enter. Returns `true` if the operator interrupted instead.
    async fn pause(&self, console: &mut dyn Console, prompt: &str) -> Result<bool, QuizError> {
        Ok(console.read_line(prompt).await? == ConsoleInput::Interrupted)
    }

    fn farewell(&self, console: &mut dyn Console) -> Result<(), QuizError> {
        console.write_line("")?;
        console.write_line(&self.messages().interrupted)
    }
}
