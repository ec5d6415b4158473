//! Session state and grading.
//!
//! `SessionState` is a small `Copy` value. Every transition consumes the
//! current state and returns the next one, so the engine loop is the only
//! place a session ever changes.

use std::fmt;

use crate::error::{ConfigError, QuizError};
use crate::model::Question;

/// Where a session is in its question loop. Indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Presenting(usize),
    AwaitingAnswer(usize),
    Graded(usize),
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => write!(f, "not-started"),
            Phase::Presenting(i) => write!(f, "presenting({i})"),
            Phase::AwaitingAnswer(i) => write!(f, "awaiting-answer({i})"),
            Phase::Graded(i) => write!(f, "graded({i})"),
            Phase::Completed => write!(f, "completed"),
        }
    }
}

/// Score, position, and phase of one run through a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    position: usize,
    score: usize,
    total: usize,
    phase: Phase,
}

impl SessionState {
    /// Fresh state for a bank of `total` questions.
    pub fn new(total: usize) -> Result<Self, QuizError> {
        if total == 0 {
            return Err(ConfigError::EmptyBank.into());
        }
        Ok(Self {
            position: 0,
            score: 0,
            total,
            phase: Phase::NotStarted,
        })
    }

    /// Index of the question being handled.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Move to the next question, or to `Completed` after the last one.
    ///
    /// Valid from `NotStarted` and `Graded(i)` only.
    pub fn advance(self) -> Result<Self, QuizError> {
        let next = match self.phase {
            Phase::NotStarted => 0,
            Phase::Graded(i) => i + 1,
            _ => return Err(self.invalid("presenting")),
        };

        let phase = if next < self.total {
            Phase::Presenting(next)
        } else {
            Phase::Completed
        };
        tracing::debug!("session {} -> {}", self.phase, phase);

        Ok(Self {
            position: next.min(self.total),
            phase,
            ..self
        })
    }

    /// The current question has been shown; wait for an answer.
    pub fn await_answer(self) -> Result<Self, QuizError> {
        match self.phase {
            Phase::Presenting(i) => Ok(Self {
                phase: Phase::AwaitingAnswer(i),
                ..self
            }),
            _ => Err(self.invalid("awaiting-answer")),
        }
    }

    fn invalid(&self, to: &str) -> QuizError {
        QuizError::InvalidTransition {
            from: self.phase.to_string(),
            to: to.to_string(),
        }
    }
}

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub is_correct: bool,
    pub correct_key: String,
    pub explanation: String,
}

/// Compare `answer_key` with the question's correct key.
///
/// Only valid while awaiting an answer. The returned state is `Graded` and
/// carries one more point when the answer is correct.
pub fn grade(
    state: SessionState,
    question: &Question,
    answer_key: &str,
) -> Result<(SessionState, Grade), QuizError> {
    let Phase::AwaitingAnswer(i) = state.phase else {
        return Err(state.invalid("graded"));
    };

    let is_correct = answer_key == question.correct_key();
    let next = SessionState {
        score: state.score + usize::from(is_correct),
        phase: Phase::Graded(i),
        ..state
    };
    tracing::debug!(
        "graded question {} answer={answer_key} correct={is_correct}",
        i + 1
    );

    Ok((
        next,
        Grade {
            is_correct,
            correct_key: question.correct_key().to_string(),
            explanation: question.explanation().to_string(),
        },
    ))
}
