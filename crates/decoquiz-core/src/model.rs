//! Core data model types for decoquiz.
//!
//! A `QuestionBank` is one locale's worth of content: the ordered questions
//! plus the message table every user-visible string is rendered from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, QuizError};

/// A single multiple-choice question.
///
/// Fields are private so a constructed question cannot drift out of its
/// invariants: keys are lowercase, unique, and `correct_key` is one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: BTreeMap<String, String>,
    correct_key: String,
    explanation: String,
}

impl Question {
    /// Build a question, normalizing option keys and checking the correct key.
    ///
    /// `number` is the 1-based position used in error messages.
    pub fn new<I, K, V>(
        number: usize,
        prompt: impl Into<String>,
        options: I,
        correct_key: &str,
        explanation: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut normalized = BTreeMap::new();
        for (key, text) in options {
            let key = normalize_key(key.as_ref());
            if key.is_empty() {
                return Err(ConfigError::EmptyOptionKey { index: number });
            }
            if normalized.insert(key.clone(), text.into()).is_some() {
                return Err(ConfigError::DuplicateOptionKey { index: number, key });
            }
        }

        if normalized.len() < 2 {
            return Err(ConfigError::TooFewOptions {
                index: number,
                count: normalized.len(),
            });
        }

        let correct_key = normalize_key(correct_key);
        if !normalized.contains_key(&correct_key) {
            return Err(ConfigError::UnknownCorrectKey {
                index: number,
                key: correct_key,
                available: normalized.keys().cloned().collect::<Vec<_>>().join(", "),
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            options: normalized,
            correct_key,
            explanation: explanation.into(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in sorted key order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn correct_key(&self) -> &str {
        &self.correct_key
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Sorted option keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Keys joined for display, e.g. `a/b/c/d`.
    pub fn key_list(&self) -> String {
        self.keys().collect::<Vec<_>>().join("/")
    }

    /// Normalize raw operator input and check it against this question's keys.
    pub fn parse_answer(&self, input: &str) -> Result<String, QuizError> {
        let key = normalize_key(input);
        if self.options.contains_key(&key) {
            Ok(key)
        } else {
            Err(QuizError::InvalidAnswer {
                input: input.trim().to_string(),
                expected: self.keys().collect::<Vec<_>>().join(", "),
            })
        }
    }
}

fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A locale's question set and message table.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    id: String,
    locale: String,
    title: String,
    messages: Messages,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank. Rejects an empty question list and malformed templates.
    pub fn new(
        id: impl Into<String>,
        locale: impl Into<String>,
        title: impl Into<String>,
        messages: Messages,
        questions: Vec<Question>,
    ) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::EmptyBank);
        }
        messages.validate()?;

        Ok(Self {
            id: id.into(),
            locale: locale.into(),
            title: title.into(),
            messages,
            questions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions; never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`: construction rejects empty banks.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Every user-visible string, per locale.
///
/// Missing fields fall back to the English defaults, so a bank file only
/// needs a `[messages]` table when it is not in English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub intro: String,
    pub total_questions: String,
    pub lets_begin: String,
    pub press_enter_start: String,
    pub press_enter_continue: String,
    pub question_header: String,
    pub answer_prompt: String,
    pub invalid_answer: String,
    pub correct: String,
    pub incorrect: String,
    pub explanation: String,
    pub completed: String,
    pub score_line: String,
    pub tier_perfect: String,
    pub tier_excellent: String,
    pub tier_good: String,
    pub tier_needs_review: String,
    pub tier_encourage_retry: String,
    pub interrupted: String,
    pub error: String,
    pub retry_question: String,
    pub retry_prompt: String,
    pub retry_token: String,
    pub goodbye: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            intro: "This quiz will test your understanding of Python decorators\n\
                    and advanced features covered in the tutorial."
                .into(),
            total_questions: "Total Questions: {total}".into(),
            lets_begin: "Let's begin!".into(),
            press_enter_start: "Press Enter to start... ".into(),
            press_enter_continue: "Press Enter to continue to the next question... ".into(),
            question_header: "Question {n}/{total}".into(),
            answer_prompt: "Your answer ({keys}): ".into(),
            invalid_answer: "Invalid input. Please enter one of: {keys}.".into(),
            correct: "Correct! Well done!".into(),
            incorrect: "Incorrect. The correct answer is: {key}".into(),
            explanation: "Explanation: {text}".into(),
            completed: "QUIZ COMPLETED!".into(),
            score_line: "Your Score: {score}/{total} ({percentage}%)".into(),
            tier_perfect: "Perfect score! You're a Python decorator master!".into(),
            tier_excellent: "Excellent work! You have a strong understanding!".into(),
            tier_good: "Good job! Review the tutorial for topics you missed.".into(),
            tier_needs_review: "Keep learning! Go through the tutorial again.".into(),
            tier_encourage_retry: "Don't give up! Study the tutorial and try again.".into(),
            interrupted: "Quiz interrupted. Goodbye!".into(),
            error: "An error occurred: {text}".into(),
            retry_question: "Would you like to take the quiz again?".into(),
            retry_prompt: "Enter '{token}' to retry or anything else to exit: ".into(),
            retry_token: "yes".into(),
            goodbye: "Thanks for taking the quiz! Keep learning Python!".into(),
        }
    }
}

impl Messages {
    /// Substitute `{name}` placeholders in `template`.
    pub fn render(template: &str, args: &[(&str, &str)]) -> String {
        let mut out = template.to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }

    /// Check each template only references placeholders the engine supplies,
    /// and that the retry token is not blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_token.trim().is_empty() {
            return Err(ConfigError::BlankRetryToken);
        }
        check_template("intro", &self.intro, &[])?;
        check_template("total_questions", &self.total_questions, &["total"])?;
        check_template("lets_begin", &self.lets_begin, &[])?;
        check_template("press_enter_start", &self.press_enter_start, &[])?;
        check_template("press_enter_continue", &self.press_enter_continue, &[])?;
        check_template("question_header", &self.question_header, &["n", "total"])?;
        check_template("answer_prompt", &self.answer_prompt, &["keys"])?;
        check_template("invalid_answer", &self.invalid_answer, &["keys"])?;
        check_template("correct", &self.correct, &[])?;
        check_template("incorrect", &self.incorrect, &["key"])?;
        check_template("explanation", &self.explanation, &["text"])?;
        check_template("completed", &self.completed, &[])?;
        check_template(
            "score_line",
            &self.score_line,
            &["score", "total", "percentage"],
        )?;
        check_template("tier_perfect", &self.tier_perfect, &[])?;
        check_template("tier_excellent", &self.tier_excellent, &[])?;
        check_template("tier_good", &self.tier_good, &[])?;
        check_template("tier_needs_review", &self.tier_needs_review, &[])?;
        check_template("tier_encourage_retry", &self.tier_encourage_retry, &[])?;
        check_template("interrupted", &self.interrupted, &[])?;
        check_template("error", &self.error, &["text"])?;
        check_template("retry_question", &self.retry_question, &[])?;
        check_template("retry_prompt", &self.retry_prompt, &["token"])?;
        check_template("retry_token", &self.retry_token, &[])?;
        check_template("goodbye", &self.goodbye, &[])
    }
}

fn check_template(message: &str, template: &str, allowed: &[&str]) -> Result<(), ConfigError> {
    match placeholders(template)
        .into_iter()
        .find(|p| !allowed.contains(p))
    {
        Some(placeholder) => Err(ConfigError::InvalidTemplate {
            message: message.to_string(),
            placeholder: placeholder.to_string(),
        }),
        None => Ok(()),
    }
}

/// Identifiers wrapped in braces, e.g. `n` and `total` in `{n}/{total}`.
fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                {
                    found.push(name);
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    found
}
