//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::QuizError;
use crate::model::{Messages, Question, QuestionBank};

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    messages: Messages,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    #[serde(default = "default_locale")]
    locale: String,
    title: String,
}

fn default_locale() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    options: BTreeMap<String, String>,
    correct: String,
    #[serde(default)]
    explanation: String,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank`.
///
/// Content errors (empty bank, unknown correct key, bad templates) surface
/// as [`QuizError::Config`] underneath the returned context.
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| Question::new(i + 1, q.prompt, q.options, &q.correct, q.explanation))
        .collect::<Result<Vec<_>, _>>()
        .map_err(QuizError::from)
        .with_context(|| format!("invalid question bank: {}", source_path.display()))?;

    let bank = QuestionBank::new(
        parsed.bank.id,
        parsed.bank.locale,
        parsed.bank.title,
        parsed.messages,
        questions,
    )
    .map_err(QuizError::from)
    .with_context(|| format!("invalid question bank: {}", source_path.display()))?;

    tracing::debug!(
        "parsed bank '{}' ({} questions) from {}",
        bank.id(),
        bank.len(),
        source_path.display()
    );
    Ok(bank)
}

/// Recursively load all `.toml` bank files from a directory.
///
/// Any invalid file fails the whole load.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            banks.push(parse_bank(&path)?);
        }
    }

    Ok(banks)
}

/// A non-fatal finding from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question number (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a bank for content smells that do not block a session.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_prompts = HashSet::new();
    for (i, q) in bank.questions().iter().enumerate() {
        let number = Some(i + 1);

        if q.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "prompt is empty".into(),
            });
        } else if !seen_prompts.insert(q.prompt().trim()) {
            warnings.push(ValidationWarning {
                question: number,
                message: "duplicate prompt".into(),
            });
        }

        if q.explanation().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: number,
                message: "explanation is empty".into(),
            });
        }

        let mut seen_texts = HashSet::new();
        for (key, text) in q.options() {
            if !seen_texts.insert(text.trim()) {
                warnings.push(ValidationWarning {
                    question: number,
                    message: format!("option '{key}' repeats another option's text"),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[bank]
id = "test-bank"
locale = "en"
title = "Test Bank"

[[questions]]
prompt = "What is the first parameter of a @classmethod?"
correct = "B"
explanation = "It receives the class itself."

[questions.options]
d = "instance"
a = "self"
b = "cls"
c = "class"

[[questions]]
prompt = """
In which order are stacked decorators applied?

@decorator1
@decorator2
def func():
    pass"""
correct = "b"
explanation = "Bottom-up."

[questions.options]
a = "decorator1 first"
b = "decorator2 first"
"#;

    fn config_error(err: &anyhow::Error) -> Option<&ConfigError> {
        match err.downcast_ref::<QuizError>() {
            Some(QuizError::Config(c)) => Some(c),
            _ => None,
        }
    }

    #[test]
    fn parse_valid_toml() {
        let bank = parse_bank_str(VALID_TOML, &PathBuf::from("test.toml")).unwrap();
        assert_eq!(bank.id(), "test-bank");
        assert_eq!(bank.title(), "Test Bank");
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[0].correct_key(), "b");
        assert_eq!(bank.questions()[0].key_list(), "a/b/c/d");
        assert!(bank.questions()[1].prompt().contains("@decorator2"));
        assert_eq!(bank.messages(), &Messages::default());
    }

    #[test]
    fn partial_messages_fall_back_to_defaults() {
        let toml = r#"
[bank]
id = "partial"
title = "Partial"

[messages]
correct = "Richtig!"

[[questions]]
prompt = "Pick"
correct = "a"
options = { a = "one", b = "two" }
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("partial.toml")).unwrap();
        assert_eq!(bank.locale(), "en");
        assert_eq!(bank.messages().correct, "Richtig!");
        assert_eq!(bank.messages().retry_token, "yes");
    }

    #[test]
    fn empty_bank_is_a_config_error() {
        let toml = r#"
[bank]
id = "empty"
title = "Empty"
"#;
        let err = parse_bank_str(toml, &PathBuf::from("empty.toml")).unwrap_err();
        assert_eq!(config_error(&err), Some(&ConfigError::EmptyBank));
    }

    #[test]
    fn unknown_correct_key_is_rejected_at_load() {
        let toml = r#"
[bank]
id = "bad"
title = "Bad"

[[questions]]
prompt = "Pick"
correct = "e"
options = { a = "one", b = "two" }
"#;
        let err = parse_bank_str(toml, &PathBuf::from("bad.toml")).unwrap_err();
        assert!(matches!(
            config_error(&err),
            Some(ConfigError::UnknownCorrectKey { index: 1, .. })
        ));
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn bad_template_is_rejected_at_load() {
        let toml = r#"
[bank]
id = "tmpl"
title = "Template"

[messages]
question_header = "Q{number}"

[[questions]]
prompt = "Pick"
correct = "a"
options = { a = "one", b = "two" }
"#;
        let err = parse_bank_str(toml, &PathBuf::from("tmpl.toml")).unwrap_err();
        assert!(matches!(
            config_error(&err),
            Some(ConfigError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn blank_retry_token_is_rejected_at_load() {
        let toml = r#"
[bank]
id = "blank-token"
title = "Blank Token"

[messages]
retry_token = ""

[[questions]]
prompt = "Pick"
correct = "a"
options = { a = "one", b = "two" }
"#;
        let err = parse_bank_str(toml, &PathBuf::from("blank.toml")).unwrap_err();
        assert_eq!(config_error(&err), Some(&ConfigError::BlankRetryToken));
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_bank_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_reports_smells() {
        let toml = r#"
[bank]
id = "smelly"
title = "Smelly"

[[questions]]
prompt = "Same"
correct = "a"
options = { a = "yes", b = "yes" }

[[questions]]
prompt = "Same"
correct = "a"
explanation = "fine"
options = { a = "one", b = "two" }
"#;
        let bank = parse_bank_str(toml, &PathBuf::from("smelly.toml")).unwrap();
        let warnings = validate_bank(&bank);
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(1) && w.message.contains("explanation is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(1) && w.message.contains("repeats")));
        assert!(warnings
            .iter()
            .any(|w| w.question == Some(2) && w.message == "duplicate prompt"));
    }

    #[test]
    fn load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.toml"), VALID_TOML).unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/two.toml"), VALID_TOML).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let banks = load_bank_directory(dir.path()).unwrap();
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[0].id(), "test-bank");
    }

    #[test]
    fn load_directory_fails_on_invalid_bank() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.toml"), VALID_TOML).unwrap();
        std::fs::write(
            dir.path().join("empty.toml"),
            "[bank]\nid = \"e\"\ntitle = \"E\"\n",
        )
        .unwrap();

        assert!(load_bank_directory(dir.path()).is_err());
    }
}
