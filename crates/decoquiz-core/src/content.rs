//! Built-in question banks, one per locale.

use std::path::Path;

use anyhow::Result;

use crate::error::{ConfigError, QuizError};
use crate::model::QuestionBank;
use crate::parser::parse_bank_str;

/// Locale code paired with the embedded bank source.
const BUILTIN_BANKS: &[(&str, &str)] = &[
    ("en", include_str!("../banks/en.toml")),
    ("tr", include_str!("../banks/tr.toml")),
];

/// Locales that ship with the binary.
pub fn builtin_locales() -> impl Iterator<Item = &'static str> {
    BUILTIN_BANKS.iter().map(|(locale, _)| *locale)
}

/// Load the built-in bank for `locale`.
///
/// Fails with [`ConfigError::UnknownLocale`] for an unsupported locale and
/// with the usual content errors if the bank itself is malformed.
pub fn load_questions(locale: &str) -> Result<QuestionBank> {
    let wanted = locale.trim().to_lowercase();
    let (code, source) = BUILTIN_BANKS
        .iter()
        .find(|(code, _)| *code == wanted)
        .ok_or_else(|| QuizError::from(ConfigError::UnknownLocale(locale.to_string())))?;

    let bank = parse_bank_str(source, Path::new(&format!("<builtin:{code}>")))?;
    tracing::info!("loaded built-in bank '{}' ({} questions)", bank.id(), bank.len());
    Ok(bank)
}

/// Every built-in bank, in locale order.
pub fn builtin_banks() -> Result<Vec<QuestionBank>> {
    builtin_locales().map(load_questions).collect()
}
