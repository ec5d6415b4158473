//! decoquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::EngineOptions;

/// Top-level decoquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Built-in bank to use when `bank` is unset.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Custom bank file; takes precedence over `locale`.
    #[serde(default)]
    pub bank: Option<PathBuf>,
    /// Wait for Enter before the first question and between questions.
    #[serde(default = "default_true")]
    pub pause_between_questions: bool,
    /// Offer another round after a completed session.
    #[serde(default = "default_true")]
    pub offer_retry: bool,
    /// Width of the `=` rules.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_locale() -> String {
    "en".to_string()
}
fn default_true() -> bool {
    true
}
fn default_rule_width() -> usize {
    70
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            bank: None,
            pause_between_questions: true,
            offer_retry: true,
            rule_width: default_rule_width(),
        }
    }
}

impl QuizConfig {
    /// Engine options derived from this config.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            pause_between_questions: self.pause_between_questions,
            offer_retry: self.offer_retry,
            rule_width: self.rule_width,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `decoquiz.toml` in the current directory
/// 2. `~/.config/decoquiz/config.toml`
///
/// Environment variable override: `DECOQUIZ_LOCALE`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("decoquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(locale) = std::env::var("DECOQUIZ_LOCALE") {
        if !locale.trim().is_empty() {
            config.locale = locale.trim().to_string();
        }
    }

    anyhow::ensure!(config.rule_width > 0, "rule_width must be at least 1");

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("decoquiz"))
}
