//! Final score summary and feedback tiers.

use std::fmt;

use serde::Serialize;

use crate::error::{ConfigError, QuizError};
use crate::model::Messages;

/// Named feedback bucket for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Perfect,
    Excellent,
    Good,
    NeedsReview,
    EncourageRetry,
}

impl Tier {
    /// The locale's message for this tier.
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Tier::Perfect => &messages.tier_perfect,
            Tier::Excellent => &messages.tier_excellent,
            Tier::Good => &messages.tier_good,
            Tier::NeedsReview => &messages.tier_needs_review,
            Tier::EncourageRetry => &messages.tier_encourage_retry,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Perfect => write!(f, "perfect"),
            Tier::Excellent => write!(f, "excellent"),
            Tier::Good => write!(f, "good"),
            Tier::NeedsReview => write!(f, "needs review"),
            Tier::EncourageRetry => write!(f, "encourage retry"),
        }
    }
}

/// Lower bounds, checked from highest to lowest. A percentage exactly on a
/// bound belongs to that bound's tier.
const TIER_THRESHOLDS: [(f64, Tier); 4] = [
    (100.0, Tier::Perfect),
    (80.0, Tier::Excellent),
    (60.0, Tier::Good),
    (40.0, Tier::NeedsReview),
];

/// Select the tier for a percentage in `0.0..=100.0`.
pub fn tier_for(percentage: f64) -> Tier {
    TIER_THRESHOLDS
        .iter()
        .find(|(bound, _)| percentage >= *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::EncourageRetry)
}

/// The outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub tier: Tier,
}

/// Compute the percentage and tier for `score` out of `total`.
pub fn summarize(score: usize, total: usize) -> Result<Summary, QuizError> {
    if total == 0 {
        return Err(ConfigError::EmptyBank.into());
    }
    if score > total {
        return Err(QuizError::ScoreOutOfRange { score, total });
    }

    let percentage = 100.0 * score as f64 / total as f64;
    Ok(Summary {
        score,
        total,
        percentage,
        tier: tier_for(percentage),
    })
}
