//! decoquiz-core: question model, grading, and the interactive quiz engine.
//!
//! This crate defines the question and bank types, TOML loading, session
//! state, scoring tiers, and the engine that drives a session over a
//! [`Console`](traits::Console).

pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod scoring;
pub mod session;
pub mod traits;

pub use error::{ConfigError, QuizError};
