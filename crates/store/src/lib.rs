//! Persistence for finished games.
//!
//! The session never depends on this crate for correctness: it hands over a
//! [`GameSummary`](types::GameSummary) on game over and queries the best score for display.

pub mod high_scores;

pub use blockfall_types as types;

pub use high_scores::{
    format_age, sanitize_name, HighScores, ScoreEntry, Stats, DEFAULT_NAME, MAX_ENTRIES,
    MAX_NAME_CHARS,
};
