//! High-score table and lifetime statistics, stored as one JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::GameSummary;

/// Entries kept in the table
pub const MAX_ENTRIES: usize = 10;

/// Longest stored player name, in characters
pub const MAX_NAME_CHARS: usize = 20;

/// Name used when none is given
pub const DEFAULT_NAME: &str = "Player";

const FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub pieces: u32,
    /// Unix time of the game's end
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub games_played: u32,
    pub total_score: u64,
    pub total_lines: u64,
    pub total_pieces: u64,
    pub best_score: u32,
    pub best_level: u32,
    pub best_lines: u32,
}

impl Stats {
    /// Fold one finished game into the totals
    pub fn record(&mut self, summary: &GameSummary) {
        self.games_played = self.games_played.saturating_add(1);
        self.total_score = self.total_score.saturating_add(summary.score as u64);
        self.total_lines = self.total_lines.saturating_add(summary.lines as u64);
        self.total_pieces = self.total_pieces.saturating_add(summary.pieces_placed as u64);
        self.best_score = self.best_score.max(summary.score);
        self.best_level = self.best_level.max(summary.level);
        self.best_lines = self.best_lines.max(summary.lines);
    }

    pub fn average_score(&self) -> u64 {
        match self.games_played {
            0 => 0,
            n => self.total_score / n as u64,
        }
    }
}

/// On-disk layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ScoreFile {
    version: u32,
    entries: Vec<ScoreEntry>,
    stats: Stats,
}

impl Default for ScoreFile {
    fn default() -> Self {
        Self {
            version: FILE_VERSION,
            entries: Vec::new(),
            stats: Stats::default(),
        }
    }
}

impl ScoreFile {
    /// Re-establish ordering and size after loading foreign data
    fn sanitized(mut self) -> Self {
        self.version = FILE_VERSION;
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
        self
    }
}

/// Score table backed by an optional file
#[derive(Debug, Clone)]
pub struct HighScores {
    path: Option<PathBuf>,
    file: ScoreFile,
}

impl HighScores {
    /// Table that is never written anywhere
    pub fn in_memory() -> Self {
        Self {
            path: None,
            file: ScoreFile::default(),
        }
    }

    /// Load from `path`; a missing file is an empty table
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<ScoreFile>(&bytes)
                .with_context(|| format!("parse {}", path.display()))?
                .sanitized(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => ScoreFile::default(),
            Err(e) => return Err(e).with_context(|| format!("read {}", path.display())),
        };
        Ok(Self {
            path: Some(path),
            file,
        })
    }

    /// Write the table back to its file. In-memory tables do nothing.
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.file).context("encode scores")?;
        fs::write(path, text).with_context(|| format!("write {}", path.display()))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Entries, best first
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.file.entries
    }

    pub fn stats(&self) -> &Stats {
        &self.file.stats
    }

    /// Top entry's score, or 0 for an empty table
    pub fn best_score(&self) -> u32 {
        self.file.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Whether `score` would enter the table
    pub fn is_new_high_score(&self, score: u32) -> bool {
        match self.file.entries.get(MAX_ENTRIES - 1) {
            Some(lowest) => score > lowest.score,
            None => true,
        }
    }

    /// Record a finished game.
    ///
    /// Stats always change; the table only when the score qualifies. Returns the
    /// 1-based rank of the new entry. Nothing is written until [`HighScores::save`].
    pub fn record(&mut self, summary: &GameSummary, name: &str, now_ms: u64) -> Option<usize> {
        self.file.stats.record(summary);

        if !self.is_new_high_score(summary.score) {
            return None;
        }

        let entry = ScoreEntry {
            name: sanitize_name(name),
            score: summary.score,
            lines: summary.lines,
            level: summary.level,
            pieces: summary.pieces_placed,
            timestamp_ms: now_ms,
        };
        // Ties keep the older entry ahead.
        let rank = self
            .file
            .entries
            .iter()
            .position(|e| e.score < entry.score)
            .unwrap_or(self.file.entries.len());
        self.file.entries.insert(rank, entry);
        self.file.entries.truncate(MAX_ENTRIES);
        Some(rank + 1)
    }

    pub fn reset_scores(&mut self) {
        self.file.entries.clear();
    }

    pub fn reset_stats(&mut self) {
        self.file.stats = Stats::default();
    }
}

impl Default for HighScores {
    fn default() -> Self {
        Self::in_memory()
    }
}

/// Trim, default to [`DEFAULT_NAME`] and cap at [`MAX_NAME_CHARS`]
pub fn sanitize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_CHARS).collect()
}

/// Short relative age of a timestamp
pub fn format_age(now_ms: u64, then_ms: u64) -> String {
    let mins = now_ms.saturating_sub(then_ms) / 60_000;
    let hours = mins / 60;
    let days = hours / 24;
    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{} min ago", mins)
    } else if hours < 24 {
        format!("{} h ago", hours)
    } else if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}
