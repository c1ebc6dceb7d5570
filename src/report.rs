//! Plain-text score table for `blockfall scores`.

use std::fmt::Write;

use crate::store::{format_age, HighScores};

pub fn score_report(scores: &HighScores, now_ms: u64) -> String {
    let mut out = String::new();

    if scores.entries().is_empty() {
        out.push_str("No high scores yet.\n");
    } else {
        let _ = writeln!(
            out,
            "{:>3}  {:<20} {:>8} {:>6} {:>6} {:>7}  {}",
            "#", "NAME", "SCORE", "LINES", "LEVEL", "PIECES", "WHEN"
        );
        for (i, e) in scores.entries().iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>3}  {:<20} {:>8} {:>6} {:>6} {:>7}  {}",
                i + 1,
                e.name,
                e.score,
                e.lines,
                e.level,
                e.pieces,
                format_age(now_ms, e.timestamp_ms)
            );
        }
    }

    let stats = scores.stats();
    let _ = writeln!(out);
    let _ = writeln!(out, "games played   {}", stats.games_played);
    let _ = writeln!(out, "average score  {}", stats.average_score());
    let _ = writeln!(out, "best score     {}", stats.best_score);
    let _ = writeln!(out, "best level     {}", stats.best_level);
    let _ = writeln!(out, "most lines     {}", stats.best_lines);
    let _ = writeln!(out, "total lines    {}", stats.total_lines);
    let _ = writeln!(out, "total pieces   {}", stats.total_pieces);
    if let Some(path) = scores.path() {
        let _ = writeln!(out, "scores file    {}", path.display());
    }
    out
}
