//! Scoring module - line clear points, drop points, levels and gravity
//!
//! Pure functions only; the game state decides when to apply them.

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_CELL, LINES_PER_LEVEL, LINE_SCORES,
    MIN_DROP_MS, SOFT_DROP_INTERVAL_MS, START_LEVEL,
};

/// Result of applying a line clear to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    /// Points awarded for this clear
    pub points: u32,
    /// Total lines after the clear
    pub total_lines: u32,
    /// Level after the clear
    pub level: u32,
    /// Whether `level` is higher than before
    pub leveled_up: bool,
}

/// Base points for clearing `lines` rows at once (0 outside 1..=4)
pub fn base_score_for_lines(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Points for clearing `lines` rows at `level`
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    base_score_for_lines(lines).saturating_mul(level)
}

/// Points for a hard drop that traversed `cells` rows
pub fn hard_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS_PER_CELL)
}

/// Level for a running line total: one level per 10 lines, starting at 1
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Score a clear of `lines` rows and advance the totals.
///
/// Points use the level in effect before the clear.
pub fn apply_line_clear(lines: usize, level: u32, total_lines: u32) -> ClearOutcome {
    let points = line_clear_score(lines, level);
    let total_lines = total_lines.saturating_add(lines as u32);
    let new_level = level_for_lines(total_lines).max(level);
    ClearOutcome {
        points,
        total_lines,
        level: new_level,
        leveled_up: new_level > level,
    }
}

/// Gravity interval for a level: `max(100, 1000 - (level - 1) * 50)`
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}

/// Gravity interval with soft drop taken into account
pub fn effective_drop_interval_ms(level: u32, soft_drop: bool) -> u32 {
    if soft_drop {
        SOFT_DROP_INTERVAL_MS
    } else {
        drop_interval_ms(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_scores() {
        assert_eq!(base_score_for_lines(0), 0);
        assert_eq!(base_score_for_lines(1), 100);
        assert_eq!(base_score_for_lines(2), 300);
        assert_eq!(base_score_for_lines(3), 500);
        assert_eq!(base_score_for_lines(4), 800);
        assert_eq!(base_score_for_lines(5), 0);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(4, 3), 2400);
        assert_eq!(line_clear_score(2, 5), 1500);
    }

    #[test]
    fn test_hard_drop_score() {
        assert_eq!(hard_drop_score(0), 0);
        assert_eq!(hard_drop_score(5), 10);
        assert_eq!(hard_drop_score(18), 36);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_apply_line_clear_levels_up_across_boundary() {
        let outcome = apply_line_clear(2, 1, 9);
        assert_eq!(outcome.points, 300);
        assert_eq!(outcome.total_lines, 11);
        assert_eq!(outcome.level, 2);
        assert!(outcome.leveled_up);
    }

    #[test]
    fn test_apply_line_clear_can_jump_levels() {
        let outcome = apply_line_clear(4, 1, 18);
        assert_eq!(outcome.level, 3);
        assert!(outcome.leveled_up);
    }

    #[test]
    fn test_apply_line_clear_without_level_change() {
        let outcome = apply_line_clear(1, 2, 12);
        assert_eq!(outcome.points, 200);
        assert_eq!(outcome.level, 2);
        assert!(!outcome.leveled_up);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 950);
        assert_eq!(drop_interval_ms(10), 550);
        assert_eq!(drop_interval_ms(19), 100);
        assert_eq!(drop_interval_ms(50), 100);
        // Level 0 never occurs in play, but must not underflow.
        assert_eq!(drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_drop_interval_is_monotonic() {
        for level in 1..40 {
            assert!(drop_interval_ms(level + 1) <= drop_interval_ms(level));
        }
    }

    #[test]
    fn test_soft_drop_overrides_level() {
        assert_eq!(effective_drop_interval_ms(1, true), 50);
        assert_eq!(effective_drop_interval_ms(30, true), 50);
        assert_eq!(effective_drop_interval_ms(3, false), 900);
    }
}
