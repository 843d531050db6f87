//! Scoring module - points, levels and gravity speed
//!
//! Rules:
//! - A lock scores `LINE_SCORES[cleared]` (0/100/300/500/800), independent of level.
//! - Level is `lines / 10 + 1`.
//! - Gravity interval is `max(120, floor(1000 * 0.85^(level - 1)))` milliseconds.

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_DECAY, GRAVITY_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES, STARTING_LEVEL,
};

/// Points for one lock that cleared `lines` rows.
/// A single lock clears at most 4 rows; larger counts score as 4.
pub fn calculate_line_score(lines: u32) -> u32 {
    LINE_SCORES[(lines as usize).min(LINE_SCORES.len() - 1)]
}

/// Level management
/// Level increases every 10 lines cleared, starting at 1
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + STARTING_LEVEL
}

/// Get gravity interval for a level (in milliseconds)
pub fn gravity_interval_ms(level: u32) -> u32 {
    let exponent = level.saturating_sub(STARTING_LEVEL).min(i32::MAX as u32) as i32;
    let interval = (BASE_GRAVITY_MS as f64 * GRAVITY_DECAY.powi(exponent)).floor() as u32;
    interval.max(GRAVITY_FLOOR_MS)
}
