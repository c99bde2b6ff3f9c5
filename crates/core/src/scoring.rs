//! Scoring module - line clear points, leveling and gravity speed

use crate::types::{
    DROP_FRAMES, DROP_FRAMES_DECREMENT, LINES_PER_LEVEL, LINE_SCORES, MIN_DROP_FRAMES,
    SOFT_DROP_FRAMES,
};

/// Calculate line clear score
/// lines: number of rows cleared by one landing
/// level: level in effect before the clear (0-based)
///
/// A single piece spans at most 4 rows; larger counts are scored as 4.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base_score = LINE_SCORES[lines.min(4)];
    base_score.saturating_mul(level.saturating_add(1))
}

/// Gravity threshold in frames for the given level
pub fn drop_frames(level: u32, soft_drop: bool) -> u32 {
    if soft_drop {
        return SOFT_DROP_FRAMES;
    }
    DROP_FRAMES
        .saturating_sub(level.saturating_mul(DROP_FRAMES_DECREMENT))
        .max(MIN_DROP_FRAMES)
}

/// Level counter with its cleared-rows accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelProgress {
    level: u32,
    accumulated: u32,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cleared rows counted toward the next level
    pub fn accumulated(&self) -> u32 {
        self.accumulated
    }

    /// Add cleared rows and apply every level-up they earn.
    ///
    /// Returns the number of levels gained.
    pub fn add_clears(&mut self, rows: u32) -> u32 {
        self.accumulated = self.accumulated.saturating_add(rows);
        let mut gained = 0;
        while self.accumulated >= LINES_PER_LEVEL {
            self.level += 1;
            self.accumulated -= LINES_PER_LEVEL;
            gained += 1;
        }
        gained
    }
}
