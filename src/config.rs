//! Board, search and playback settings.

use std::time::Duration;

use grid_util::point::Point;

use crate::solver::FrontierKind;

pub const GRID_ROWS: usize = 20;
pub const GRID_COLS: usize = 50;

pub const INITIAL_START_ROW: usize = 10;
pub const INITIAL_START_COL: usize = 5;
pub const INITIAL_FINISH_ROW: usize = 10;
pub const INITIAL_FINISH_COL: usize = 45;

/// Dimensions and initial markers of a [Board](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Start position restored by [Board::clear](crate::Board::clear).
    pub start: Point,
    /// Finish position restored by [Board::clear](crate::Board::clear).
    pub finish: Point,
    /// Remove every wall when an endpoint moves. When disabled only a wall under the moved
    /// endpoint's new cell is removed.
    pub clear_walls_on_move: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            start: Point::new(INITIAL_START_COL as i32, INITIAL_START_ROW as i32),
            finish: Point::new(INITIAL_FINISH_COL as i32, INITIAL_FINISH_ROW as i32),
            clear_walls_on_move: true,
        }
    }
}

/// Settings of a single [Board::run](crate::Board::run).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub frontier: FrontierKind,
}

/// Delays between consecutive frames of a [Timeline](crate::Timeline).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub visit_step: Duration,
    pub path_step: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            visit_step: Duration::from_millis(10),
            path_step: Duration::from_millis(50),
        }
    }
}
