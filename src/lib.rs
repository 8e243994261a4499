//! # algo_navigator
//!
//! The engine behind a grid pathfinding visualizer. A [Board] holds walls and a start and finish
//! marker; [Board::run] executes
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) on the
//! 4-connected grid and returns both the order in which cells were finalized and the shortest
//! path, so a renderer can replay the exploration step by step (see [Timeline]). Every move
//! costs 1. Connected components are tracked with a union-find structure to answer reachability
//! without searching.
//!
//! Positions are [Point]s with `x` as the column and `y` as the row.
pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod pathing_grid;
pub mod playback;
pub mod solver;

pub use board::Board;
pub use cell::{Cell, Distance, Endpoint, INFINITY};
pub use config::{BoardConfig, PlaybackConfig, SearchConfig};
pub use error::{EndpointFault, GridError, Result};
pub use pathing_grid::PathingGrid;
pub use playback::{Frame, FrameKind, Timeline};
pub use solver::{dijkstra, search, FrontierKind, SearchOutcome};

pub use grid_util::point::Point;
use itertools::Itertools;

/// Follows the `previous` links left by the last run from `finish` back to the start and returns
/// the cells in start to finish order. If `finish` was never reached the result is just
/// `[finish]`; check [SearchOutcome::is_reachable] before trusting it.
pub fn reconstruct_path(grid: &PathingGrid, finish: Point) -> Vec<Point> {
    let mut path: Vec<Point> =
        std::iter::successors(Some(finish), |p| grid.cell(*p).and_then(Cell::previous)).collect();
    path.reverse();
    path
}

/// Checks that every consecutive pair of points differs by exactly one row or one column.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}
