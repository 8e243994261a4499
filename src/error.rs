//! Error types for grid construction, mutation and search.

use core::fmt;
use grid_util::point::Point;
use thiserror::Error;

use crate::cell::Endpoint;

/// Why an endpoint was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    /// The position lies outside the grid.
    OutOfBounds,
    /// Start and finish would share a cell.
    Coincident,
    /// More than one start or finish marker was given.
    Duplicate,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(f, "outside the grid"),
            EndpointFault::Coincident => write!(f, "start and finish coincide"),
            EndpointFault::Duplicate => write!(f, "marker given more than once"),
        }
    }
}

/// Errors raised by grid construction, board mutation, parsing and search.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A start or finish position was rejected.
    #[error("invalid endpoint {point}: {fault}")]
    InvalidEndpoint { point: Point, fault: EndpointFault },

    /// Parsed text lacks a start or finish marker.
    #[error("no {0} marker on the board")]
    MissingEndpoint(Endpoint),

    /// Walls cannot cover the start or finish.
    #[error("cannot place a wall on the {role} cell at {point}")]
    InvalidWallState { point: Point, role: Endpoint },

    /// A wall operation addressed a point off the grid.
    #[error("{point} lies outside the grid")]
    OutOfBounds { point: Point },

    /// The grid still holds distances or visits from an earlier run.
    #[error("run state was not reset before searching")]
    StaleRunState,

    /// The search finished without reaching the finish.
    #[error("{finish} is not reachable from {start}")]
    Unreachable { start: Point, finish: Point },

    /// Board text contains a character other than `.`, `#`, `S` or `F`.
    #[error("unexpected character {found:?} at row {row}, column {col}")]
    Parse { row: usize, col: usize, found: char },

    /// Board text rows differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
