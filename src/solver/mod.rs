//! Dijkstra's algorithm over a [PathingGrid] with unit edge costs.
//!
//! The search itself lives in [dijkstra]; the "select the closest unfinalized cell" step is
//! delegated to a [Frontier]. All frontiers break distance ties by row-major index, so they
//! produce identical visitation orders and paths and can be swapped freely.
use crate::cell::{Distance, INFINITY};
use crate::error::{EndpointFault, GridError, Result};
use crate::pathing_grid::PathingGrid;
use crate::reconstruct_path;
use grid_util::point::Point;
use log::debug;

pub mod bucket;
pub mod heap;
pub mod scan;

pub use bucket::BucketFrontier;
pub use heap::HeapFrontier;
pub use scan::ScanFrontier;

/// The working set of a search run.
pub trait Frontier {
    /// Creates the working set of a run starting at the cell with index `start`.
    fn new(grid: &PathingGrid, start: usize) -> Self
    where
        Self: Sized;
    /// Records that the cell with index `ix` got the tentative distance `distance`.
    fn push(&mut self, ix: usize, distance: Distance);
    /// Removes and returns the index of the cell with the smallest distance, lowest index first
    /// among equals. May return cells that have been finalized already.
    fn pop_min(&mut self, grid: &PathingGrid) -> Option<usize>;
}

/// Selects the [Frontier] used by [search].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrontierKind {
    /// Linear scan over every unfinalized cell, O(V²).
    Scan,
    /// Binary heap with lazy deletion.
    #[default]
    Heap,
    /// Monotone bucket queue indexed by distance.
    Bucket,
}

impl FrontierKind {
    pub const ALL: [FrontierKind; 3] = [
        FrontierKind::Scan,
        FrontierKind::Heap,
        FrontierKind::Bucket,
    ];
}

fn endpoint_ix(grid: &PathingGrid, point: Point) -> Result<usize> {
    grid.ix(point).ok_or(GridError::InvalidEndpoint {
        point,
        fault: EndpointFault::OutOfBounds,
    })
}

/// Runs Dijkstra's algorithm from `start` until `finish` is finalized or no reachable cell is
/// left, and returns the cells in the order they were finalized. Walls are never finalized.
///
/// The run state of `grid` must be pristine, see [PathingGrid::reset_run_state]. Afterwards the
/// distances and `previous` links of the grid describe the explored shortest-path tree.
pub fn dijkstra<F: Frontier>(
    grid: &mut PathingGrid,
    start: Point,
    finish: Point,
) -> Result<Vec<Point>> {
    let start_ix = endpoint_ix(grid, start)?;
    let finish_ix = endpoint_ix(grid, finish)?;
    if !grid.is_pristine() {
        return Err(GridError::StaleRunState);
    }
    grid.cell_at_mut(start_ix).distance = 0;
    let mut frontier = F::new(grid, start_ix);
    let mut visited_in_order = Vec::new();

    while let Some(ix) = frontier.pop_min(grid) {
        let current = grid.cell_at_mut(ix);
        if current.visited || current.is_wall {
            continue;
        }
        if current.distance == INFINITY {
            debug!(
                "No cell left reachable from {} after {} visits",
                start,
                visited_in_order.len()
            );
            break;
        }
        current.visited = true;
        visited_in_order.push(current.position);
        if ix == finish_ix {
            debug!("Reached {} at distance {}", finish, current.distance);
            return Ok(visited_in_order);
        }
        let (position, distance) = (current.position, current.distance + 1);
        for n in grid.neighbours(ix) {
            let neighbour = grid.cell_at_mut(n);
            if neighbour.visited || neighbour.is_wall || neighbour.distance <= distance {
                continue;
            }
            neighbour.distance = distance;
            neighbour.previous = Some(position);
            frontier.push(n, distance);
        }
    }
    debug!("{} is not reachable from {}", finish, start);
    Ok(visited_in_order)
}

/// Runs [dijkstra] with the frontier selected by `kind` and reconstructs the path if the finish
/// was reached.
pub fn search(
    grid: &mut PathingGrid,
    start: Point,
    finish: Point,
    kind: FrontierKind,
) -> Result<SearchOutcome> {
    let visited = match kind {
        FrontierKind::Scan => dijkstra::<ScanFrontier>(grid, start, finish),
        FrontierKind::Heap => dijkstra::<HeapFrontier>(grid, start, finish),
        FrontierKind::Bucket => dijkstra::<BucketFrontier>(grid, start, finish),
    }?;
    let path = (visited.last() == Some(&finish)).then(|| reconstruct_path(grid, finish));
    Ok(SearchOutcome {
        start,
        finish,
        visited,
        path,
    })
}

/// Result of a single search run: the visitation order for progressive rendering and, if the
/// finish was reached, the shortest path from start to finish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    start: Point,
    finish: Point,
    visited: Vec<Point>,
    path: Option<Vec<Point>>,
}

impl SearchOutcome {
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn finish(&self) -> Point {
        self.finish
    }
    /// Cells in the order they were finalized.
    pub fn visited(&self) -> &[Point] {
        &self.visited
    }
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }
    /// The path from start to finish, both included.
    pub fn path(&self) -> Result<&[Point]> {
        self.path.as_deref().ok_or(GridError::Unreachable {
            start: self.start,
            finish: self.finish,
        })
    }
    /// Number of edges on the path.
    pub fn distance(&self) -> Option<Distance> {
        self.path.as_ref().map(|path| (path.len() - 1) as Distance)
    }
}
