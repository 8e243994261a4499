use fxhash::FxBuildHasher;
use indexmap::IndexSet;

use crate::cell::Distance;
use crate::pathing_grid::PathingGrid;

use super::Frontier;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Holds every not yet selected cell in row-major order and scans all of them for the smallest
/// distance on each selection. Quadratic in the number of cells, which is fine for board sized
/// grids and serves as the reference the other frontiers are checked against.
pub struct ScanFrontier {
    working_set: FxIndexSet<usize>,
}

impl Frontier for ScanFrontier {
    fn new(grid: &PathingGrid, _: usize) -> Self {
        let mut working_set =
            FxIndexSet::with_capacity_and_hasher(grid.len(), FxBuildHasher::default());
        working_set.extend(0..grid.len());
        ScanFrontier { working_set }
    }
    /// Distances are read from the grid on selection.
    fn push(&mut self, _: usize, _: Distance) {}
    fn pop_min(&mut self, grid: &PathingGrid) -> Option<usize> {
        // min_by_key keeps the first of several minima, which is the lowest index since
        // shift_remove_index preserves insertion order
        let (position, _) = self
            .working_set
            .iter()
            .enumerate()
            .min_by_key(|&(_, &ix)| grid.cell_at(ix).distance())?;
        self.working_set.shift_remove_index(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_every_cell_once() {
        let grid = PathingGrid::new(2, 3).unwrap();
        let mut frontier = ScanFrontier::new(&grid, 0);
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop_min(&grid)).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn prefers_smaller_distance() {
        let mut grid = PathingGrid::new(2, 2).unwrap();
        grid.cell_at_mut(3).distance = 0;
        grid.cell_at_mut(1).distance = 1;
        grid.cell_at_mut(2).distance = 1;
        let mut frontier = ScanFrontier::new(&grid, 3);
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop_min(&grid)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }
}
