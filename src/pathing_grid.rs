use crate::cell::{Cell, Endpoint};
use crate::error::{GridError, Result};
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Row-major grid of [Cell]s. Besides the cells it maintains connected components of the open
/// cells in a [UnionFind] structure, so reachability can be answered without a search.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    cells: SimpleGrid<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl PathingGrid {
    /// Creates a grid of open, unreached cells.
    pub fn new(rows: usize, cols: usize) -> Result<PathingGrid> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut cells = SimpleGrid::new(cols, rows, Cell::new(Point::new(0, 0)));
        for (x, y) in iproduct!(0..cols, 0..rows) {
            cells.set(x, y, Cell::new(Point::new(x as i32, y as i32)));
        }
        let mut grid = PathingGrid {
            cells,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }
    pub fn rows(&self) -> usize {
        self.cells.height()
    }
    pub fn cols(&self) -> usize {
        self.cells.width()
    }
    pub fn len(&self) -> usize {
        self.cells.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.values.is_empty()
    }
    /// Row-major index of a point, if it lies on the grid.
    pub fn ix(&self, point: Point) -> Option<usize> {
        self.cells
            .point_in_bounds(point)
            .then(|| self.cells.get_ix_point(&point))
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.ix(point).map(|ix| &self.cells.values[ix])
    }
    /// Panics if `ix` is not smaller than [len](Self::len).
    pub(crate) fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells.values[ix]
    }
    pub(crate) fn cell_at_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.cells.values[ix]
    }
    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells.values
    }
    pub fn is_wall(&self, point: Point) -> bool {
        self.cell(point).is_some_and(Cell::is_wall)
    }
    fn checked_ix(&self, point: Point) -> Result<usize> {
        self.ix(point).ok_or(GridError::OutOfBounds { point })
    }

    /// In-bounds 4-neighbours of a cell in up, down, left, right order.
    pub fn neighbours(&self, ix: usize) -> SmallVec<[usize; 4]> {
        // neumann_neighborhood yields right, down, left, up
        let around = self.cells.values[ix].position.neumann_neighborhood();
        [3, 1, 2, 0]
            .into_iter()
            .filter_map(|i| self.ix(around[i]))
            .collect()
    }

    /// Marks a cell as blocked or open. Start and finish cells cannot become walls.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<()> {
        let ix = self.checked_ix(point)?;
        if blocked {
            if let Some(role) = self.cells.values[ix].role() {
                return Err(GridError::InvalidWallState { point, role });
            }
        }
        self.write_wall(ix, blocked);
        Ok(())
    }
    /// Flips the wall state of a cell and returns the new state.
    pub fn toggle_wall(&mut self, point: Point) -> Result<bool> {
        let ix = self.checked_ix(point)?;
        let blocked = !self.cells.values[ix].is_wall;
        self.set_wall(point, blocked)?;
        Ok(blocked)
    }
    /// Joins newly connected components and flags the components as dirty if components are
    /// (potentially) broken apart into multiple.
    fn write_wall(&mut self, ix: usize, blocked: bool) {
        if blocked {
            if !self.cells.values[ix].is_wall {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbours(ix) {
                if !self.cells.values[n].is_wall {
                    self.components.union(ix, n);
                }
            }
        }
        self.cells.values[ix].is_wall = blocked;
    }
    /// Opens every cell.
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells.values {
            cell.is_wall = false;
        }
        self.generate_components();
    }

    /// Sets or clears an endpoint flag. Setting it removes a wall under the cell.
    pub(crate) fn set_role(&mut self, ix: usize, role: Endpoint, on: bool) {
        if on && self.cells.values[ix].is_wall {
            self.write_wall(ix, false);
        }
        let cell = &mut self.cells.values[ix];
        match role {
            Endpoint::Start => cell.is_start = on,
            Endpoint::Finish => cell.is_finish = on,
        }
    }

    /// Resets distance, visited and previous of every cell, leaving walls and roles untouched.
    pub fn reset_run_state(&mut self) {
        for cell in &mut self.cells.values {
            cell.reset_run_state();
        }
    }
    /// Whether no cell carries state from an earlier run.
    pub fn is_pristine(&self) -> bool {
        self.cells.values.iter().all(Cell::is_pristine)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.ix(*point).map(|ix| self.components.find(ix))
    }
    /// Checks if start and goal are open cells on the same component. Components must be up to
    /// date, see [update](Self::update).
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.ix(*start), self.ix(*goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                !self.cells.values[start_ix].is_wall
                    && !self.cells.values[goal_ix].is_wall
                    && self.components.equiv(start_ix, goal_ix)
            }
            _ => false,
        }
    }
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        self.components = UnionFind::new(rows * cols);
        self.components_dirty = false;
        for (x, y) in iproduct!(0..cols, 0..rows) {
            if self.cells.get(x, y).is_wall {
                continue;
            }
            let ix = self.cells.get_ix(x, y);
            // Right and lower neighbours suffice to link every edge once
            for (nx, ny) in [(x + 1, y), (x, y + 1)] {
                if self.cells.index_in_bounds(nx, ny) && !self.cells.get(nx, ny).is_wall {
                    self.components.union(ix, self.cells.get_ix(nx, ny));
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() {
            let line: String = (0..self.cols())
                .map(|x| self.cells.get(x, y))
                .map(|cell| match (cell.role(), cell.is_wall, cell.visited) {
                    (Some(Endpoint::Start), ..) => 'S',
                    (Some(Endpoint::Finish), ..) => 'F',
                    (None, true, _) => '#',
                    (None, false, true) => '*',
                    (None, false, false) => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            PathingGrid::new(0, 4).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 4 }
        );
        assert!(PathingGrid::new(3, 0).is_err());
    }

    #[test]
    fn cells_are_row_major() {
        let grid = PathingGrid::new(2, 3).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.ix(Point::new(2, 1)), Some(5));
        assert_eq!(grid.cell_at(4).position(), Point::new(1, 1));
        assert_eq!(grid.ix(Point::new(3, 0)), None);
        assert_eq!(grid.ix(Point::new(0, -1)), None);
    }

    #[test]
    fn tall_grid_indexes_by_row() {
        let grid = PathingGrid::new(3, 2).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        assert_eq!(grid.ix(Point::new(1, 2)), Some(5));
        assert_eq!(grid.ix(Point::new(2, 1)), None);
        for (ix, cell) in grid.cells().iter().enumerate() {
            assert_eq!(grid.ix(cell.position()), Some(ix));
            assert_eq!(grid.cell(cell.position()), Some(cell));
        }
        assert_eq!(grid.neighbours(2).as_slice(), &[0, 4, 3]);
    }

    #[test]
    fn neighbours_stay_in_bounds() {
        let grid = PathingGrid::new(3, 3).unwrap();
        assert_eq!(grid.neighbours(0).as_slice(), &[3, 1]);
        assert_eq!(grid.neighbours(4).as_slice(), &[1, 7, 3, 5]);
        assert_eq!(grid.neighbours(8).as_slice(), &[5, 7]);
    }

    #[test]
    fn walls_cannot_cover_endpoints() {
        let mut grid = PathingGrid::new(2, 2).unwrap();
        let start = Point::new(0, 0);
        grid.set_role(0, Endpoint::Start, true);
        assert_eq!(
            grid.toggle_wall(start),
            Err(GridError::InvalidWallState {
                point: start,
                role: Endpoint::Start
            })
        );
        assert!(!grid.is_wall(start));
        // Opening is always allowed
        assert!(grid.set_wall(start, false).is_ok());
        assert_eq!(
            grid.set_wall(Point::new(2, 0), true),
            Err(GridError::OutOfBounds {
                point: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn role_takes_precedence_over_wall() {
        let mut grid = PathingGrid::new(1, 2).unwrap();
        grid.set_wall(Point::new(1, 0), true).unwrap();
        grid.set_role(1, Endpoint::Finish, true);
        assert!(!grid.is_wall(Point::new(1, 0)));
        assert!(grid.cell_at(1).is_finish());
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = PathingGrid::new(2, 3).unwrap();
        grid.set_wall(Point::new(1, 0), true).unwrap();
        grid.set_wall(Point::new(1, 1), true).unwrap();
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
        assert_ne!(
            grid.get_component(&Point::new(0, 0)),
            grid.get_component(&Point::new(2, 1))
        );
    }

    #[test]
    fn opening_a_wall_joins_components() {
        let mut grid = PathingGrid::new(1, 3).unwrap();
        grid.set_wall(Point::new(1, 0), true).unwrap();
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        grid.toggle_wall(Point::new(1, 0)).unwrap();
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn reset_keeps_topology() {
        let mut grid = PathingGrid::new(2, 2).unwrap();
        grid.set_wall(Point::new(1, 1), true).unwrap();
        grid.cell_at_mut(0).distance = 0;
        grid.cell_at_mut(0).visited = true;
        assert!(!grid.is_pristine());
        grid.reset_run_state();
        assert!(grid.is_pristine());
        assert!(grid.is_wall(Point::new(1, 1)));
    }

    #[test]
    fn display_marks_cells() {
        let mut grid = PathingGrid::new(2, 3).unwrap();
        grid.set_role(0, Endpoint::Start, true);
        grid.set_role(5, Endpoint::Finish, true);
        grid.set_wall(Point::new(1, 0), true).unwrap();
        grid.cell_at_mut(3).visited = true;
        assert_eq!(grid.to_string(), "S#.\n*.F\n");
    }
}
