use core::fmt;
use grid_util::point::Point;

/// Tentative path length in edges. Every edge costs 1.
pub type Distance = u32;

/// Distance of a cell the current run has not reached.
pub const INFINITY: Distance = Distance::MAX;

/// The two markers a board carries exactly once each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Finish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Finish => write!(f, "finish"),
        }
    }
}

/// A single grid position. Topology ([is_wall](Self::is_wall)) and roles are owned by the
/// caller; [distance](Self::distance), [visited](Self::visited) and
/// [previous](Self::previous) form the overlay of a single search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) position: Point,
    pub(crate) is_wall: bool,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub(crate) distance: Distance,
    pub(crate) visited: bool,
    pub(crate) previous: Option<Point>,
}

impl Cell {
    pub(crate) fn new(position: Point) -> Cell {
        Cell {
            position,
            is_wall: false,
            is_start: false,
            is_finish: false,
            distance: INFINITY,
            visited: false,
            previous: None,
        }
    }
    /// Column is `x`, row is `y`.
    pub fn position(&self) -> Point {
        self.position
    }
    pub fn row(&self) -> usize {
        self.position.y as usize
    }
    pub fn col(&self) -> usize {
        self.position.x as usize
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    pub fn is_start(&self) -> bool {
        self.is_start
    }
    pub fn is_finish(&self) -> bool {
        self.is_finish
    }
    /// The endpoint role of this cell, start taking priority if a bare grid marks both.
    pub fn role(&self) -> Option<Endpoint> {
        if self.is_start {
            Some(Endpoint::Start)
        } else if self.is_finish {
            Some(Endpoint::Finish)
        } else {
            None
        }
    }
    pub fn distance(&self) -> Distance {
        self.distance
    }
    pub fn is_reached(&self) -> bool {
        self.distance != INFINITY
    }
    pub fn visited(&self) -> bool {
        self.visited
    }
    /// The cell this one was reached from in the last run.
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }
    pub(crate) fn reset_run_state(&mut self) {
        self.distance = INFINITY;
        self.visited = false;
        self.previous = None;
    }
    pub(crate) fn is_pristine(&self) -> bool {
        self.distance == INFINITY && !self.visited && self.previous.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_unreached_and_open() {
        let cell = Cell::new(Point::new(3, 1));
        assert_eq!(cell.row(), 1);
        assert_eq!(cell.col(), 3);
        assert!(!cell.is_wall());
        assert!(!cell.is_reached());
        assert!(cell.is_pristine());
        assert_eq!(cell.role(), None);
    }

    #[test]
    fn reset_clears_only_run_state() {
        let mut cell = Cell::new(Point::new(0, 0));
        cell.is_wall = true;
        cell.distance = 4;
        cell.visited = true;
        cell.previous = Some(Point::new(1, 0));
        cell.reset_run_state();
        assert!(cell.is_pristine());
        assert!(cell.is_wall());
    }
}
