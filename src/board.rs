use crate::cell::Endpoint;
use crate::config::{BoardConfig, SearchConfig};
use crate::error::{EndpointFault, GridError, Result};
use crate::pathing_grid::PathingGrid;
use crate::solver::{self, SearchOutcome};
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};

/// A [PathingGrid] carrying exactly one start and one finish marker. All mutations keep the
/// markers distinct, in bounds and free of walls.
#[derive(Clone, Debug)]
pub struct Board {
    grid: PathingGrid,
    start: Point,
    finish: Point,
    config: BoardConfig,
}

fn endpoint_ix(grid: &PathingGrid, point: Point) -> Result<usize> {
    grid.ix(point).ok_or(GridError::InvalidEndpoint {
        point,
        fault: EndpointFault::OutOfBounds,
    })
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Board> {
        let mut grid = PathingGrid::new(config.rows, config.cols)?;
        let start_ix = endpoint_ix(&grid, config.start)?;
        let finish_ix = endpoint_ix(&grid, config.finish)?;
        if start_ix == finish_ix {
            return Err(GridError::InvalidEndpoint {
                point: config.finish,
                fault: EndpointFault::Coincident,
            });
        }
        grid.set_role(start_ix, Endpoint::Start, true);
        grid.set_role(finish_ix, Endpoint::Finish, true);
        Ok(Board {
            grid,
            start: config.start,
            finish: config.finish,
            config,
        })
    }
    /// A board of the given size with default settings otherwise.
    pub fn with_endpoints(rows: usize, cols: usize, start: Point, finish: Point) -> Result<Board> {
        Board::new(BoardConfig {
            rows,
            cols,
            start,
            finish,
            ..BoardConfig::default()
        })
    }
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn finish(&self) -> Point {
        self.finish
    }
    pub fn endpoint(&self, endpoint: Endpoint) -> Point {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::Finish => self.finish,
        }
    }

    /// Flips the wall at `point` and returns whether it is now blocked. Fails with
    /// [GridError::InvalidWallState] on the start or finish cell, leaving the board unchanged.
    pub fn toggle_wall(&mut self, point: Point) -> Result<bool> {
        let result = self.grid.toggle_wall(point);
        if let Err(err) = &result {
            warn!("Rejected wall toggle: {}", err);
        }
        result
    }
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<()> {
        let result = self.grid.set_wall(point, blocked);
        if let Err(err) = &result {
            warn!("Rejected wall placement: {}", err);
        }
        result
    }

    /// Moves the start or finish marker to `to`. The old cell loses its flag in the same call,
    /// and the run state is reset. Walls are cleared as configured by
    /// [BoardConfig::clear_walls_on_move]; a wall under `to` is always removed.
    pub fn move_endpoint(&mut self, endpoint: Endpoint, to: Point) -> Result<()> {
        let to_ix = endpoint_ix(&self.grid, to)?;
        let (from, other) = match endpoint {
            Endpoint::Start => (self.start, self.finish),
            Endpoint::Finish => (self.finish, self.start),
        };
        if to == other {
            return Err(GridError::InvalidEndpoint {
                point: to,
                fault: EndpointFault::Coincident,
            });
        }
        if to == from {
            return Ok(());
        }
        if let Some(from_ix) = self.grid.ix(from) {
            self.grid.set_role(from_ix, endpoint, false);
        }
        if self.config.clear_walls_on_move {
            self.grid.clear_walls();
        }
        self.grid.set_role(to_ix, endpoint, true);
        match endpoint {
            Endpoint::Start => self.start = to,
            Endpoint::Finish => self.finish = to,
        }
        self.grid.reset_run_state();
        info!("Moved {} from {} to {}", endpoint, from, to);
        Ok(())
    }

    /// Resets distance, visited and previous of every cell.
    pub fn reset_run_state(&mut self) {
        self.grid.reset_run_state();
    }

    /// Removes all walls and puts the markers back at their configured positions.
    pub fn clear(&mut self) {
        info!("Clearing board");
        for (endpoint, point) in [(Endpoint::Start, self.start), (Endpoint::Finish, self.finish)] {
            if let Some(ix) = self.grid.ix(point) {
                self.grid.set_role(ix, endpoint, false);
            }
        }
        self.grid.clear_walls();
        self.grid.reset_run_state();
        self.start = self.config.start;
        self.finish = self.config.finish;
        for (endpoint, point) in [(Endpoint::Start, self.start), (Endpoint::Finish, self.finish)] {
            if let Some(ix) = self.grid.ix(point) {
                self.grid.set_role(ix, endpoint, true);
            }
        }
    }

    /// Checks whether the finish lies on the start's connected component, regenerating the
    /// components first if walls were added since the last check.
    pub fn reachable(&mut self) -> bool {
        self.grid.update();
        self.grid.reachable(&self.start, &self.finish)
    }

    /// Resets the run state and searches from start to finish.
    pub fn run(&mut self, config: &SearchConfig) -> Result<SearchOutcome> {
        self.grid.reset_run_state();
        solver::search(&mut self.grid, self.start, self.finish, config.frontier)
    }

    /// Renders the board like [Display](fmt::Display) with the cells of `path` marked `o`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut canvas: Vec<Vec<char>> = self
            .to_string()
            .lines()
            .map(|line| line.chars().collect())
            .collect();
        for cell in path.iter().filter_map(|p| self.grid.cell(*p)) {
            if cell.role().is_none() {
                canvas[cell.row()][cell.col()] = 'o';
            }
        }
        let rendered = canvas
            .iter()
            .map(|row| row.iter().collect::<String>())
            .join("\n");
        format!("{}\n", rendered)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

fn place(slot: &mut Option<Point>, point: Point) -> Result<()> {
    match slot.replace(point) {
        Some(_) => Err(GridError::InvalidEndpoint {
            point,
            fault: EndpointFault::Duplicate,
        }),
        None => Ok(()),
    }
}

/// Parses rows of `.` (open), `#` (wall), `S` (start) and `F` (finish). Blank lines and
/// surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Board> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let point = Point::new(col as i32, row as i32);
                match c {
                    '.' => {}
                    '#' => walls.push(point),
                    'S' => place(&mut start, point)?,
                    'F' => place(&mut finish, point)?,
                    found => return Err(GridError::Parse { row, col, found }),
                }
            }
        }
        let start = start.ok_or(GridError::MissingEndpoint(Endpoint::Start))?;
        let finish = finish.ok_or(GridError::MissingEndpoint(Endpoint::Finish))?;
        let mut board = Board::with_endpoints(rows, cols, start, finish)?;
        for wall in walls {
            board.grid.set_wall(wall, true)?;
        }
        Ok(board)
    }
}
