use algo_navigator::{Board, BoardConfig, PlaybackConfig, Point, SearchConfig, Timeline};

// In this example a path is found on the default 20x50 board with the start S at row 10,
// column 5 and the finish F at row 10, column 45. A vertical wall with a gap in the bottom two
// rows forces the search to sweep most of the left half before it can reach F.
//
// Legend:
// - # marks a wall
// - * marks a cell finalized by the search
// - o marks the shortest path

fn main() {
    let mut board = Board::new(BoardConfig::default()).unwrap();
    for y in 0..18 {
        board.set_wall(Point::new(25, y), true).unwrap();
    }
    println!("Reachable: {}", board.reachable());

    let outcome = board.run(&SearchConfig::default()).unwrap();
    let timeline = Timeline::new(&outcome, &PlaybackConfig::default());
    match outcome.path() {
        Ok(path) => {
            print!("{}", board.render_path(path));
            println!("Path of {} steps", path.len() - 1);
        }
        Err(err) => {
            print!("{}", board);
            println!("{}", err);
        }
    }
    println!(
        "Visited {} cells; playback reveals the path at {:?} and ends at {:?}",
        outcome.visited().len(),
        timeline.path_start(),
        timeline.finished_at()
    );
}
