//! Staggered presentation of a [SearchOutcome].
//!
//! The search is synchronous and delay free; a [Timeline] only assigns each output cell the
//! moment at which a renderer should reveal it. Visited cells come first, one per
//! [visit_step](PlaybackConfig::visit_step), followed by the path, one cell per
//! [path_step](PlaybackConfig::path_step). The start and finish markers are never repainted but
//! keep their slot in the schedule.
use std::time::Duration;

use grid_util::point::Point;

use crate::config::PlaybackConfig;
use crate::solver::SearchOutcome;

/// What a renderer paints for a [Frame].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// The cell was finalized by the search.
    Visit,
    /// The cell lies on the shortest path.
    Path,
}

/// A single cell to reveal at offset `at` from the start of playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub at: Duration,
    pub kind: FrameKind,
    pub position: Point,
}

/// Frames of one search outcome, ordered by time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    frames: Vec<Frame>,
    path_start: Duration,
    finished_at: Duration,
}

/// `step` repeated `count` times, saturating instead of overflowing.
fn steps(step: Duration, count: usize) -> Duration {
    step.saturating_mul(u32::try_from(count).unwrap_or(u32::MAX))
}

impl Timeline {
    pub fn new(outcome: &SearchOutcome, config: &PlaybackConfig) -> Timeline {
        let is_marker = |p: &Point| *p == outcome.start() || *p == outcome.finish();
        let visited = outcome.visited();
        let path = outcome.path().unwrap_or_default();
        let path_start = steps(config.visit_step, visited.len());

        let visits = visited.iter().enumerate().map(|(i, p)| Frame {
            at: steps(config.visit_step, i),
            kind: FrameKind::Visit,
            position: *p,
        });
        let path_frames = path.iter().enumerate().map(|(j, p)| Frame {
            at: path_start.saturating_add(steps(config.path_step, j)),
            kind: FrameKind::Path,
            position: *p,
        });
        let frames = visits
            .chain(path_frames)
            .filter(|frame| !is_marker(&frame.position))
            .collect();
        Timeline {
            frames,
            path_start,
            finished_at: path_start.saturating_add(steps(config.path_step, path.len())),
        }
    }
    /// All frames, ordered by time.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    /// Frames that are due once `elapsed` has passed since playback started.
    pub fn frames_due(&self, elapsed: Duration) -> impl Iterator<Item = &Frame> + '_ {
        self.frames
            .iter()
            .take_while(move |frame| frame.at <= elapsed)
    }
    /// When the path starts being revealed.
    pub fn path_start(&self) -> Duration {
        self.path_start
    }
    /// When playback is over and a new search may start.
    pub fn finished_at(&self) -> Duration {
        self.finished_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::config::SearchConfig;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn schedules_visits_then_path() {
        let mut board: Board = "S...F".parse().unwrap();
        let outcome = board.run(&SearchConfig::default()).unwrap();
        let timeline = Timeline::new(&outcome, &PlaybackConfig::default());
        let visits: Vec<Duration> = timeline
            .frames()
            .iter()
            .filter(|frame| frame.kind == FrameKind::Visit)
            .map(|frame| frame.at)
            .collect();
        let path: Vec<(Duration, Point)> = timeline
            .frames()
            .iter()
            .filter(|frame| frame.kind == FrameKind::Path)
            .map(|frame| (frame.at, frame.position))
            .collect();
        assert_eq!(visits, vec![ms(10), ms(20), ms(30)]);
        assert_eq!(timeline.path_start(), ms(50));
        assert_eq!(
            path,
            vec![
                (ms(100), Point::new(1, 0)),
                (ms(150), Point::new(2, 0)),
                (ms(200), Point::new(3, 0))
            ]
        );
        assert_eq!(timeline.finished_at(), ms(300));
    }

    #[test]
    fn stopping_midway_yields_a_prefix() {
        let mut board: Board = "S...F".parse().unwrap();
        let outcome = board.run(&SearchConfig::default()).unwrap();
        let timeline = Timeline::new(&outcome, &PlaybackConfig::default());
        assert_eq!(timeline.frames_due(ms(5)).count(), 0);
        assert_eq!(timeline.frames_due(ms(20)).count(), 2);
        assert_eq!(timeline.frames_due(ms(150)).count(), 5);
        assert_eq!(
            timeline.frames_due(timeline.finished_at()).count(),
            timeline.frames().len()
        );
    }

    #[test]
    fn unreachable_finish_has_no_path_frames() {
        let mut board: Board = "S.#F".parse().unwrap();
        let outcome = board.run(&SearchConfig::default()).unwrap();
        let timeline = Timeline::new(&outcome, &PlaybackConfig::default());
        assert!(timeline
            .frames()
            .iter()
            .all(|frame| frame.kind == FrameKind::Visit));
        assert_eq!(timeline.frames().len(), 1);
        assert_eq!(timeline.finished_at(), ms(20));
    }

    #[test]
    fn huge_steps_saturate() {
        let mut board: Board = "S.F".parse().unwrap();
        let outcome = board.run(&SearchConfig::default()).unwrap();
        let config = PlaybackConfig {
            visit_step: Duration::from_secs(u64::MAX / 2),
            ..PlaybackConfig::default()
        };
        let timeline = Timeline::new(&outcome, &config);
        assert_eq!(timeline.path_start(), Duration::MAX);
        assert_eq!(timeline.finished_at(), Duration::MAX);
        let times: Vec<Duration> = timeline.frames().iter().map(|frame| frame.at).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(steps(ms(10), usize::MAX), ms(10) * u32::MAX);
    }
}
