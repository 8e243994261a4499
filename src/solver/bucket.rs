use std::collections::BTreeSet;

use crate::cell::Distance;
use crate::pathing_grid::PathingGrid;

use super::Frontier;

/// Monotone bucket queue: one ordered set of cell indices per distance. Dijkstra never pushes a
/// distance below the one it last popped, so a single forward cursor suffices.
pub struct BucketFrontier {
    buckets: Vec<BTreeSet<usize>>,
    cursor: usize,
}

impl Frontier for BucketFrontier {
    fn new(_: &PathingGrid, start: usize) -> Self {
        let mut frontier = BucketFrontier {
            buckets: Vec::new(),
            cursor: 0,
        };
        frontier.push(start, 0);
        frontier
    }
    fn push(&mut self, ix: usize, distance: Distance) {
        let bucket = distance as usize;
        debug_assert!(bucket >= self.cursor, "bucket queue must stay monotone");
        if self.buckets.len() <= bucket {
            self.buckets.resize_with(bucket + 1, BTreeSet::new);
        }
        self.buckets[bucket].insert(ix);
    }
    fn pop_min(&mut self, _: &PathingGrid) -> Option<usize> {
        while let Some(bucket) = self.buckets.get_mut(self.cursor) {
            if let Some(ix) = bucket.pop_first() {
                return Some(ix);
            }
            self.cursor += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_buckets_in_order() {
        let grid = PathingGrid::new(3, 3).unwrap();
        let mut frontier = BucketFrontier::new(&grid, 4);
        assert_eq!(frontier.pop_min(&grid), Some(4));
        frontier.push(5, 1);
        frontier.push(8, 2);
        frontier.push(1, 1);
        assert_eq!(frontier.pop_min(&grid), Some(1));
        frontier.push(0, 2);
        let rest: Vec<usize> = std::iter::from_fn(|| frontier.pop_min(&grid)).collect();
        assert_eq!(rest, vec![5, 0, 8]);
    }
}
