use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::cell::Distance;
use crate::pathing_grid::PathingGrid;

use super::Frontier;

struct SmallestCostHolder {
    cost: Distance,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.index == other.index
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest cost, then the smallest index
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Binary heap frontier. A cell that is relaxed more than once stays in the heap with its old
/// cost; [dijkstra](super::dijkstra) skips it when it comes up again after being finalized.
pub struct HeapFrontier {
    to_see: BinaryHeap<SmallestCostHolder>,
}

impl Frontier for HeapFrontier {
    fn new(grid: &PathingGrid, start: usize) -> Self {
        let mut to_see = BinaryHeap::with_capacity(grid.cols().max(grid.rows()));
        to_see.push(SmallestCostHolder {
            cost: 0,
            index: start,
        });
        HeapFrontier { to_see }
    }
    fn push(&mut self, ix: usize, distance: Distance) {
        self.to_see.push(SmallestCostHolder {
            cost: distance,
            index: ix,
        });
    }
    fn pop_min(&mut self, _: &PathingGrid) -> Option<usize> {
        self.to_see.pop().map(|holder| holder.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_cost_then_index() {
        let grid = PathingGrid::new(3, 3).unwrap();
        let mut frontier = HeapFrontier::new(&grid, 4);
        frontier.push(7, 1);
        frontier.push(1, 1);
        frontier.push(0, 2);
        frontier.push(5, 1);
        let order: Vec<usize> = std::iter::from_fn(|| frontier.pop_min(&grid)).collect();
        assert_eq!(order, vec![4, 1, 5, 7, 0]);
    }
}
