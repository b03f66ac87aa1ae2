//! The open set: best-first frontier keyed by coordinate.
//!
//! A `BinaryHeap` gives O(log n) extraction of the best node. Improving an
//! existing entry pushes a fresh heap entry and bumps the coordinate's stamp;
//! heap entries whose stamp no longer matches are skipped on pop. The
//! coordinate map is a `BTreeMap` so snapshots iterate in a stable order.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use stepstar_core::Point;

use crate::node::{Priority, SearchNode};

/// Heap entry, ordered so the max-heap pops the smallest [`Priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    key: Reverse<Priority>,
    stamp: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key).then(other.stamp.cmp(&self.stamp))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    node: SearchNode,
    stamp: u64,
}

/// What [`Frontier::offer`] did with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The coordinate was not in the frontier; the node was added.
    Inserted,
    /// The node replaced a costlier entry for the same coordinate.
    Improved,
    /// An entry at least as good already exists; nothing changed.
    Rejected,
}

/// Best-first frontier holding at most one node per coordinate.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<HeapEntry>,
    entries: BTreeMap<Point, Slot>,
    next_stamp: u64,
    high_water: usize,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a node to the frontier.
    ///
    /// A node for an unseen coordinate is inserted. A node for a coordinate
    /// already present replaces the existing entry only if its `(f, h)` is
    /// strictly smaller.
    pub fn offer(&mut self, node: SearchNode) -> Admission {
        let stamp = self.next_stamp;
        let admission = match self.entries.get_mut(&node.coord()) {
            Some(slot) => {
                if node.priority().cmp_cost(&slot.node.priority()) != Ordering::Less {
                    return Admission::Rejected;
                }
                *slot = Slot { node, stamp };
                Admission::Improved
            }
            None => {
                self.entries.insert(node.coord(), Slot { node, stamp });
                Admission::Inserted
            }
        };
        self.next_stamp += 1;
        self.heap.push(HeapEntry {
            key: Reverse(node.priority()),
            stamp,
        });
        self.high_water = self.high_water.max(self.entries.len());
        admission
    }

    /// Remove and return the best node: lowest `f`, then lowest `h`, then
    /// smallest coordinate.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode> {
        while let Some(entry) = self.heap.pop() {
            let coord = entry.key.0.coord;
            let live = self
                .entries
                .get(&coord)
                .is_some_and(|slot| slot.stamp == entry.stamp);
            if live {
                return self.entries.remove(&coord).map(|slot| slot.node);
            }
        }
        None
    }

    /// The entry for a coordinate, if present.
    #[must_use]
    pub fn get(&self, p: Point) -> Option<&SearchNode> {
        self.entries.get(&p).map(|slot| &slot.node)
    }

    /// Whether a coordinate has an entry.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.entries.contains_key(&p)
    }

    /// Number of coordinates in the frontier.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Iterate over the current entries in row-major coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.entries.values().map(|slot| &slot.node)
    }

    /// Remove every entry and reset the high-water mark.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.entries.clear();
        self.next_stamp = 0;
        self.high_water = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, g: f64, h: f64) -> SearchNode {
        SearchNode::reached(Point::new(x, y), g, h, Point::ZERO)
    }

    #[test]
    fn pop_returns_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.offer(node(0, 0, 10.0, 0.0));
        frontier.offer(node(1, 0, 5.0, 0.0));
        frontier.offer(node(2, 0, 15.0, 0.0));

        let first = frontier.pop().unwrap();
        assert_eq!(first.coord(), Point::new(1, 0), "lowest f should pop first");
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn equal_f_pops_lower_h_then_row_major() {
        let mut frontier = Frontier::new();
        frontier.offer(node(0, 2, 1.0, 2.0));
        frontier.offer(node(4, 0, 2.0, 1.0));
        frontier.offer(node(1, 0, 2.0, 1.0));

        let order: Vec<Point> = std::iter::from_fn(|| frontier.pop()).map(|n| n.coord()).collect();
        assert_eq!(order, vec![Point::new(1, 0), Point::new(4, 0), Point::new(0, 2)]);
    }

    #[test]
    fn cheaper_path_replaces_entry_in_place() {
        let mut frontier = Frontier::new();
        assert_eq!(frontier.offer(node(3, 3, 5.0, 1.0)), Admission::Inserted);
        assert_eq!(frontier.offer(node(3, 3, 4.0, 1.0)), Admission::Improved);
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.get(Point::new(3, 3)).unwrap().g(), 4.0);

        let popped = frontier.pop().unwrap();
        assert_eq!(popped.g(), 4.0);
        assert!(frontier.pop().is_none(), "stale heap entry must be skipped");
    }

    #[test]
    fn equal_or_worse_path_is_rejected() {
        let mut frontier = Frontier::new();
        frontier.offer(node(3, 3, 4.0, 1.0));
        assert_eq!(frontier.offer(node(3, 3, 4.0, 1.0)), Admission::Rejected);
        assert_eq!(frontier.offer(node(3, 3, 6.0, 1.0)), Admission::Rejected);
        assert_eq!(frontier.get(Point::new(3, 3)).unwrap().g(), 4.0);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn improved_entry_keeps_its_new_parent() {
        let mut frontier = Frontier::new();
        frontier.offer(SearchNode::reached(Point::new(2, 2), 3.0, 1.0, Point::new(1, 1)));
        frontier.offer(SearchNode::reached(Point::new(2, 2), 2.0, 1.0, Point::new(2, 1)));
        assert_eq!(frontier.pop().unwrap().parent(), Some(Point::new(2, 1)));
    }

    #[test]
    fn iter_is_row_major() {
        let mut frontier = Frontier::new();
        frontier.offer(node(2, 1, 1.0, 1.0));
        frontier.offer(node(0, 1, 9.0, 1.0));
        frontier.offer(node(5, 0, 3.0, 1.0));
        let coords: Vec<Point> = frontier.iter().map(SearchNode::coord).collect();
        assert_eq!(coords, vec![Point::new(5, 0), Point::new(0, 1), Point::new(2, 1)]);
    }

    #[test]
    fn high_water_tracks_max_size() {
        let mut frontier = Frontier::new();
        frontier.offer(node(0, 0, 1.0, 0.0));
        frontier.offer(node(1, 0, 2.0, 0.0));
        frontier.offer(node(2, 0, 3.0, 0.0));
        assert_eq!(frontier.high_water(), 3);

        let _ = frontier.pop();
        assert_eq!(frontier.high_water(), 3, "high water should not decrease on pop");

        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.high_water(), 0);
    }
}
