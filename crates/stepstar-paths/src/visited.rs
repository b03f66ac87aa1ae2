//! The closed set: finalized nodes in expansion order.

use std::collections::HashMap;

use stepstar_core::Point;

use crate::node::SearchNode;
use crate::path::Path;

/// Finalized search nodes, append-only for the duration of a run.
///
/// Keeps expansion order for snapshots and a coordinate index for
/// membership checks and parent-chain walks.
#[derive(Debug, Clone, Default)]
pub struct Visited {
    order: Vec<SearchNode>,
    index: HashMap<Point, usize>,
}

impl Visited {
    /// Create an empty closed set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized node. Returns `false` (and changes nothing) if the
    /// coordinate was already finalized.
    pub fn insert(&mut self, node: SearchNode) -> bool {
        if self.index.contains_key(&node.coord()) {
            return false;
        }
        self.index.insert(node.coord(), self.order.len());
        self.order.push(node);
        true
    }

    /// Whether a coordinate has been finalized.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// The finalized node for a coordinate.
    #[must_use]
    pub fn get(&self, p: Point) -> Option<&SearchNode> {
        self.index.get(&p).map(|&i| &self.order[i])
    }

    /// The most recently finalized node.
    #[must_use]
    pub fn last(&self) -> Option<&SearchNode> {
        self.order.last()
    }

    /// Number of finalized nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been finalized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in expansion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.order.iter()
    }

    /// Forget every node.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    /// Rebuild the path ending at `end` by following parent links back to
    /// the node without a parent.
    ///
    /// Returns `None` if `end` was never finalized or a parent along the
    /// chain is missing.
    #[must_use]
    pub fn trace_back(&self, end: Point) -> Option<Path> {
        let goal = self.get(end)?;
        let mut coords = vec![end];
        let mut node = goal;
        while let Some(parent) = node.parent() {
            // Every finalized node appears once, so a longer chain is a cycle.
            if coords.len() > self.order.len() {
                return None;
            }
            node = self.get(parent)?;
            coords.push(parent);
        }
        Some(Path::new(coords, goal.g()))
    }
}

impl<'a> IntoIterator for &'a Visited {
    type Item = &'a SearchNode;
    type IntoIter = std::slice::Iter<'a, SearchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_append_only_and_unique() {
        let mut v = Visited::new();
        assert!(v.insert(SearchNode::start(Point::ZERO, 2.0)));
        assert!(!v.insert(SearchNode::start(Point::ZERO, 1.0)));
        assert_eq!(v.len(), 1);
        assert_eq!(v.get(Point::ZERO).unwrap().h(), 2.0);
    }

    #[test]
    fn iter_preserves_expansion_order() {
        let mut v = Visited::new();
        v.insert(SearchNode::start(Point::new(3, 3), 0.0));
        v.insert(SearchNode::reached(Point::new(0, 0), 1.0, 0.0, Point::new(3, 3)));
        let coords: Vec<Point> = v.iter().map(SearchNode::coord).collect();
        assert_eq!(coords, vec![Point::new(3, 3), Point::new(0, 0)]);
        assert_eq!(v.last().unwrap().coord(), Point::new(0, 0));
    }

    #[test]
    fn trace_back_follows_parents_to_start() {
        let mut v = Visited::new();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(2, 1);
        v.insert(SearchNode::start(a, 3.0));
        v.insert(SearchNode::reached(b, 1.0, 2.0, a));
        v.insert(SearchNode::reached(c, 1.0 + std::f64::consts::SQRT_2, 0.0, b));

        let path = v.trace_back(c).unwrap();
        assert_eq!(path.end_to_start(), &[c, b, a]);
        assert_eq!(path.cost(), 1.0 + std::f64::consts::SQRT_2);
    }

    #[test]
    fn trace_back_of_unvisited_goal_is_none() {
        let mut v = Visited::new();
        v.insert(SearchNode::start(Point::ZERO, 1.0));
        assert!(v.trace_back(Point::new(1, 0)).is_none());
    }

    #[test]
    fn trace_back_detects_broken_chain() {
        let mut v = Visited::new();
        v.insert(SearchNode::reached(Point::new(1, 0), 1.0, 0.0, Point::new(9, 9)));
        assert!(v.trace_back(Point::new(1, 0)).is_none());
    }

    #[test]
    fn single_cell_path() {
        let mut v = Visited::new();
        v.insert(SearchNode::start(Point::new(4, 4), 0.0));
        let path = v.trace_back(Point::new(4, 4)).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.cost(), 0.0);
    }
}
