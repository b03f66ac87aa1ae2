use stepstar_core::Point;

/// A reconstructed shortest path.
///
/// Coordinates are stored from the goal back to the start, the order in
/// which parent links are followed. Use [`start_to_end`](Self::start_to_end)
/// or [`iter_from_start`](Self::iter_from_start) for walking order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    coords: Vec<Point>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(coords: Vec<Point>, cost: f64) -> Self {
        Self { coords, cost }
    }

    /// Number of coordinates, including both endpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the path has no coordinates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Total movement cost (the `g` of the goal node).
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Coordinates from the goal back to the start.
    #[inline]
    pub fn end_to_start(&self) -> &[Point] {
        &self.coords
    }

    /// Coordinates from the start to the goal.
    pub fn start_to_end(&self) -> Vec<Point> {
        self.iter_from_start().collect()
    }

    /// Iterate from the start to the goal.
    pub fn iter_from_start(&self) -> impl DoubleEndedIterator<Item = Point> + '_ {
        self.coords.iter().rev().copied()
    }

    /// The first coordinate of the walk.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.coords.last().copied()
    }

    /// The goal coordinate.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.coords.first().copied()
    }

    /// Whether the path passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.coords.contains(&p)
    }
}
