use std::cmp::Ordering;

use stepstar_core::Point;

/// A search record for one grid coordinate.
///
/// `f` is always `g + h`: the fields are private and every constructor
/// derives `f` from the other two.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    coord: Point,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<Point>,
}

impl SearchNode {
    /// The start node of a run: zero cost so far, no parent.
    pub fn start(coord: Point, h: f64) -> Self {
        Self {
            coord,
            g: 0.0,
            h,
            f: h,
            parent: None,
        }
    }

    /// A node reached from `parent` with accumulated cost `g`.
    pub fn reached(coord: Point, g: f64, h: f64, parent: Point) -> Self {
        Self {
            coord,
            g,
            h,
            f: g + h,
            parent: Some(parent),
        }
    }

    /// The grid coordinate this node stands for.
    #[inline]
    pub fn coord(&self) -> Point {
        self.coord
    }

    /// Accumulated cost from the start.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Straight-line distance to the goal.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Coordinate this node was reached from; `None` for the start node.
    #[inline]
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }

    /// The ordering key used for frontier selection.
    #[inline]
    pub fn priority(&self) -> Priority {
        Priority {
            f: self.f,
            h: self.h,
            coord: self.coord,
        }
    }
}

/// Frontier ordering key: lowest `f`, then lowest `h`, then the smallest
/// coordinate in row-major order.
///
/// Smaller keys are expanded first. Floats compare with `total_cmp`, so the
/// ordering is total even in the presence of NaN.
#[derive(Debug, Clone, Copy)]
pub struct Priority {
    pub f: f64,
    pub h: f64,
    pub coord: Point,
}

impl Priority {
    /// Compare only the cost part of the key (`f`, then `h`).
    ///
    /// Replacing a frontier entry for the same coordinate requires the new
    /// key to be strictly smaller under this comparison.
    #[inline]
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.f.total_cmp(&other.f).then(self.h.total_cmp(&other.h))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_cost(other).then(self.coord.cmp(&other.coord))
    }
}
