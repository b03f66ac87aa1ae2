use stepstar_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Used both as the step cost between adjacent cells (1 or √2) and as the
/// heuristic towards the goal.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_step_costs() {
        let o = Point::ZERO;
        assert_eq!(euclidean(o, Point::new(1, 0)), 1.0);
        assert_eq!(euclidean(o, Point::new(0, -1)), 1.0);
        assert_eq!(euclidean(o, Point::new(1, 1)), std::f64::consts::SQRT_2);
        assert_eq!(euclidean(Point::new(3, 4), o), 5.0);
    }

    #[test]
    fn chebyshev_distance() {
        assert_eq!(chebyshev(Point::new(0, 0), Point::new(3, -5)), 5);
        assert_eq!(chebyshev(Point::new(2, 2), Point::new(2, 2)), 0);
    }
}
