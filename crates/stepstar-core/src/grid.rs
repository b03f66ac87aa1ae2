//! A passability grid for search maps.
//!
//! [`Cell`] tags each position as open or blocked. [`Grid`] stores a
//! row-major field of cells with fixed dimensions chosen at construction.

use crate::geom::{Point, Range};

/// Default side length of a square [`Grid`].
pub const GRID_SIZE: i32 = 50;

/// Passability of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Walkable.
    #[default]
    Open,
    /// A wall; never entered by a path.
    Blocked,
}

impl Cell {
    /// Whether the cell can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the cell is a wall.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// A fixed-size 2D grid of [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::square(GRID_SIZE)
    }
}

impl Grid {
    /// Create a new grid with every cell open.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![Cell::Open; (width * height) as usize],
            width,
            height,
        }
    }

    /// Create a new `size × size` grid with every cell open.
    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    /// Returns the bounding range `[0, 0)-(width, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the grid contains the given point.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is on the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Whether `p` is on the grid and blocked.
    ///
    /// Off-grid points are not blocked; callers that need to reject them
    /// check [`contains`](Self::contains) first.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_blocked)
    }

    /// Set the cell at a point, returning the previous value.
    ///
    /// Does nothing and returns `None` if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        let idx = self.index(p);
        Some(std::mem::replace(&mut self.cells[idx], cell))
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cell) {
        for p in self.bounds().iter() {
            let idx = self.index(p);
            self.cells[idx] = f(p);
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.count(Cell::Open), 50);
    }

    #[test]
    fn test_default_is_square() {
        let g = Grid::default();
        assert_eq!(g.size(), Point::new(GRID_SIZE, GRID_SIZE));
    }

    #[test]
    fn test_set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        assert_eq!(g.set(p, Cell::Blocked), Some(Cell::Open));
        assert_eq!(g.at(p), Some(Cell::Blocked));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::Open));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.set(Point::new(-1, 0), Cell::Blocked), None);
    }

    #[test]
    fn test_off_grid_is_neither_open_nor_blocked() {
        let g = Grid::new(3, 3);
        let p = Point::new(3, 0);
        assert!(!g.is_open(p));
        assert!(!g.is_blocked(p));
    }

    #[test]
    fn test_fill_and_count() {
        let mut g = Grid::new(5, 5);
        g.fill(Cell::Blocked);
        assert_eq!(g.count(Cell::Blocked), 25);
        g.set(Point::new(0, 0), Cell::Open);
        assert_eq!(g.count(Cell::Blocked), 24);
        assert_eq!(g.count(Cell::Open), 1);
    }

    #[test]
    fn test_fill_fn_and_iter() {
        let mut g = Grid::new(3, 2);
        g.fill_fn(|p| if p.x == 1 { Cell::Blocked } else { Cell::Open });
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), Cell::Blocked));
        assert_eq!(items[3], (Point::new(0, 1), Cell::Open));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(2, 1), Cell::Blocked);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(-3, 7);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), p);
    }
}
