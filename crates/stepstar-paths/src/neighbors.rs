use stepstar_core::{Grid, Point};

use crate::distance::chebyshev;

/// Which diagonal moves a search may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagonalRule {
    /// All eight directions are legal.
    #[default]
    Allowed,
    /// Diagonal moves are legal unless both orthogonal cells flanking the
    /// move are blocked (no squeezing between two wall corners).
    NoCornerCutting,
    /// Only the four orthogonal directions are legal.
    Never,
}

impl DiagonalRule {
    /// Map an "allow diagonal" toggle onto a rule: `true` allows every
    /// diagonal, `false` forbids only corner-cutting ones.
    #[inline]
    pub const fn from_allow_diagonal(allow: bool) -> Self {
        if allow {
            Self::Allowed
        } else {
            Self::NoCornerCutting
        }
    }
}

/// Whether a single move from `from` to the adjacent `to` is legal.
///
/// `to` must be on the grid, open, and at Chebyshev distance 1 from `from`.
/// Diagonal moves are further filtered by `rule`.
pub fn is_legal_move(grid: &Grid, from: Point, to: Point, rule: DiagonalRule) -> bool {
    if chebyshev(from, to) != 1 || !grid.is_open(to) {
        return false;
    }
    let diagonal = from.x != to.x && from.y != to.y;
    if !diagonal {
        return true;
    }
    match rule {
        DiagonalRule::Allowed => true,
        DiagonalRule::Never => false,
        DiagonalRule::NoCornerCutting => {
            let vertical = Point::new(from.x, to.y);
            let horizontal = Point::new(to.x, from.y);
            !(grid.is_blocked(vertical) && grid.is_blocked(horizontal))
        }
    }
}

/// Cached neighbour computation helper.
///
/// Enumerates the legal successors of a grid point in a fixed order
/// (column by column, `dx` outer and `dy` inner).
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the neighbours of `p` reachable in one legal move under
    /// `rule`, keeping only those for which `keep` returns `true`.
    pub fn legal(
        &mut self,
        grid: &Grid,
        p: Point,
        rule: DiagonalRule,
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        self.buf.clear();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if is_legal_move(grid, p, n, rule) && keep(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepstar_core::Layout;

    fn legal(grid: &Grid, p: Point, rule: DiagonalRule) -> Vec<Point> {
        Neighbors::new().legal(grid, p, rule, |_| true).to_vec()
    }

    #[test]
    fn open_interior_has_eight_neighbours() {
        let g = Grid::new(3, 3);
        assert_eq!(legal(&g, Point::new(1, 1), DiagonalRule::Allowed).len(), 8);
        assert_eq!(legal(&g, Point::new(1, 1), DiagonalRule::NoCornerCutting).len(), 8);
        assert_eq!(legal(&g, Point::new(1, 1), DiagonalRule::Never).len(), 4);
    }

    #[test]
    fn corner_respects_bounds() {
        let g = Grid::new(3, 3);
        let n = legal(&g, Point::ZERO, DiagonalRule::Allowed);
        assert_eq!(n, vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]);
    }

    #[test]
    fn blocked_cells_are_skipped() {
        let g = Layout::parse("...\n.#.\n...").unwrap().into_parts().0;
        let n = legal(&g, Point::ZERO, DiagonalRule::Allowed);
        assert_eq!(n, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn corner_cutting_rejected_only_between_two_walls() {
        // (0,1) and (1,0) blocked: (0,0) -> (1,1) squeezes between them.
        let g = Layout::parse(".#.\n#..\n...").unwrap().into_parts().0;
        let from = Point::ZERO;
        let to = Point::new(1, 1);
        assert!(!is_legal_move(&g, from, to, DiagonalRule::NoCornerCutting));
        assert!(is_legal_move(&g, from, to, DiagonalRule::Allowed));
        assert!(legal(&g, from, DiagonalRule::NoCornerCutting).is_empty());

        // A single flanking wall does not forbid the move.
        let g = Layout::parse(".#.\n...\n...").unwrap().into_parts().0;
        assert!(is_legal_move(&g, from, to, DiagonalRule::NoCornerCutting));
    }

    #[test]
    fn corner_rule_checks_every_direction() {
        // (1,0) -> (0,1): flanks are (1,1) blocked and (0,0) open.
        let g = Layout::parse("...\n.#.\n...").unwrap().into_parts().0;
        let c = Point::new(1, 0);
        assert!(is_legal_move(&g, c, Point::new(0, 1), DiagonalRule::NoCornerCutting));

        let centre = Point::new(1, 1);
        let g = Layout::parse(".#.\n#.#\n.#.").unwrap().into_parts().0;
        for to in [Point::new(0, 0), Point::new(2, 0), Point::new(0, 2), Point::new(2, 2)] {
            assert!(!is_legal_move(&g, centre, to, DiagonalRule::NoCornerCutting));
            assert!(is_legal_move(&g, centre, to, DiagonalRule::Allowed));
        }
    }

    #[test]
    fn non_adjacent_moves_are_illegal() {
        let g = Grid::new(4, 4);
        assert!(!is_legal_move(&g, Point::ZERO, Point::ZERO, DiagonalRule::Allowed));
        assert!(!is_legal_move(&g, Point::ZERO, Point::new(2, 0), DiagonalRule::Allowed));
    }
}
