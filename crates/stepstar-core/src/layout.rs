//! Grids built from ASCII art.
//!
//! A [`Layout`] parses a text map into a [`Grid`] plus optional start and
//! end markers:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | blocked cell |
//! | `S` | start (open) |
//! | `E` | end (open) |

use std::fmt;

use crate::geom::Point;
use crate::grid::{Cell, Grid};

/// Characters accepted by [`Layout::parse`].
pub const LAYOUT_RUNES: &str = ".#SE";

/// A grid and its markers, parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let lines: Vec<&str> = if s.is_empty() { Vec::new() } else { s.split('\n').collect() };
        let width = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != width) {
            return Err(LayoutError::InconsistentSize(s.to_string()));
        }

        let mut grid = Grid::new(width as i32, lines.len() as i32);
        let mut start = None;
        let mut end = None;
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => {
                        grid.set(pos, Cell::Blocked);
                    }
                    'S' => place_marker(&mut start, ch, pos)?,
                    'E' => place_marker(&mut end, ch, pos)?,
                    _ => {
                        return Err(LayoutError::InvalidRune {
                            ch,
                            pos,
                            content: s.to_string(),
                        });
                    }
                }
            }
        }
        Ok(Self { grid, start, end })
    }

    /// The parsed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Position of the `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `E` marker, if any.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Split into grid and markers.
    pub fn into_parts(self) -> (Grid, Option<Point>, Option<Point>) {
        (self.grid, self.start, self.end)
    }
}

fn place_marker(slot: &mut Option<Point>, ch: char, pos: Point) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            ch,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside [`LAYOUT_RUNES`] was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// `S` or `E` appears more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{content}"
                )
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "layout marker {ch} appears twice, at {first} and {second}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
S..#
.#.#
...E";

    #[test]
    fn parse_grid_and_markers() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.grid().size(), Point::new(4, 3));
        assert_eq!(l.start(), Some(Point::new(0, 0)));
        assert_eq!(l.end(), Some(Point::new(3, 2)));
        assert_eq!(l.grid().count(Cell::Blocked), 3);
        assert!(l.grid().is_open(Point::new(3, 2)));
        assert!(l.grid().is_blocked(Point::new(1, 1)));
    }

    #[test]
    fn markers_are_optional() {
        let l = Layout::parse("..\n.#").unwrap();
        assert_eq!(l.start(), None);
        assert_eq!(l.end(), None);
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let (grid, start, end) = Layout::parse("  \n ").unwrap().into_parts();
        assert_eq!(grid.size(), Point::ZERO);
        assert!(start.is_none() && end.is_none());
    }

    #[test]
    fn inconsistent_size_rejected() {
        let err = Layout::parse("...\n..").unwrap_err();
        assert!(matches!(err, LayoutError::InconsistentSize(_)));
    }

    #[test]
    fn invalid_rune_reports_position() {
        let err = Layout::parse("..\n.x").unwrap_err();
        match err {
            LayoutError::InvalidRune { ch, pos, .. } => {
                assert_eq!(ch, 'x');
                assert_eq!(pos, Point::new(1, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_marker_rejected() {
        let err = Layout::parse("S.\n.S").unwrap_err();
        assert_eq!(
            err,
            LayoutError::DuplicateMarker {
                ch: 'S',
                first: Point::new(0, 0),
                second: Point::new(1, 1),
            }
        );
    }
}
