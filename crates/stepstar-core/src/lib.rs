//! **stepstar-core**: core types for step-wise grid search.
//!
//! This crate provides the foundational types shared by the *stepstar*
//! crates: geometry primitives, the open/blocked passability grid, and a
//! text layout parser for building grids from ASCII art.

pub mod geom;
pub mod grid;
pub mod layout;

pub use geom::{Point, Range};
pub use grid::{Cell, GRID_SIZE, Grid};
pub use layout::{LAYOUT_RUNES, Layout, LayoutError};
