//! Headless editing and run control for stepstar searches.
//!
//! A [`Board`] holds a wall grid and the start/end markers. While
//! [`Editing`](BoardPhase::Editing), tools paint walls and move markers.
//! [`Board::start_run`] snapshots the grid into a
//! [`SearchState`](stepstar_paths::SearchState), and each [`Board::tick`]
//! advances it by the configured [`Playback`] budget. A renderer reads the
//! frontier, visited set and path back through [`Board::search`] and
//! [`Board::path`].
//!
//! ```
//! use stepstar_board::{Board, BoardConfig, Playback, Tick};
//! use stepstar_core::Point;
//!
//! let mut board = Board::new(BoardConfig {
//!     width: 8,
//!     height: 8,
//!     playback: Playback::Instant,
//!     ..BoardConfig::default()
//! });
//! board.apply_tool(Point::new(3, 3)).unwrap();
//! board.start_run().unwrap();
//! assert!(matches!(board.tick().unwrap(), Tick::PathFound { .. }));
//! assert!(board.path().is_some());
//! ```

mod board;
mod config;
mod error;

pub use board::{Board, BoardPhase, Notice, Tick, Tool};
pub use config::{BoardConfig, Playback};
pub use error::BoardError;
