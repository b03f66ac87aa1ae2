//! Resumable A* search on passability grids.
//!
//! A search is an explicit [`SearchState`] value owned by the caller. It can
//! be advanced one expansion at a time with [`SearchState::step`] (for
//! animated display) or driven to the end with [`SearchState::run`]; both
//! produce identical results because `run` is nothing but a `step` loop.
//!
//! # Ordering
//!
//! The frontier always expands the node with the lowest `f = g + h`, then
//! the lowest `h` (closest to the goal), then the smallest coordinate in
//! row-major order. Step costs and the heuristic are both Euclidean
//! distances, so orthogonal moves cost 1 and diagonal moves √2.
//!
//! # Diagonal movement
//!
//! | [`DiagonalRule`] | Diagonal moves |
//! |---|---|
//! | `Allowed` | always legal |
//! | `NoCornerCutting` | illegal when both flanking orthogonal cells are blocked |
//! | `Never` | never legal |
//!
//! [`begin_search`] maps its `allow_diagonal` flag onto the first two.

mod distance;
mod error;
mod frontier;
mod neighbors;
mod node;
mod path;
mod search;
mod visited;

pub use distance::{chebyshev, euclidean};
pub use error::{EndpointFault, SearchError};
pub use frontier::{Admission, Frontier};
pub use neighbors::{DiagonalRule, Neighbors, is_legal_move};
pub use node::{Priority, SearchNode};
pub use path::Path;
pub use search::{
    Outcome, Phase, SearchState, Snapshot, StepResult, begin_search, begin_search_with,
};
pub use visited::Visited;
