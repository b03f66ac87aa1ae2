//! Typed search errors.
//!
//! `SearchError` only covers contract violations. An unreachable goal is a
//! normal outcome ([`crate::StepResult::NoPathExists`]), not an error.

use std::fmt;

use stepstar_core::Point;

use crate::search::Phase;

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFault {
    /// The coordinate lies outside the grid.
    OutOfBounds,
    /// The coordinate is a wall.
    Blocked,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

/// Contract violations reported by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The start coordinate is off-grid or blocked.
    InvalidStart { pos: Point, fault: EndpointFault },
    /// The end coordinate is off-grid or blocked.
    InvalidEnd { pos: Point, fault: EndpointFault },
    /// `step` was called on a state that has not been seeded.
    NotStarted,
    /// `step` was called after a terminal result.
    AlreadyTerminated(Phase),
    /// A finalized node's parent is missing from the closed set.
    BrokenParentChain { at: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart { pos, fault } => write!(f, "invalid start {pos}: {fault}"),
            Self::InvalidEnd { pos, fault } => write!(f, "invalid end {pos}: {fault}"),
            Self::NotStarted => f.write_str("search has not been started"),
            Self::AlreadyTerminated(phase) => {
                write!(f, "search already terminated ({phase:?})")
            }
            Self::BrokenParentChain { at } => {
                write!(f, "parent chain broken while tracing back from {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
