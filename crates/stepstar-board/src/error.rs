use std::fmt;

use stepstar_paths::SearchError;

use crate::board::BoardPhase;

/// Errors reported by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid and markers cannot be edited outside [`BoardPhase::Editing`].
    Locked(BoardPhase),
    /// A run can only start from [`BoardPhase::Editing`].
    RunInProgress(BoardPhase),
    /// `tick` requires [`BoardPhase::Searching`].
    NotSearching(BoardPhase),
    /// The search engine rejected the run.
    Search(SearchError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked(phase) => write!(f, "board is locked while {phase:?}"),
            Self::RunInProgress(phase) => write!(f, "cannot start a run while {phase:?}"),
            Self::NotSearching(phase) => write!(f, "no search to advance ({phase:?})"),
            Self::Search(e) => write!(f, "search failed: {e}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for BoardError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
