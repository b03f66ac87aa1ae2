//! Resumable A* search: seeding, single-step expansion and run-to-completion.

use log::{debug, trace};
use stepstar_core::{Cell, Grid, Point};

use crate::distance::euclidean;
use crate::error::{EndpointFault, SearchError};
use crate::frontier::{Admission, Frontier};
use crate::neighbors::{DiagonalRule, Neighbors};
use crate::node::SearchNode;
use crate::path::Path;
use crate::visited::Visited;

/// Lifecycle of a [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Validated but not yet seeded.
    Idle,
    /// Seeded; `step` may be called.
    Running,
    /// Terminal: the goal was finalized.
    PathFound,
    /// Terminal: the frontier ran dry before reaching the goal.
    NoPathExists,
}

impl Phase {
    /// Whether no further steps are possible.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::PathFound | Self::NoPathExists)
    }
}

/// Result of a single [`SearchState::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// One node was expanded; the search goes on.
    Continue,
    /// The goal was reached.
    PathFound(Path),
    /// The goal is unreachable.
    NoPathExists,
}

/// Terminal result of [`SearchState::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The goal was reached.
    PathFound(Path),
    /// The goal is unreachable.
    NoPathExists,
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(path) => Some(path),
            Self::NoPathExists => None,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }
}

/// An owned view of a search between steps, for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub phase: Phase,
    /// Number of nodes expanded so far.
    pub expansions: usize,
    /// The node finalized by the latest step.
    pub current: Option<SearchNode>,
    /// Open set, in row-major coordinate order.
    pub frontier: Vec<SearchNode>,
    /// Closed set, in expansion order.
    pub visited: Vec<SearchNode>,
}

/// Start a search from `start` to `end`.
///
/// `allow_diagonal == true` permits every diagonal move; `false` forbids a
/// diagonal move only when both orthogonal cells flanking it are blocked.
/// See [`begin_search_with`] for orthogonal-only movement.
///
/// # Errors
///
/// Returns [`SearchError::InvalidStart`] or [`SearchError::InvalidEnd`] if an
/// endpoint is off-grid or blocked.
pub fn begin_search(
    grid: &Grid,
    start: Point,
    end: Point,
    allow_diagonal: bool,
) -> Result<SearchState, SearchError> {
    begin_search_with(grid, start, end, DiagonalRule::from_allow_diagonal(allow_diagonal))
}

/// Start a search with an explicit [`DiagonalRule`].
///
/// # Errors
///
/// Same as [`begin_search`].
pub fn begin_search_with(
    grid: &Grid,
    start: Point,
    end: Point,
    rule: DiagonalRule,
) -> Result<SearchState, SearchError> {
    let mut state = SearchState::new(grid, start, end, rule)?;
    state.begin();
    Ok(state)
}

fn check_endpoint(grid: &Grid, pos: Point) -> Result<(), EndpointFault> {
    match grid.at(pos) {
        None => Err(EndpointFault::OutOfBounds),
        Some(Cell::Blocked) => Err(EndpointFault::Blocked),
        Some(Cell::Open) => Ok(()),
    }
}

/// All state of one A* run.
///
/// The grid is copied at construction, so edits the caller makes to its own
/// grid never leak into a run in progress.
#[derive(Debug, Clone)]
pub struct SearchState {
    grid: Grid,
    start: Point,
    end: Point,
    rule: DiagonalRule,
    frontier: Frontier,
    visited: Visited,
    phase: Phase,
    expansions: usize,
    nbuf: Neighbors,
}

impl SearchState {
    /// Validate the endpoints and create an [`Idle`](Phase::Idle) state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidStart`] or [`SearchError::InvalidEnd`]
    /// if an endpoint is off-grid or blocked.
    pub fn new(grid: &Grid, start: Point, end: Point, rule: DiagonalRule) -> Result<Self, SearchError> {
        check_endpoint(grid, start).map_err(|fault| SearchError::InvalidStart { pos: start, fault })?;
        check_endpoint(grid, end).map_err(|fault| SearchError::InvalidEnd { pos: end, fault })?;
        Ok(Self {
            grid: grid.clone(),
            start,
            end,
            rule,
            frontier: Frontier::new(),
            visited: Visited::new(),
            phase: Phase::Idle,
            expansions: 0,
            nbuf: Neighbors::new(),
        })
    }

    /// Clear both sets, seed the frontier with the start node and enter
    /// [`Running`](Phase::Running).
    ///
    /// Calling this again restarts the run from scratch.
    pub fn begin(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.expansions = 0;
        self.frontier
            .offer(SearchNode::start(self.start, euclidean(self.start, self.end)));
        self.phase = Phase::Running;
        debug!(
            "search started: {} -> {} on {}x{} grid ({:?})",
            self.start,
            self.end,
            self.grid.width(),
            self.grid.height(),
            self.rule
        );
    }

    /// Expand the best frontier node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NotStarted`] before [`begin`](Self::begin) and
    /// [`SearchError::AlreadyTerminated`] after a terminal result.
    pub fn step(&mut self) -> Result<StepResult, SearchError> {
        match self.phase {
            Phase::Running => {}
            Phase::Idle => return Err(SearchError::NotStarted),
            phase => return Err(SearchError::AlreadyTerminated(phase)),
        }

        let Some(current) = self.frontier.pop() else {
            self.phase = Phase::NoPathExists;
            debug!(
                "search exhausted after {} expansions: no path {} -> {}",
                self.expansions, self.start, self.end
            );
            return Ok(StepResult::NoPathExists);
        };
        let cp = current.coord();
        self.visited.insert(current);
        self.expansions += 1;
        trace!(
            "expand {cp} g={:.3} h={:.3} f={:.3}",
            current.g(),
            current.h(),
            current.f()
        );

        if cp == self.end {
            let path = self
                .visited
                .trace_back(self.end)
                .ok_or(SearchError::BrokenParentChain { at: self.end })?;
            self.phase = Phase::PathFound;
            debug!(
                "path found after {} expansions: {} cells, cost {:.3}",
                self.expansions,
                path.len(),
                path.cost()
            );
            return Ok(StepResult::PathFound(path));
        }

        let visited = &self.visited;
        let successors = self
            .nbuf
            .legal(&self.grid, cp, self.rule, |p| !visited.contains(p));
        for &np in successors {
            let g = current.g() + euclidean(cp, np);
            let h = euclidean(np, self.end);
            let admission = self.frontier.offer(SearchNode::reached(np, g, h, cp));
            if admission != Admission::Rejected {
                trace!("  {admission:?} {np} g={g:.3} h={h:.3}");
            }
        }
        Ok(StepResult::Continue)
    }

    /// Step until a terminal result.
    ///
    /// Equivalent to calling [`step`](Self::step) in a loop.
    ///
    /// # Errors
    ///
    /// Same as [`step`](Self::step).
    pub fn run(&mut self) -> Result<Outcome, SearchError> {
        loop {
            match self.step()? {
                StepResult::Continue => {}
                StepResult::PathFound(path) => return Ok(Outcome::PathFound(path)),
                StepResult::NoPathExists => return Ok(Outcome::NoPathExists),
            }
        }
    }

    /// The found path, once the phase is [`PathFound`](Phase::PathFound).
    pub fn path(&self) -> Option<Path> {
        if self.phase != Phase::PathFound {
            return None;
        }
        self.visited.trace_back(self.end)
    }

    /// Current lifecycle phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether no further steps are possible.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The grid snapshot this run searches.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal coordinate.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Diagonal movement rule of this run.
    #[inline]
    pub fn rule(&self) -> DiagonalRule {
        self.rule
    }

    /// The open set.
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// The closed set.
    #[inline]
    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// The node finalized by the latest step.
    pub fn current(&self) -> Option<&SearchNode> {
        self.visited.last()
    }

    /// Copy out the open and closed sets for display.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            expansions: self.expansions,
            current: self.current().copied(),
            frontier: self.frontier.iter().copied().collect(),
            visited: self.visited.iter().copied().collect(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let grid = Grid::square(4);
        let mut state = begin_search(&grid, Point::ZERO, Point::new(3, 2), false).unwrap();
        state.step().unwrap();
        state.step().unwrap();
        let snap = state.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn path_round_trip() {
        let grid = Grid::square(3);
        let mut state = begin_search(&grid, Point::ZERO, Point::new(2, 1), true).unwrap();
        let path = state.run().unwrap().path().cloned().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
