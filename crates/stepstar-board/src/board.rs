//! The editable board: walls, markers, and the run lifecycle.

use log::{debug, trace};
use stepstar_core::{Cell, Grid, Layout, Point};
use stepstar_paths::{DiagonalRule, Outcome, Path, SearchState, StepResult, begin_search_with};

use crate::config::{BoardConfig, Playback};
use crate::error::BoardError;

/// What [`Board::apply_tool`] does to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tool {
    /// Turn an open cell into a wall.
    #[default]
    Brush,
    /// Turn a wall into an open cell.
    Eraser,
    /// Move the start marker.
    Start,
    /// Move the end marker.
    End,
}

/// Where the board is in its edit/run cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardPhase {
    /// Walls and markers may be edited.
    Editing,
    /// A search is in progress; editing is locked.
    Searching,
    /// A path was found and is on display; editing stays locked until
    /// [`Board::reset`] or [`Board::clear`].
    Finished,
}

/// A one-shot message for the user, taken with [`Board::take_notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The last run found no path.
    NoPath,
}

/// Result of one [`Board::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The step budget ran out; the search goes on.
    Searching { steps: usize },
    /// The goal was reached; the board is now [`BoardPhase::Finished`].
    PathFound { steps: usize },
    /// The goal is unreachable; the board was reset to editing.
    NoPath { steps: usize },
}

/// An editable grid with start/end markers that drives searches.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    start: Point,
    end: Point,
    tool: Tool,
    phase: BoardPhase,
    search: Option<SearchState>,
    path: Option<Path>,
    notice: Option<Notice>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Create an all-open board with the start in the top-left corner and
    /// the end in the bottom-right one.
    pub fn new(config: BoardConfig) -> Self {
        let config = BoardConfig {
            width: config.width.max(1),
            height: config.height.max(1),
            ..config
        };
        let grid = Grid::new(config.width, config.height);
        Self {
            start: Point::ZERO,
            end: corner(&grid),
            grid,
            config,
            tool: Tool::default(),
            phase: BoardPhase::Editing,
            search: None,
            path: None,
            notice: None,
        }
    }

    /// Create a board from a parsed layout.
    ///
    /// Missing markers default to the corners; the marker cells are opened.
    /// The layout's size overrides `config.width` and `config.height`.
    pub fn from_layout(layout: Layout, config: BoardConfig) -> Self {
        let (mut grid, start, end) = layout.into_parts();
        if grid.bounds().is_empty() {
            return Self::new(config);
        }
        let start = start.unwrap_or(Point::ZERO);
        let end = end.unwrap_or_else(|| corner(&grid));
        grid.set(start, Cell::Open);
        grid.set(end, Cell::Open);
        Self {
            config: BoardConfig {
                width: grid.width(),
                height: grid.height(),
                ..config
            },
            grid,
            start,
            end,
            tool: Tool::default(),
            phase: BoardPhase::Editing,
            search: None,
            path: None,
            notice: None,
        }
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Apply the active tool at `p`.
    ///
    /// Off-grid positions and the two marker cells are ignored. Returns
    /// whether the board changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Locked`] unless the board is
    /// [`BoardPhase::Editing`].
    pub fn apply_tool(&mut self, p: Point) -> Result<bool, BoardError> {
        self.ensure_editing()?;
        if !self.grid.contains(p) || p == self.start || p == self.end {
            return Ok(false);
        }
        let changed = match self.tool {
            Tool::Start => {
                self.start = p;
                self.grid.set(p, Cell::Open);
                true
            }
            Tool::End => {
                self.end = p;
                self.grid.set(p, Cell::Open);
                true
            }
            Tool::Brush => self.grid.set(p, Cell::Blocked) == Some(Cell::Open),
            Tool::Eraser => self.grid.set(p, Cell::Open) == Some(Cell::Blocked),
        };
        if changed {
            trace!("{:?} applied at {p}", self.tool);
        }
        Ok(changed)
    }

    /// Select the tool used by [`apply_tool`](Self::apply_tool).
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Change the diagonal rule. Takes effect at the next run start.
    pub fn set_diagonal(&mut self, rule: DiagonalRule) {
        self.config.diagonal = rule;
    }

    /// Change the playback mode. Takes effect at the next tick.
    pub fn set_playback(&mut self, playback: Playback) {
        self.config.playback = playback;
    }

    fn ensure_editing(&self) -> Result<(), BoardError> {
        if self.phase != BoardPhase::Editing {
            return Err(BoardError::Locked(self.phase));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Runs
    // -----------------------------------------------------------------------

    /// Start a search from the start marker to the end marker.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RunInProgress`] unless the board is
    /// [`BoardPhase::Editing`], or [`BoardError::Search`] if the engine
    /// rejects the markers.
    pub fn start_run(&mut self) -> Result<(), BoardError> {
        if self.phase != BoardPhase::Editing {
            return Err(BoardError::RunInProgress(self.phase));
        }
        let search = begin_search_with(&self.grid, self.start, self.end, self.config.diagonal)?;
        self.search = Some(search);
        self.path = None;
        self.notice = None;
        self.phase = BoardPhase::Searching;
        debug!("board run started ({:?})", self.config.playback);
        Ok(())
    }

    /// Advance the running search by one tick of the configured playback.
    ///
    /// On a found path the board moves to [`BoardPhase::Finished`]. When no
    /// path exists a [`Notice::NoPath`] is recorded and the board resets.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotSearching`] unless the board is
    /// [`BoardPhase::Searching`].
    pub fn tick(&mut self) -> Result<Tick, BoardError> {
        let phase = self.phase;
        let search = match (phase, self.search.as_mut()) {
            (BoardPhase::Searching, Some(search)) => search,
            _ => return Err(BoardError::NotSearching(phase)),
        };

        let budget = self.config.playback.budget();
        let mut steps = 0;
        let finished = loop {
            if budget.is_some_and(|b| steps >= b) {
                break None;
            }
            let result = search.step()?;
            steps += 1;
            match result {
                StepResult::Continue => {}
                StepResult::PathFound(path) => break Some(Outcome::PathFound(path)),
                StepResult::NoPathExists => break Some(Outcome::NoPathExists),
            }
        };

        match finished {
            None => Ok(Tick::Searching { steps }),
            Some(Outcome::PathFound(path)) => {
                debug!("board run finished: {} cells", path.len());
                self.path = Some(path);
                self.phase = BoardPhase::Finished;
                Ok(Tick::PathFound { steps })
            }
            Some(Outcome::NoPathExists) => {
                debug!("board run finished: no path");
                self.reset();
                self.notice = Some(Notice::NoPath);
                Ok(Tick::NoPath { steps })
            }
        }
    }

    /// Drop the current run and its path, keeping walls and markers.
    pub fn reset(&mut self) {
        self.search = None;
        self.path = None;
        self.phase = BoardPhase::Editing;
    }

    /// Reset, open every cell and move the markers back to the corners.
    pub fn clear(&mut self) {
        self.reset();
        self.notice = None;
        self.grid.fill(Cell::Open);
        self.start = Point::ZERO;
        self.end = corner(&self.grid);
        debug!("board cleared");
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The wall grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start marker.
    pub fn start(&self) -> Point {
        self.start
    }

    /// End marker.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Current phase.
    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    /// Current configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The running or finished search, for frontier/visited display.
    pub fn search(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    /// The path found by the last run, while it is on display.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Take the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

fn corner(grid: &Grid) -> Point {
    Point::new(grid.width() - 1, grid.height() - 1)
}
