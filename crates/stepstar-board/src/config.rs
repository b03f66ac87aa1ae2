//! Board configuration.

use stepstar_core::GRID_SIZE;
use stepstar_paths::DiagonalRule;

/// How a [`Board`](crate::Board) advances a search on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Playback {
    /// Run to completion on the first tick.
    Instant,
    /// Expand at most `steps_per_tick` nodes per tick (at least one).
    Stepped { steps_per_tick: usize },
}

impl Default for Playback {
    fn default() -> Self {
        Self::Stepped { steps_per_tick: 1 }
    }
}

impl Playback {
    /// Step budget for one tick; `None` means unbounded.
    pub(crate) fn budget(self) -> Option<usize> {
        match self {
            Self::Instant => None,
            Self::Stepped { steps_per_tick } => Some(steps_per_tick.max(1)),
        }
    }
}

/// Configuration for creating a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Diagonal rule captured by each run at start.
    pub diagonal: DiagonalRule,
    pub playback: Playback,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: GRID_SIZE,
            height: GRID_SIZE,
            diagonal: DiagonalRule::NoCornerCutting,
            playback: Playback::default(),
        }
    }
}
