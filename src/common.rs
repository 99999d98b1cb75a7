//! Common types for the combat core: cells, orientations, shot outcomes
//! and error taxonomy.

use crate::config::BOARD_SIZE;

/// A grid coordinate. `x` runs left-to-right, `y` top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Linear index into row-major per-cell arrays.
    /// Only meaningful for in-bounds cells.
    pub(crate) const fn index(self) -> usize {
        self.y * BOARD_SIZE + self.x
    }

    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Result of processing one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Miss,
    Hit,
    Sunk,
}

/// Recorded state of a single grid cell.
///
/// The numeric codes are part of the persisted heat-map encoding: a fired
/// cell is seeded with the negative of its state code so it can never win
/// an argmax against a neutral cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Null,
    Miss,
    Hit,
    Sunk,
}

impl CellState {
    /// Numeric code used by the heat-map sentinel encoding.
    pub const fn code(self) -> i32 {
        match self {
            CellState::Null => 0,
            CellState::Miss => 1,
            CellState::Hit => 2,
            CellState::Sunk => 3,
        }
    }
}

impl From<Outcome> for CellState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Miss => CellState::Miss,
            Outcome::Hit => CellState::Hit,
            Outcome::Sunk => CellState::Sunk,
        }
    }
}

/// Errors from fleet self-placement.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FleetError {
    /// Random retries and the exhaustive sweep both failed to fit a vessel.
    #[error("unable to place the full fleet: no legal position for {kind}")]
    PlacementExhausted { kind: &'static str },
}

/// Errors from reading or writing persisted formats.
///
/// Malformed *lines* in the placement text format are skippable noise and
/// never reach this type; malformed *tokens* on a well-formed line do.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid integer {token:?}")]
    BadInteger { line: usize, token: String },
    #[error("line {line}: unknown vessel code {code:?}")]
    UnknownKind { line: usize, code: String },
    #[error("line {line}: expected {expected} values, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("line {line}: placement of vessel '{code}' rejected (out of bounds or overlapping)")]
    PlacementRejected { line: usize, code: char },
}
