//! Vessel definitions: the closed kind enumeration and placement geometry.

use crate::common::{Cell, Orientation};
use crate::config::NUM_VESSELS;

/// The five vessel kinds, each with a fixed length and single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VesselKind {
    Carrier,
    Battleship,
    Destroyer,
    Submarine,
    Minesweeper,
}

impl VesselKind {
    /// Every kind, in fleet order (longest first).
    pub const ALL: [VesselKind; NUM_VESSELS] = [
        VesselKind::Carrier,
        VesselKind::Battleship,
        VesselKind::Destroyer,
        VesselKind::Submarine,
        VesselKind::Minesweeper,
    ];

    /// Number of cells the vessel occupies.
    pub const fn length(self) -> usize {
        match self {
            VesselKind::Carrier => 5,
            VesselKind::Battleship => 4,
            VesselKind::Destroyer => 3,
            VesselKind::Submarine => 3,
            VesselKind::Minesweeper => 2,
        }
    }

    /// Single-letter code used by the placement text format.
    pub const fn code(self) -> char {
        match self {
            VesselKind::Carrier => 'a',
            VesselKind::Battleship => 'b',
            VesselKind::Destroyer => 'd',
            VesselKind::Submarine => 's',
            VesselKind::Minesweeper => 'm',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            VesselKind::Carrier => "aircraft carrier",
            VesselKind::Battleship => "battleship",
            VesselKind::Destroyer => "destroyer",
            VesselKind::Submarine => "submarine",
            VesselKind::Minesweeper => "minesweeper",
        }
    }

    /// Stable index for per-kind arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.code() == code)
    }
}

/// A vessel with immutable shape and mutable damage.
///
/// Construction is infallible: bounds and overlap are the board's concern,
/// which lets the targeting engine build out-of-bounds hypotheses and have
/// them rejected by `Board::can_place` like any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    kind: VesselKind,
    origin: Cell,
    orientation: Orientation,
    // bit i set = segment i (counting from the origin) has been hit
    damage: u8,
}

impl Vessel {
    pub fn new(kind: VesselKind, origin: Cell, orientation: Orientation) -> Self {
        Self {
            kind,
            origin,
            orientation,
            damage: 0,
        }
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by this vessel, in order from the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> {
        let Cell { x, y } = self.origin;
        let vertical = self.orientation.is_vertical();
        (0..self.kind.length()).map(move |i| {
            if vertical {
                Cell::new(x, y + i)
            } else {
                Cell::new(x + i, y)
            }
        })
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.occupied_cells().any(|c| c == cell)
    }

    /// Record damage at `cell`. No-op if the cell is not occupied by this
    /// vessel.
    pub fn mark(&mut self, cell: Cell) {
        if let Some(segment) = self.occupied_cells().position(|c| c == cell) {
            self.damage |= 1 << segment;
        }
    }

    /// Number of damaged segments.
    pub fn hits(&self) -> usize {
        self.damage.count_ones() as usize
    }

    pub fn is_sunk(&self) -> bool {
        self.hits() == self.kind.length()
    }

    /// True iff the occupied-cell sets of the two vessels intersect.
    pub fn intersects(&self, other: &Vessel) -> bool {
        self.occupied_cells().any(|c| other.contains(c))
    }
}
