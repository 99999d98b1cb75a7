//! Per-player grid: placement validation, shot resolution and history.

use std::collections::BTreeMap;

use crate::common::{Cell, CellState, Outcome};
use crate::config::{BOARD_SIZE, CELL_COUNT, NUM_VESSELS};
use crate::vessel::{Vessel, VesselKind};

/// A square grid holding at most one vessel per kind, plus the shot record.
///
/// A board moves one way through two phases: *setup* (place / remove /
/// re-place vessels) and *finalized* (process shots). `finalize` performs
/// the transition and builds the cell-to-vessel index; `reset` returns a
/// board to an empty setup state for reuse.
#[derive(Debug)]
pub struct Board {
    vessels: [Option<Vessel>; NUM_VESSELS],
    cell_index: [Option<VesselKind>; CELL_COUNT],
    states: [CellState; CELL_COUNT],
    // cells in the order they were first fired upon
    fire_order: Vec<Cell>,
    finalized: bool,
}

impl Board {
    /// Create an empty board in setup state.
    pub fn new() -> Self {
        Self {
            vessels: [None; NUM_VESSELS],
            cell_index: [None; CELL_COUNT],
            states: [CellState::Null; CELL_COUNT],
            fire_order: Vec::new(),
            finalized: false,
        }
    }

    /// Clear all state back to an empty setup board.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether `candidate` may be placed.
    ///
    /// Every occupied cell must be in bounds. A differently-kinded vessel
    /// blocks the candidate while the board is in setup, or once finalized
    /// while that vessel is still afloat; a finalized, sunk vessel never
    /// blocks, so a caller can reason over the visible board without the
    /// revealed wreck getting in the way. Re-placing the same kind is
    /// always permitted.
    pub fn can_place(&self, candidate: &Vessel) -> bool {
        if !candidate.occupied_cells().all(Cell::in_bounds) {
            return false;
        }
        for other in self.vessels.iter().flatten() {
            if other.kind() == candidate.kind() {
                continue;
            }
            if self.finalized && other.is_sunk() {
                continue;
            }
            if candidate.intersects(other) {
                return false;
            }
        }
        true
    }

    /// Place `vessel`, replacing any prior placement of the same kind.
    /// Returns `false` and leaves the board untouched if the placement is
    /// rejected.
    pub fn place(&mut self, vessel: Vessel) -> bool {
        if !self.can_place(&vessel) {
            return false;
        }
        self.vessels[vessel.kind().index()] = Some(vessel);
        true
    }

    /// Remove the vessel of the given kind. Returns whether it was present.
    pub fn remove(&mut self, kind: VesselKind) -> bool {
        self.vessels[kind.index()].take().is_some()
    }

    /// Number of vessels currently placed.
    pub fn vessel_count(&self) -> usize {
        self.vessels.iter().flatten().count()
    }

    /// True iff all five kinds are placed.
    pub fn fleet_complete(&self) -> bool {
        self.vessel_count() == NUM_VESSELS
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Build the cell index and transition to the shot-processing phase.
    ///
    /// Idempotent: calling again rebuilds the index from the current
    /// vessels. Callers must not mutate placements after finalizing during
    /// live play.
    ///
    /// # Panics
    ///
    /// Panics if fewer than five vessels are placed; finalizing an
    /// incomplete fleet is a contract violation by the orchestrator.
    pub fn finalize(&mut self) {
        assert!(
            self.fleet_complete(),
            "finalize requires a full fleet ({} of {} vessels placed)",
            self.vessel_count(),
            NUM_VESSELS
        );
        self.cell_index = [None; CELL_COUNT];
        for vessel in self.vessels.iter().flatten() {
            for cell in vessel.occupied_cells() {
                self.cell_index[cell.index()] = Some(vessel.kind());
            }
        }
        self.finalized = true;
    }

    /// Resolve a shot at `cell`, recording the outcome.
    ///
    /// Finalizes the board first if needed. A shot on open water is a
    /// `Miss`; a shot on a vessel marks damage and reports `Hit`, or `Sunk`
    /// once the last segment goes, at which point every cell of the wreck
    /// is upgraded to `Sunk` in the history. Out-of-bounds cells miss
    /// without being recorded.
    ///
    /// The board does not reject re-firing an already-shot cell; excluding
    /// fired cells is the caller's responsibility.
    pub fn process_shot(&mut self, cell: Cell) -> Outcome {
        if !self.finalized {
            self.finalize();
        }
        if !cell.in_bounds() {
            return Outcome::Miss;
        }
        let outcome = match self.cell_index[cell.index()] {
            Some(kind) => match self.vessels[kind.index()].as_mut() {
                Some(vessel) => {
                    vessel.mark(cell);
                    if vessel.is_sunk() {
                        let wreck: Vec<Cell> = vessel.occupied_cells().collect();
                        for c in wreck {
                            self.states[c.index()] = CellState::Sunk;
                        }
                        Outcome::Sunk
                    } else {
                        Outcome::Hit
                    }
                }
                None => Outcome::Miss,
            },
            None => Outcome::Miss,
        };
        if self.states[cell.index()] == CellState::Null {
            self.fire_order.push(cell);
        }
        self.states[cell.index()] = outcome.into();
        outcome
    }

    /// True iff every placed vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        self.vessels.iter().flatten().all(Vessel::is_sunk)
    }

    /// Recorded state of a cell; `Null` if never fired upon (or out of
    /// bounds).
    pub fn get_state(&self, cell: Cell) -> CellState {
        if !cell.in_bounds() {
            return CellState::Null;
        }
        self.states[cell.index()]
    }

    /// All in-bounds cells not yet fired upon, x-major.
    pub fn unshot_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|x| (0..BOARD_SIZE).map(move |y| Cell::new(x, y)))
            .filter(|&c| self.get_state(c) == CellState::Null)
    }

    /// The vessel occupying `cell`, if any. Only meaningful once finalized.
    pub fn get_vessel_at(&self, cell: Cell) -> Option<&Vessel> {
        if !cell.in_bounds() {
            return None;
        }
        self.cell_index[cell.index()]
            .and_then(|kind| self.vessels[kind.index()].as_ref())
    }

    /// The vessel occupying `cell`, but only if it has been sunk.
    pub fn get_sunk_vessel_at(&self, cell: Cell) -> Option<&Vessel> {
        self.get_vessel_at(cell).filter(|v| v.is_sunk())
    }

    /// Placed vessels, in kind order.
    pub fn vessels(&self) -> impl Iterator<Item = &Vessel> {
        self.vessels.iter().flatten()
    }

    /// Placement summary for persistence: kind to (x, y, vertical).
    pub fn get_ship_placement(&self) -> BTreeMap<VesselKind, (usize, usize, bool)> {
        self.vessels()
            .map(|v| {
                let origin = v.origin();
                (v.kind(), (origin.x, origin.y, v.orientation().is_vertical()))
            })
            .collect()
    }

    /// Cells fired upon, in the order they were first shot.
    pub fn get_shots(&self) -> &[Cell] {
        &self.fire_order
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
