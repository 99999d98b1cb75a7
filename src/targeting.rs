//! Probability-driven opponent: heat-map construction, shot selection and
//! stochastic self-placement.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::board::Board;
use crate::common::{Cell, CellState, FleetError, Orientation, Outcome, PersistError};
use crate::config::{BOARD_SIZE, CELL_COUNT, NUM_VESSELS};
use crate::persist;
use crate::vessel::{Vessel, VesselKind};

/// Random placement attempts per vessel before falling back to a
/// deterministic sweep. The sweep guarantees termination; the random phase
/// just keeps layouts varied.
const MAX_RANDOM_TRIES: usize = 128;

/// Bonus weight per already-hit cell covered by a hypothetical placement.
const HIT_BONUS: i32 = 5;

/// The computer opponent's targeting state.
///
/// `heat` holds, per cell, a tally over all still-consistent hypothetical
/// placements through that cell; fired cells carry the negative of their
/// outcome code so they can never win the argmax. The engine owns no board:
/// every operation that needs the enemy (or home) grid takes it as an
/// explicit read-only (or mutable, for self-placement) argument.
pub struct TargetingEngine {
    heat: [i32; CELL_COUNT],
    remaining: [bool; NUM_VESSELS],
    last_shot: Option<Cell>,
}

impl TargetingEngine {
    pub fn new() -> Self {
        Self {
            heat: [0; CELL_COUNT],
            remaining: [true; NUM_VESSELS],
            last_shot: None,
        }
    }

    /// Zero the heat map and mark every enemy kind as afloat.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current heat value for a cell.
    pub fn heat(&self, cell: Cell) -> i32 {
        self.heat[cell.index()]
    }

    /// Enemy kinds not yet confirmed sunk.
    pub fn remaining_kinds(&self) -> impl Iterator<Item = VesselKind> + '_ {
        VesselKind::ALL
            .into_iter()
            .filter(|k| self.remaining[k.index()])
    }

    pub fn last_shot(&self) -> Option<Cell> {
        self.last_shot
    }

    /// Place the full fleet on `home` at random.
    ///
    /// Samples a root cell from the pool of cells not yet covered by a
    /// placed vessel plus a random orientation, and asks the board. After
    /// `MAX_RANDOM_TRIES` rejections it sweeps the remaining pool
    /// exhaustively, so the search always terminates.
    pub fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        home: &mut Board,
    ) -> Result<(), FleetError> {
        let mut pool: Vec<Cell> = (0..BOARD_SIZE)
            .flat_map(|x| (0..BOARD_SIZE).map(move |y| Cell::new(x, y)))
            .collect();

        for kind in VesselKind::ALL {
            let vessel = Self::sample_placement(rng, home, kind, &pool)
                .ok_or(FleetError::PlacementExhausted { kind: kind.name() })?;
            home.place(vessel);
            pool.retain(|&c| !vessel.contains(c));
            log::debug!(
                "placed {} at {} {:?}",
                kind.name(),
                vessel.origin(),
                vessel.orientation()
            );
        }
        Ok(())
    }

    fn sample_placement<R: Rng + ?Sized>(
        rng: &mut R,
        home: &Board,
        kind: VesselKind,
        pool: &[Cell],
    ) -> Option<Vessel> {
        if pool.is_empty() {
            return None;
        }
        for _ in 0..MAX_RANDOM_TRIES {
            let root = pool[rng.random_range(0..pool.len())];
            let orientation = if rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let candidate = Vessel::new(kind, root, orientation);
            if home.can_place(&candidate) {
                return Some(candidate);
            }
        }
        log::debug!("random placement of {} exhausted, sweeping", kind.name());
        for &root in pool {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let candidate = Vessel::new(kind, root, orientation);
                if home.can_place(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Pick the next shot: the first cell, scanning x then y, whose heat
    /// strictly exceeds every value seen before it.
    ///
    /// The running maximum starts at zero, so a cell is only ever selected
    /// on a strictly positive value; if no cell qualifies (e.g. on a fresh
    /// engine before the first `set_shot_result`), no shot is returned.
    pub fn get_shot(&mut self) -> Option<Cell> {
        let mut best = None;
        let mut max_val = 0;
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let cell = Cell::new(x, y);
                if self.heat[cell.index()] > max_val {
                    max_val = self.heat[cell.index()];
                    best = Some(cell);
                }
            }
        }
        self.last_shot = best;
        best
    }

    /// Feed back the outcome of the last shot and rebuild the heat map.
    ///
    /// A `Sunk` outcome retires the kind of the wreck found at the last
    /// shot. The rebuild is a full recompute over all cells, remaining
    /// kinds and both orientations; cost is bounded and fine at this grid
    /// size.
    pub fn set_shot_result(&mut self, enemy: &Board, outcome: Outcome) {
        if outcome == Outcome::Sunk {
            if let Some(vessel) = self.last_shot.and_then(|c| enemy.get_sunk_vessel_at(c)) {
                self.remaining[vessel.kind().index()] = false;
                log::debug!("enemy {} confirmed sunk", vessel.kind().name());
            }
        }
        self.rebuild(enemy);
    }

    fn rebuild(&mut self, enemy: &Board) {
        // seed: unknown cells are neutral, fired cells become negative
        // sentinels carrying the outcome code
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let cell = Cell::new(x, y);
                let state = enemy.get_state(cell);
                self.heat[cell.index()] = match state {
                    CellState::Null => 0,
                    fired => -fired.code(),
                };
            }
        }

        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                for kind in VesselKind::ALL {
                    if !self.remaining[kind.index()] {
                        continue;
                    }
                    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
                        let hypothesis = Vessel::new(kind, Cell::new(x, y), orientation);
                        self.tally(enemy, &hypothesis);
                    }
                }
            }
        }
    }

    /// Add one hypothetical placement to the heat map, if it is still
    /// consistent with everything known about the enemy grid.
    fn tally(&mut self, enemy: &Board, hypothesis: &Vessel) {
        if !enemy.can_place(hypothesis) {
            return;
        }
        let mut hit_count = 0;
        for cell in hypothesis.occupied_cells() {
            match enemy.get_state(cell) {
                CellState::Miss | CellState::Sunk => return,
                CellState::Hit => hit_count += 1,
                CellState::Null => {}
            }
        }
        // placements continuing a hit streak count for much more
        let weight = 1 + HIT_BONUS * hit_count;
        for cell in hypothesis.occupied_cells() {
            if self.heat[cell.index()] >= 0 {
                self.heat[cell.index()] += weight;
            }
        }
    }

    /// Load a persisted heat map, replacing the current one.
    pub fn load_heat_map<R: BufRead>(&mut self, reader: R) -> Result<(), PersistError> {
        self.heat = persist::read_heat_grid(reader)?;
        Ok(())
    }

    /// Write the heat map in the persisted grid format.
    pub fn save_heat_map<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        persist::write_heat_grid(writer, &self.heat)
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::new()
    }
}
