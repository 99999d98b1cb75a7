//! Save-game structure consumed and produced by the persistence layer.
//!
//! The wire shape is a root object with a numeric game id and, per side,
//! a placement map (kind letter to `[x, y, vertical]`) and the list of
//! shots fired at that side's board, in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::common::{Cell, Orientation};
use crate::vessel::{Vessel, VesselKind};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SaveGameError {
    #[error("unknown vessel code {code:?}")]
    UnknownKind { code: String },
    #[error("stored placement of vessel '{code}' rejected")]
    PlacementRejected { code: char },
    #[error("record holds shots but fewer than a full fleet")]
    IncompleteFleet,
}

/// One side's persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRecord {
    pub placement: BTreeMap<String, (usize, usize, bool)>,
    pub shots: Vec<(usize, usize)>,
}

impl SideRecord {
    /// Snapshot a board's placement and fire history.
    pub fn from_board(board: &Board) -> Self {
        let placement = board
            .get_ship_placement()
            .into_iter()
            .map(|(kind, spot)| (kind.code().to_string(), spot))
            .collect();
        let shots = board.get_shots().iter().map(|c| (c.x, c.y)).collect();
        Self { placement, shots }
    }

    /// Rebuild the board this record was taken from, replaying every shot
    /// so damage and history come out identical.
    pub fn restore(&self) -> Result<Board, SaveGameError> {
        let mut board = Board::new();
        for (code, &(x, y, vertical)) in &self.placement {
            let kind = match code.chars().next() {
                Some(c) if code.len() == 1 => VesselKind::from_code(c),
                _ => None,
            }
            .ok_or_else(|| SaveGameError::UnknownKind { code: code.clone() })?;
            let vessel = Vessel::new(kind, Cell::new(x, y), Orientation::from_vertical(vertical));
            if !board.place(vessel) {
                return Err(SaveGameError::PlacementRejected { code: kind.code() });
            }
        }
        if !self.shots.is_empty() {
            if !board.fleet_complete() {
                return Err(SaveGameError::IncompleteFleet);
            }
            for &(x, y) in &self.shots {
                board.process_shot(Cell::new(x, y));
            }
        }
        Ok(board)
    }
}

/// Root save-game object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub game_id: u64,
    pub human: SideRecord,
    pub computer: SideRecord,
}

impl SaveGame {
    pub fn new(game_id: u64, human: &Board, computer: &Board) -> Self {
        Self {
            game_id,
            human: SideRecord::from_board(human),
            computer: SideRecord::from_board(computer),
        }
    }
}
