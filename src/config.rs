//! Board and fleet constants.

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of vessels in a full fleet, one per kind.
pub const NUM_VESSELS: usize = 5;

/// Total cells covered by a full fleet (5 + 4 + 3 + 3 + 2).
pub const TOTAL_VESSEL_CELLS: usize = 17;
