//! Text formats: fleet placement files and the persisted heat-map grid.

use std::io::{BufRead, Write};

use crate::board::Board;
use crate::common::{Cell, Orientation, PersistError};
use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::vessel::{Vessel, VesselKind};

/// Read a placement file into `board` (one vessel per line:
/// `<kind-letter> <x> <y> <v|h>`).
///
/// Blank lines and lines that do not contain exactly three separating
/// spaces are skipped as noise. Bad tokens on a well-formed line are
/// errors, as is a placement the board rejects.
pub fn read_placement<R: BufRead>(reader: R, board: &mut Board) -> Result<(), PersistError> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.matches(' ').count() != 3 {
            continue;
        }
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if tokens.len() != 4 {
            continue;
        }
        let line_no = idx + 1;

        let code = tokens[0];
        let kind = match code.chars().next() {
            Some(c) if code.len() == 1 => VesselKind::from_code(c),
            _ => None,
        }
        .ok_or_else(|| PersistError::UnknownKind {
            line: line_no,
            code: code.to_string(),
        })?;
        let x = parse_int(tokens[1], line_no)?;
        let y = parse_int(tokens[2], line_no)?;
        let orientation = Orientation::from_vertical(tokens[3] == "v");

        let vessel = Vessel::new(kind, Cell::new(x, y), orientation);
        if !board.place(vessel) {
            return Err(PersistError::PlacementRejected {
                line: line_no,
                code: kind.code(),
            });
        }
    }
    Ok(())
}

/// Write the board's placement in the text format read by
/// [`read_placement`].
pub fn write_placement<W: Write>(mut writer: W, board: &Board) -> Result<(), PersistError> {
    for vessel in board.vessels() {
        let origin = vessel.origin();
        writeln!(
            writer,
            "{} {} {} {}",
            vessel.kind().code(),
            origin.x,
            origin.y,
            if vessel.orientation().is_vertical() {
                'v'
            } else {
                'h'
            }
        )?;
    }
    Ok(())
}

/// Read a heat-map grid: exactly `BOARD_SIZE` lines of `BOARD_SIZE`
/// whitespace-separated integers, row-major.
pub fn read_heat_grid<R: BufRead>(reader: R) -> Result<[i32; CELL_COUNT], PersistError> {
    let mut grid = [0i32; CELL_COUNT];
    let mut rows = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(PersistError::TokenCount {
                line: line_no,
                expected: BOARD_SIZE,
                found: tokens.len(),
            });
        }
        if idx < BOARD_SIZE {
            for (x, token) in tokens.iter().enumerate() {
                grid[idx * BOARD_SIZE + x] = parse_int(token, line_no)?;
            }
        }
        rows += 1;
    }
    if rows != BOARD_SIZE {
        return Err(PersistError::RowCount {
            expected: BOARD_SIZE,
            found: rows,
        });
    }
    Ok(grid)
}

/// Write a heat-map grid, each value left-justified to width 3 for
/// readability.
pub fn write_heat_grid<W: Write>(
    mut writer: W,
    grid: &[i32; CELL_COUNT],
) -> Result<(), PersistError> {
    for y in 0..BOARD_SIZE {
        let mut line = String::new();
        for x in 0..BOARD_SIZE {
            line.push_str(&format!("{:<3} ", grid[y * BOARD_SIZE + x]));
        }
        writeln!(writer, "{}", line.trim_end())?;
    }
    Ok(())
}

fn parse_int<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, PersistError> {
    token.parse().map_err(|_| PersistError::BadInteger {
        line,
        token: token.to_string(),
    })
}
