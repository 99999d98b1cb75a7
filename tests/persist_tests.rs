use std::io::Cursor;

use flotilla::{
    read_heat_grid, read_placement, write_heat_grid, write_placement, Board, Cell, Outcome,
    PersistError, TargetingEngine, VesselKind, BOARD_SIZE, CELL_COUNT,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const GOOD_PLACEMENT: &str = "\
a 0 0 h
b 0 2 h
d 0 4 h
s 0 6 h
m 0 8 h
";

#[test]
fn test_read_placement_full_fleet() {
    let mut board = Board::new();
    read_placement(Cursor::new(GOOD_PLACEMENT), &mut board).unwrap();
    assert!(board.fleet_complete());
    let placement = board.get_ship_placement();
    assert_eq!(placement[&VesselKind::Carrier], (0, 0, false));
    assert_eq!(placement[&VesselKind::Minesweeper], (0, 8, false));
}

#[test]
fn test_read_placement_skips_noise_lines() {
    let file = "\n# fleet below\na 0 0 v\n\nwhat is this\nm 5 5 h\n";
    let mut board = Board::new();
    read_placement(Cursor::new(file), &mut board).unwrap();
    assert_eq!(board.vessel_count(), 2);
    let placement = board.get_ship_placement();
    assert_eq!(placement[&VesselKind::Carrier], (0, 0, true));
    assert_eq!(placement[&VesselKind::Minesweeper], (5, 5, false));
}

#[test]
fn test_read_placement_bad_coordinate_is_fatal() {
    let mut board = Board::new();
    let err = read_placement(Cursor::new("a zero 0 h\n"), &mut board).unwrap_err();
    assert!(matches!(err, PersistError::BadInteger { line: 1, .. }));
}

#[test]
fn test_read_placement_unknown_kind_is_fatal() {
    let mut board = Board::new();
    let err = read_placement(Cursor::new("z 0 0 h\n"), &mut board).unwrap_err();
    assert!(matches!(err, PersistError::UnknownKind { line: 1, .. }));
}

#[test]
fn test_read_placement_rejected_by_board() {
    let mut board = Board::new();
    let file = "a 0 0 h\nd 2 0 v\n";
    let err = read_placement(Cursor::new(file), &mut board).unwrap_err();
    assert!(matches!(
        err,
        PersistError::PlacementRejected { line: 2, code: 'd' }
    ));
}

#[test]
fn test_placement_round_trip() {
    let mut board = Board::new();
    read_placement(Cursor::new(GOOD_PLACEMENT), &mut board).unwrap();
    let mut out = Vec::new();
    write_placement(&mut out, &board).unwrap();

    let mut board2 = Board::new();
    read_placement(Cursor::new(out), &mut board2).unwrap();
    assert_eq!(board.get_ship_placement(), board2.get_ship_placement());
}

#[test]
fn test_heat_grid_round_trip() {
    let mut grid = [0i32; CELL_COUNT];
    for (i, v) in grid.iter_mut().enumerate() {
        *v = (i as i32 % 13) - 3; // mix of negative, zero and positive
    }
    let mut out = Vec::new();
    write_heat_grid(&mut out, &grid).unwrap();
    let back = read_heat_grid(Cursor::new(out)).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn test_heat_grid_format_is_width_3_left_justified() {
    let mut grid = [0i32; CELL_COUNT];
    grid[0] = 112;
    grid[1] = -1;
    grid[2] = 7;
    let mut out = Vec::new();
    write_heat_grid(&mut out, &grid).unwrap();
    let text = String::from_utf8(out).unwrap();
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("112 -1  7   0"));
    assert_eq!(text.lines().count(), BOARD_SIZE);
}

#[test]
fn test_heat_grid_wrong_token_count() {
    let short_row = "0 1 2\n";
    let err = read_heat_grid(Cursor::new(short_row)).unwrap_err();
    assert!(matches!(
        err,
        PersistError::TokenCount {
            line: 1,
            expected: 10,
            found: 3
        }
    ));
}

#[test]
fn test_heat_grid_wrong_row_count() {
    let row = "0 1 2 3 4 5 6 7 8 9\n";
    let err = read_heat_grid(Cursor::new(row.repeat(9))).unwrap_err();
    assert!(matches!(
        err,
        PersistError::RowCount {
            expected: 10,
            found: 9
        }
    ));
}

#[test]
fn test_heat_grid_bad_integer() {
    let mut text = "0 1 2 3 4 5 6 7 8 9\n".repeat(9);
    text.push_str("0 1 2 3 4 five 6 7 8 9\n");
    let err = read_heat_grid(Cursor::new(text)).unwrap_err();
    assert!(matches!(err, PersistError::BadInteger { line: 10, .. }));
}

#[test]
fn test_engine_heat_map_round_trip_through_file() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut enemy = Board::new();
    let mut placer = TargetingEngine::new();
    placer.place_ships(&mut rng, &mut enemy).unwrap();
    enemy.finalize();
    enemy.process_shot(Cell::new(4, 4));
    enemy.process_shot(Cell::new(7, 2));

    let mut engine = TargetingEngine::new();
    engine.set_shot_result(&enemy, Outcome::Miss);

    let mut out = Vec::new();
    engine.save_heat_map(&mut out).unwrap();
    let mut restored = TargetingEngine::new();
    restored.load_heat_map(Cursor::new(out)).unwrap();

    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let cell = Cell::new(x, y);
            assert_eq!(restored.heat(cell), engine.heat(cell));
        }
    }
}

#[test]
fn test_write_placement_orientation_letters() {
    let mut board = Board::new();
    let file = "a 3 1 v\nm 0 0 h\n";
    read_placement(Cursor::new(file), &mut board).unwrap();
    let mut out = Vec::new();
    write_placement(&mut out, &board).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("a 3 1 v"));
    assert!(text.contains("m 0 0 h"));
}
