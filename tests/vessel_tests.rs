use flotilla::{Cell, Orientation, Vessel, VesselKind};

#[test]
fn test_kind_lengths_and_codes() {
    let expected = [
        (VesselKind::Carrier, 5, 'a'),
        (VesselKind::Battleship, 4, 'b'),
        (VesselKind::Destroyer, 3, 'd'),
        (VesselKind::Submarine, 3, 's'),
        (VesselKind::Minesweeper, 2, 'm'),
    ];
    for (kind, length, code) in expected {
        assert_eq!(kind.length(), length);
        assert_eq!(kind.code(), code);
        assert_eq!(VesselKind::from_code(code), Some(kind));
    }
    assert_eq!(VesselKind::from_code('z'), None);
}

#[test]
fn test_occupied_cells_horizontal() {
    let v = Vessel::new(VesselKind::Carrier, Cell::new(0, 0), Orientation::Horizontal);
    let cells: Vec<Cell> = v.occupied_cells().collect();
    assert_eq!(
        cells,
        (0..5).map(|x| Cell::new(x, 0)).collect::<Vec<_>>()
    );
}

#[test]
fn test_occupied_cells_vertical() {
    let v = Vessel::new(VesselKind::Destroyer, Cell::new(4, 2), Orientation::Vertical);
    let cells: Vec<Cell> = v.occupied_cells().collect();
    assert_eq!(cells, vec![Cell::new(4, 2), Cell::new(4, 3), Cell::new(4, 4)]);
}

#[test]
fn test_occupied_count_matches_length() {
    for kind in VesselKind::ALL {
        let v = Vessel::new(kind, Cell::new(1, 1), Orientation::Vertical);
        assert_eq!(v.occupied_cells().count(), kind.length());
    }
}

#[test]
fn test_mark_and_sink() {
    let mut v = Vessel::new(VesselKind::Minesweeper, Cell::new(3, 3), Orientation::Horizontal);
    assert!(!v.is_sunk());
    v.mark(Cell::new(3, 3));
    assert_eq!(v.hits(), 1);
    assert!(!v.is_sunk());
    // marking the same segment twice does not double-count
    v.mark(Cell::new(3, 3));
    assert_eq!(v.hits(), 1);
    v.mark(Cell::new(4, 3));
    assert!(v.is_sunk());
}

#[test]
fn test_mark_outside_is_noop() {
    let mut v = Vessel::new(VesselKind::Submarine, Cell::new(0, 0), Orientation::Vertical);
    v.mark(Cell::new(5, 5));
    v.mark(Cell::new(1, 0));
    assert_eq!(v.hits(), 0);
}

#[test]
fn test_intersects() {
    let carrier = Vessel::new(VesselKind::Carrier, Cell::new(0, 0), Orientation::Horizontal);
    let crossing = Vessel::new(VesselKind::Destroyer, Cell::new(2, 0), Orientation::Vertical);
    let clear = Vessel::new(VesselKind::Destroyer, Cell::new(2, 1), Orientation::Vertical);
    assert!(carrier.intersects(&crossing));
    assert!(crossing.intersects(&carrier));
    assert!(!carrier.intersects(&clear));
    assert!(!clear.intersects(&carrier));
}
