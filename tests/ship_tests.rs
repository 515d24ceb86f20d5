use gridshot::{Coordinate, GridEngine, Segment, Ship};

#[test]
fn horizontal_segment_cells() {
    let seg = Segment::new(Coordinate::new(5, 'B'), Coordinate::new(5, 'C'));
    let cells: Vec<_> = seg.cells().collect();
    assert_eq!(cells, vec![(4, 1), (4, 2)]);
}

#[test]
fn vertical_segment_cells() {
    let seg = Segment::new(Coordinate::new(1, 'H'), Coordinate::new(4, 'H'));
    let cells: Vec<_> = seg.cells().collect();
    assert_eq!(cells, vec![(0, 7), (1, 7), (2, 7), (3, 7)]);
}

#[test]
fn single_cell_segment() {
    let seg = Segment::new(Coordinate::new(2, 'A'), Coordinate::new(2, 'A'));
    let cells: Vec<_> = seg.cells().collect();
    assert_eq!(cells, vec![(1, 0)]);
}

#[test]
fn diagonal_segment_cells() {
    let seg = Segment::new(Coordinate::new(7, 'J'), Coordinate::new(10, 'G'));
    let cells: Vec<_> = seg.cells().collect();
    assert_eq!(cells, vec![(6, 9), (7, 8), (8, 7), (9, 6)]);
}

#[test]
fn reversed_endpoints_step_backwards() {
    let seg = Segment::new(Coordinate::new(10, 'G'), Coordinate::new(7, 'J'));
    let cells: Vec<_> = seg.cells().collect();
    assert_eq!(cells, vec![(9, 6), (8, 7), (7, 8), (6, 9)]);
}

#[test]
fn segment_cells_reports_length() {
    let seg = Segment::new(Coordinate::new(10, 'D'), Coordinate::new(10, 'H'));
    assert_eq!(seg.cells().len(), 5);
}

#[test]
fn lowercase_letter_is_canonicalized() {
    let coord = Coordinate::new(3, 'e');
    assert_eq!(coord.letter(), 'E');
    assert_eq!(coord.num(), 3);
}

#[test]
fn diagonal_mask_excludes_bounding_box_cells() {
    let ship = Ship::new(Segment::new(Coordinate::new(7, 'J'), Coordinate::new(10, 'G')));
    assert_eq!(ship.cell_count(), 4);
    assert!(ship.occupies(Coordinate::new(7, 'J')));
    assert!(ship.occupies(Coordinate::new(8, 'I')));
    assert!(ship.occupies(Coordinate::new(9, 'H')));
    assert!(ship.occupies(Coordinate::new(10, 'G')));
    // Same bounding box, off the diagonal.
    assert!(!ship.occupies(Coordinate::new(7, 'G')));
    assert!(!ship.occupies(Coordinate::new(8, 'J')));
    assert!(!ship.occupies(Coordinate::new(10, 'J')));
}

#[test]
fn record_hits_until_sunk() {
    let mut ship = Ship::new(Segment::new(Coordinate::new(7, 'F'), Coordinate::new(8, 'F')));
    assert!(!ship.is_sunk());
    assert!(ship.record_hit(Coordinate::new(7, 'F')));
    assert!(!ship.is_sunk());
    assert_eq!(ship.hits_taken(), 1);
    assert!(ship.record_hit(Coordinate::new(8, 'F')));
    assert!(ship.is_sunk());
    // A coordinate off the ship is not a hit and changes nothing.
    assert!(!ship.record_hit(Coordinate::new(9, 'F')));
    assert!(ship.is_sunk());
}

#[test]
fn repeat_hit_does_not_double_count() {
    let mut ship = Ship::new(Segment::new(Coordinate::new(1, 'H'), Coordinate::new(4, 'H')));
    assert!(ship.record_hit(Coordinate::new(2, 'H')));
    assert!(ship.record_hit(Coordinate::new(2, 'H')));
    assert_eq!(ship.hits_taken(), 1);
}

#[test]
fn diagonal_ship_sinks_cell_by_cell() {
    let fleet = [Segment::new(Coordinate::new(7, 'J'), Coordinate::new(10, 'G'))];
    let mut grid = GridEngine::new(fleet);
    assert!(grid.shoot(7, "J").unwrap().hit);
    // Bounding-box cell off the diagonal is a miss.
    assert!(!grid.shoot(8, "J").unwrap().hit);
    assert!(grid.shoot(8, "I").unwrap().hit);
    assert!(grid.shoot(9, "H").unwrap().hit);
    let last = grid.shoot(10, "G").unwrap();
    assert!(last.hit && last.sunk);
}
