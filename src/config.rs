use crate::coord::{Coordinate, Segment};

/// Grid extent. Rows run 1 to `GRID_SIZE`, columns `FIRST_LETTER` to
/// `LAST_LETTER`. These are contract constants, not configuration.
pub const GRID_SIZE: u8 = 10;
pub const FIRST_LETTER: char = 'A';
pub const LAST_LETTER: char = 'J';

pub const NUM_SHIPS: usize = 7;

/// The classic pre-placed fleet used by the simulator and the test suite:
/// one carrier (5), one battleship (4), one cruiser (3), two destroyers (2)
/// and two single-cell submarines.
pub const STANDARD_FLEET: [Segment; NUM_SHIPS] = [
    Segment::new(Coordinate::new(2, 'A'), Coordinate::new(2, 'A')),
    Segment::new(Coordinate::new(3, 'E'), Coordinate::new(3, 'E')),
    Segment::new(Coordinate::new(1, 'H'), Coordinate::new(4, 'H')),
    Segment::new(Coordinate::new(5, 'B'), Coordinate::new(5, 'C')),
    Segment::new(Coordinate::new(7, 'F'), Coordinate::new(8, 'F')),
    Segment::new(Coordinate::new(7, 'J'), Coordinate::new(9, 'J')),
    Segment::new(Coordinate::new(10, 'D'), Coordinate::new(10, 'H')),
];
