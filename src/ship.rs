//! Ships and their per-cell damage records.

use core::fmt;

use crate::cellset::CellSet;
use crate::config::GRID_SIZE;
use crate::coord::{Coordinate, Segment};

type Cells = CellSet<u128, { GRID_SIZE as usize }>;

/// A ship placed on the grid.
///
/// The occupied-cell mask is computed once from the segment at
/// construction; only the hit record changes afterwards. Sunk is a terminal
/// state: once every occupied cell is struck, further hits leave the ship
/// sunk.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    segment: Segment,
    mask: Cells,
    hits: Cells,
}

impl Ship {
    /// Build a ship from its segment with an empty hit record.
    pub fn new(segment: Segment) -> Self {
        Ship {
            segment,
            mask: Cells::from_cells(segment.cells()),
            hits: Cells::new(),
        }
    }

    /// Restore a ship from its segment and a raw hit record. Bits outside
    /// the occupied-cell mask are discarded.
    pub(crate) fn with_hits(segment: Segment, hits: u128) -> Self {
        let mask = Cells::from_cells(segment.cells());
        Ship {
            segment,
            mask,
            hits: Cells::from_raw(hits) & mask,
        }
    }

    /// Record a hit at `at`. Returns `true` when the coordinate belongs to
    /// this ship; striking an already-hit cell is still a hit.
    pub fn record_hit(&mut self, at: Coordinate) -> bool {
        match at.index() {
            Some((row, col)) if self.mask.contains(row, col) => {
                self.hits.insert(row, col);
                true
            }
            _ => false,
        }
    }

    /// Whether the ship occupies `at`.
    pub fn occupies(&self, at: Coordinate) -> bool {
        at.index()
            .is_some_and(|(row, col)| self.mask.contains(row, col))
    }

    /// The ship is sunk once every occupied cell has been struck.
    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.mask.len()
    }

    /// The segment the ship was placed on.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Number of cells the ship occupies.
    pub fn cell_count(&self) -> usize {
        self.mask.len()
    }

    /// Number of distinct cells struck so far.
    pub fn hits_taken(&self) -> usize {
        self.hits.len()
    }

    pub(crate) fn mask(&self) -> Cells {
        self.mask
    }

    pub(crate) fn hits_raw(&self) -> u128 {
        self.hits.into_raw()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ segment: {}, cells: {}, hits: {}, sunk: {} }}",
            self.segment,
            self.mask.len(),
            self.hits.len(),
            self.is_sunk(),
        )
    }
}
