//! The grid engine: fleet state, shot validation and hit resolution.

use alloc::vec::Vec;
use core::fmt;

use crate::cellset::CellSet;
use crate::common::{ShootResult, ShotError};
use crate::config::GRID_SIZE;
use crate::coord::{Coordinate, Segment};
use crate::ship::Ship;

type Cells = CellSet<u128, { GRID_SIZE as usize }>;

/// Per-ship entry in a [`GridState`] snapshot: the placement segment plus
/// the raw hit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipState {
    pub segment: Segment,
    pub hits: u128,
}

/// Serializable snapshot of an engine, for saving or syncing a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub ships: Vec<ShipState>,
    pub shots: u32,
}

/// A 10×10 targeting grid holding a pre-placed fleet.
///
/// The engine owns the ships exclusively: callers submit shots one at a
/// time through [`shoot`](GridEngine::shoot) and read results back; nothing
/// else mutates ship damage. A shot either fails validation with no state
/// change at all, or fully applies (counter increment plus hit record)
/// before returning.
pub struct GridEngine {
    ships: Vec<Ship>,
    ship_map: Cells,
    shots: u32,
}

impl GridEngine {
    /// Build an engine from a pre-placed fleet.
    ///
    /// The fleet is trusted configuration: segments are assumed to lie on
    /// the grid, form straight lines and not overlap. No error path.
    pub fn new<I>(fleet: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut ships = Vec::new();
        let mut ship_map = Cells::new();
        for segment in fleet {
            let ship = Ship::new(segment);
            ship_map |= ship.mask();
            ships.push(ship);
        }
        GridEngine {
            ships,
            ship_map,
            shots: 0,
        }
    }

    /// Fire at (`num`, `letter`), reporting whether a ship was hit and
    /// whether that hit left it sunk.
    ///
    /// Validation happens before any mutation, in a fixed order callers
    /// rely on: a letter token that is not exactly one alphabetic character
    /// fails with [`ShotError::IncorrectLetter`]; after canonicalizing to
    /// uppercase, a letter outside A–J or a row outside 1–10 fails with
    /// [`ShotError::OutOfBounds`]. Only legal shots increment the shot
    /// counter.
    pub fn shoot(&mut self, num: u8, letter: &str) -> Result<ShootResult, ShotError> {
        let mut chars = letter.chars();
        let raw = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c,
            _ => return Err(ShotError::IncorrectLetter),
        };
        let target = Coordinate::new(num, raw);
        let (row, col) = target.index().ok_or(ShotError::OutOfBounds)?;

        self.shots += 1;

        // Fast miss path; a coordinate belongs to at most one ship.
        if self.ship_map.contains(row, col) {
            for ship in self.ships.iter_mut() {
                if ship.record_hit(target) {
                    return Ok(ShootResult {
                        hit: true,
                        sunk: ship.is_sunk(),
                    });
                }
            }
        }
        Ok(ShootResult::MISS)
    }

    /// Reset the shot counter to zero.
    ///
    /// Ship damage is deliberately preserved: a sunk ship stays sunk across
    /// a reset. Only the tally restarts.
    pub fn reset(&mut self) {
        self.shots = 0;
    }

    /// Cumulative count of legal shots since construction or the last
    /// [`reset`](GridEngine::reset). Shots that fail validation are not
    /// counted.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Immutable view of the fleet, in supply order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` once every ship in the fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Union mask of all occupied cells.
    pub fn ship_map(&self) -> Cells {
        self.ship_map
    }

    /// Snapshot the current battle.
    pub fn state(&self) -> GridState {
        GridState {
            ships: self
                .ships
                .iter()
                .map(|s| ShipState {
                    segment: s.segment(),
                    hits: s.hits_raw(),
                })
                .collect(),
            shots: self.shots,
        }
    }

    /// Restore an engine from a previously taken snapshot.
    pub fn from_state(state: GridState) -> Self {
        let mut ships = Vec::with_capacity(state.ships.len());
        let mut ship_map = Cells::new();
        for entry in state.ships {
            let ship = Ship::with_hits(entry.segment, entry.hits);
            ship_map |= ship.mask();
            ships.push(ship);
        }
        GridEngine {
            ships,
            ship_map,
            shots: state.shots,
        }
    }
}

impl fmt::Debug for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "GridEngine {{\n  shots: {},\n  ship_map: {:?},\n  ships: {:?}\n}}",
            self.shots, self.ship_map, self.ships
        )
    }
}
