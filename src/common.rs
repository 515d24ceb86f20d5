//! Shot outcomes and validation errors.

use core::fmt;

/// Outcome of a legal shot. Ephemeral per call; nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootResult {
    /// The coordinate belonged to some ship's occupied-cell set. Re-hitting
    /// an already struck cell still reports `true`.
    pub hit: bool,
    /// Every occupied cell of the hit ship has now been struck. Always
    /// `false` on a miss; stays `true` when a sunk ship is hit again.
    pub sunk: bool,
}

impl ShootResult {
    /// A clean miss: no ship at the coordinate.
    pub const MISS: ShootResult = ShootResult {
        hit: false,
        sunk: false,
    };
}

/// Errors returned by shot validation. Both are recoverable; the engine
/// state is untouched when either is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotError {
    /// The letter token was not a single alphabetic character. Checked
    /// before any boundary validation.
    IncorrectLetter,
    /// Row or letter falls outside the fixed grid extent.
    OutOfBounds,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::IncorrectLetter => {
                write!(f, "shot letter must be a single alphabetic character")
            }
            ShotError::OutOfBounds => write!(f, "shot out of grid boundaries"),
        }
    }
}
