#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cellset;
mod common;
mod config;
mod coord;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use cellset::{CellIter, CellSet};
pub use common::*;
pub use config::*;
pub use coord::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
