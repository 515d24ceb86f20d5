//! Packed cell sets for fixed-size square grids.
//!
//! A `CellSet` records membership for the cells of an `N×N` grid in a
//! single unsigned integer `T`, so ship masks and hit records stay `Copy`
//! and allocation-free. Cells are addressed by zero-based `(row, col)`
//! indices.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

/// Set of cells on an N×N grid, packed into the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of addressable cells (`N * N`). Must fit in `T`.
    const CELLS: usize = N * N;

    #[inline]
    fn grid_mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(Self::CELLS <= mem::size_of::<T>() * 8);
        CellSet { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` when no cell is in the set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Out-of-range indices are simply not members.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        if row >= N || col >= N {
            return false;
        }
        (self.bits >> (row * N + col)) & T::one() != T::zero()
    }

    /// Add the cell at (`row`, `col`). Out-of-range indices are ignored.
    pub fn insert(&mut self, row: usize, col: usize) {
        debug_assert!(row < N && col < N);
        if row < N && col < N {
            self.bits = self.bits | (T::one() << (row * N + col));
        }
    }

    /// Raw packed representation.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Rebuild a set from its raw representation, masking out any bits
    /// beyond the grid.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        CellSet {
            bits: raw & Self::grid_mask(),
        }
    }

    /// Build a set from `(row, col)` pairs.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = Self::new();
        for (r, c) in cells {
            set.insert(r, c);
        }
        set
    }

    /// Iterate over member cells in row-major order.
    #[inline]
    pub fn iter(&self) -> CellIter<T, N> {
        CellIter { bits: self.bits, idx: 0 }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let cell = if self.contains(r, c) { '■' } else { '□' };
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet::from_raw(self.bits | rhs.bits)
    }
}

impl<T, const N: usize> BitAndAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Iterator over the member cells of a `CellSet`.
#[derive(Clone, Copy)]
pub struct CellIter<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for CellIter<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if (self.bits >> idx) & T::one() != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}
