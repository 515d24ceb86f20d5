//! Grid coordinates and the straight segments ships occupy.

use core::fmt;

use crate::config::{FIRST_LETTER, GRID_SIZE, LAST_LETTER};

/// A grid coordinate: row number 1–10 and column letter A–J.
///
/// The letter is canonicalized to uppercase at construction. Whether the
/// coordinate actually lies on the grid is only checked where it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    num: u8,
    letter: char,
}

impl Coordinate {
    pub const fn new(num: u8, letter: char) -> Self {
        Coordinate {
            num,
            letter: letter.to_ascii_uppercase(),
        }
    }

    /// Row number, 1-based.
    pub const fn num(&self) -> u8 {
        self.num
    }

    /// Column letter, uppercase.
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Zero-based `(row, col)` indices, or `None` when the coordinate lies
    /// outside the grid.
    pub(crate) fn index(&self) -> Option<(usize, usize)> {
        if self.num < 1 || self.num > GRID_SIZE {
            return None;
        }
        if self.letter < FIRST_LETTER || self.letter > LAST_LETTER {
            return None;
        }
        Some((
            (self.num - 1) as usize,
            (self.letter as u8 - FIRST_LETTER as u8) as usize,
        ))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.num)
    }
}

/// A straight, contiguous run of cells between two coordinates, inclusive.
///
/// Horizontal, vertical, single-cell and diagonal runs are all valid; the
/// occupied cells are produced by stepping one row and/or column at a time
/// from start to end. Endpoints that are off the grid or do not form a
/// straight line are a precondition violation by the fleet supplier, not a
/// handled error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    start: Coordinate,
    end: Coordinate,
}

impl Segment {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Segment { start, end }
    }

    pub const fn start(&self) -> Coordinate {
        self.start
    }

    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// Iterate over the zero-based `(row, col)` cells the segment covers,
    /// from start to end.
    pub fn cells(&self) -> SegmentCells {
        let sr = self.start.num as i32 - 1;
        let sc = self.start.letter as i32 - FIRST_LETTER as i32;
        let er = self.end.num as i32 - 1;
        let ec = self.end.letter as i32 - FIRST_LETTER as i32;
        debug_assert!(
            er - sr == 0 || ec - sc == 0 || (er - sr).abs() == (ec - sc).abs(),
            "segment endpoints must form a straight line"
        );
        SegmentCells {
            row: sr,
            col: sc,
            row_step: (er - sr).signum(),
            col_step: (ec - sc).signum(),
            remaining: ((er - sr).abs().max((ec - sc).abs()) + 1) as usize,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Iterator over the cells of a [`Segment`], stepping unit deltas.
#[derive(Clone, Copy)]
pub struct SegmentCells {
    row: i32,
    col: i32,
    row_step: i32,
    col_step: i32,
    remaining: usize,
}

impl Iterator for SegmentCells {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let cell = (self.row as usize, self.col as usize);
        self.row += self.row_step;
        self.col += self.col_step;
        self.remaining -= 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SegmentCells {}
