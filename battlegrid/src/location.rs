// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Single cells of the board, addressed by a row letter and a column number such as
//! `B7`, and straight-line spans of them.
use std::{convert::TryFrom, fmt, str::FromStr};

use enumflags2::BitFlags;

pub use self::{
    errors::{InvalidLocationReason, ParseLocationError, RangeError},
    range::LocationRange,
};

mod errors;
mod range;

/// Lowest row letter a location can carry.
pub(crate) const FIRST_ROW: u8 = b'A';

/// Axes along which two locations can line up.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Axis {
    /// The locations share a row letter.
    Row = 0b01,
    /// The locations share a column number.
    Column = 0b10,
}

/// A single addressable cell, a row letter from `A` to `Z` followed by a column number.
///
/// A `Location` can only be built from valid components, so its accessors never need to
/// re-check the code. Ordering is by row, then by column. Column numbers are stored
/// numerically, so `A01` and `A1` name the same location.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Uppercase ASCII row letter.
    row: u8,
    /// Column number. Board columns start at 1.
    column: u32,
}

impl Location {
    /// Construct a location from a row letter and column number. Returns `None` if the
    /// row is not an uppercase letter from `A` to `Z`.
    pub fn new(row: char, column: u32) -> Option<Self> {
        if row.is_ascii_uppercase() {
            Some(Self::from_parts(row as u8, column))
        } else {
            None
        }
    }

    /// Build a location from parts that are already known to be valid.
    pub(crate) fn from_parts(row: u8, column: u32) -> Self {
        debug_assert!(row.is_ascii_uppercase());
        Self { row, column }
    }

    /// Parse a location code such as `"C4"`.
    ///
    /// A code is valid if it is at least two characters long, starts with an uppercase
    /// letter `A`-`Z`, and the rest is a number.
    pub fn parse(code: &str) -> Result<Self, ParseLocationError> {
        if code.len() < 2 {
            return Err(ParseLocationError::new(InvalidLocationReason::TooShort, code));
        }
        let mut chars = code.chars();
        let row = match chars.next() {
            Some(row) if row.is_ascii_uppercase() => row as u8,
            _ => return Err(ParseLocationError::new(InvalidLocationReason::InvalidRow, code)),
        };
        let column = chars
            .as_str()
            .parse()
            .map_err(|_| ParseLocationError::new(InvalidLocationReason::InvalidColumn, code))?;
        Ok(Self::from_parts(row, column))
    }

    /// The row letter of this location.
    pub fn row(&self) -> char {
        self.row as char
    }

    /// The column number of this location.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based index of the row, `A` being 0.
    pub(crate) fn row_index(&self) -> usize {
        usize::from(self.row - FIRST_ROW)
    }

    /// Raw row byte, used to walk along a column.
    pub(crate) fn row_byte(&self) -> u8 {
        self.row
    }

    /// Returns true if this location comes before `other`: either its row letter is
    /// earlier or its column number is smaller. The two checks are independent, so a
    /// later row with a smaller column still counts as before.
    pub fn is_before(&self, other: &Location) -> bool {
        self.row < other.row || self.column < other.column
    }

    /// The set of axes this location shares with `other`. Empty when the two are
    /// diagonal to each other, both axes when they are the same location.
    pub fn shared_axes(&self, other: &Location) -> BitFlags<Axis> {
        let mut axes = BitFlags::empty();
        if self.row == other.row {
            axes.insert(Axis::Row);
        }
        if self.column == other.column {
            axes.insert(Axis::Column);
        }
        axes
    }

    /// Returns true if the locations share neither a row nor a column.
    pub fn is_diagonal_to(&self, other: &Location) -> bool {
        self.shared_axes(other).is_empty()
    }

    /// Returns true if both locations have the same column number.
    pub fn in_same_column(&self, other: &Location) -> bool {
        self.shared_axes(other).contains(Axis::Column)
    }

    /// Returns true if both locations have the same row letter.
    pub fn in_same_row(&self, other: &Location) -> bool {
        self.shared_axes(other).contains(Axis::Row)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row(), self.column)
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::parse(code)
    }
}

impl TryFrom<&str> for Location {
    type Error = ParseLocationError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::parse(code)
    }
}
