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
use std::{fmt, slice};

use log::trace;

use crate::{
    board::{Board, CannotPlaceReason, MAX_WIDTH},
    location::{Axis, Location, RangeError},
    ships::Ship,
};

/// A contiguous straight run of locations along a single row or column, ordered from
/// its start to its end. Ranges are immutable once built.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LocationRange {
    /// Every location in the range, start first. Never fewer than two entries.
    locations: Vec<Location>,
}

impl LocationRange {
    /// Build a range from two location codes, such as `"A1"` and `"A3"`.
    pub fn new(start: &str, end: &str) -> Result<Self, RangeError> {
        let start = Location::parse(start)?;
        let end = Location::parse(end)?;
        Self::between(start, end)
    }

    /// Build the range spanning `start` to `end`, inclusive.
    ///
    /// `start` must be before `end` (see [`Location::is_before`]) and the two must share
    /// a row or a column. Spans longer than the widest board ([`MAX_WIDTH`]) are
    /// rejected before any location is produced.
    pub fn between(start: Location, end: Location) -> Result<Self, RangeError> {
        if !start.is_before(&end) {
            return Err(RangeError::NotBefore { start, end });
        }
        let axes = start.shared_axes(&end);
        if axes.is_empty() {
            return Err(RangeError::Diagonal { start, end });
        }

        let length = if axes.contains(Axis::Column) {
            usize::from(end.row_byte() - start.row_byte()) + 1
        } else {
            (end.column() - start.column()) as usize + 1
        };
        if length > MAX_WIDTH {
            return Err(RangeError::TooLong {
                length,
                max: MAX_WIDTH,
            });
        }

        let mut locations = vec![start];
        locations.extend(intermediates(start, end, axes.contains(Axis::Column)));
        locations.push(end);

        if locations.len() != length {
            return Err(RangeError::InconsistentLength {
                length,
                count: locations.len(),
            });
        }
        trace!("built range {}:{} of length {}", start, end, length);
        Ok(Self { locations })
    }

    /// First location of the range.
    pub fn start(&self) -> Location {
        self.locations[0]
    }

    /// Last location of the range.
    pub fn end(&self) -> Location {
        self.locations[self.locations.len() - 1]
    }

    /// Number of locations in the range.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false: a range spans at least two locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The axis the range runs along. [`Axis::Row`] for a range within one row.
    pub fn axis(&self) -> Axis {
        if self.start().in_same_row(&self.end()) {
            Axis::Row
        } else {
            Axis::Column
        }
    }

    /// The locations of the range in order from start to end.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Iterate the locations of the range from start to end.
    pub fn iter(&self) -> slice::Iter<'_, Location> {
        self.locations.iter()
    }

    /// Returns true if `location` is part of this range.
    pub fn contains(&self, location: &Location) -> bool {
        self.locations.contains(location)
    }

    /// Check that this range could hold `ship` on `board`, ignoring other ships.
    ///
    /// The range must fit within the board width and must be exactly as long as the
    /// ship. The board-size check runs first.
    pub fn validate_for(&self, board: &Board, ship: &Ship) -> Result<(), CannotPlaceReason> {
        if self.len() > board.width() {
            Err(CannotPlaceReason::TooLargeForBoard {
                length: self.len(),
                width: board.width(),
            })
        } else if self.len() != ship.len() {
            Err(CannotPlaceReason::LengthMismatch {
                range: self.len(),
                ship: ship.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Returns true if [`validate_for`][Self::validate_for] passes.
    pub fn is_valid_for(&self, board: &Board, ship: &Ship) -> bool {
        self.validate_for(board, ship).is_ok()
    }
}

/// Locations strictly between `start` and `end`, walking down the shared column when
/// `along_column` is set and along the shared row otherwise.
fn intermediates(start: Location, end: Location, along_column: bool) -> Vec<Location> {
    if along_column {
        (start.row_byte() + 1..end.row_byte())
            .map(|row| Location::from_parts(row, start.column()))
            .collect()
    } else {
        (start.column() + 1..end.column())
            .map(|column| Location::from_parts(start.row_byte(), column))
            .collect()
    }
}

impl fmt::Display for LocationRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start(), self.end())
    }
}

impl<'a> IntoIterator for &'a LocationRange {
    type Item = &'a Location;
    type IntoIter = slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<LocationRange> for Vec<Location> {
    fn from(range: LocationRange) -> Self {
        range.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(code: &str) -> Location {
        code.parse().unwrap()
    }

    #[test]
    fn builds_row_range() {
        let range = LocationRange::new("A1", "A3").unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.locations(), &[loc("A1"), loc("A2"), loc("A3")]);
        assert_eq!(range.axis(), Axis::Row);
        assert_eq!(range.to_string(), "A1:A3");
    }

    #[test]
    fn builds_column_range() {
        let range = LocationRange::new("B2", "E2").unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(range.start(), loc("B2"));
        assert_eq!(range.end(), loc("E2"));
        assert!(range.contains(&loc("D2")));
        assert!(!range.contains(&loc("D3")));
        assert_eq!(range.axis(), Axis::Column);
    }

    #[test]
    fn two_cell_range_has_no_intermediates() {
        let range = LocationRange::new("C7", "C8").unwrap();
        assert_eq!(range.locations(), &[loc("C7"), loc("C8")]);
    }

    #[test]
    fn rejects_bad_geometry() {
        assert_eq!(
            LocationRange::new("A3", "A1"),
            Err(RangeError::NotBefore {
                start: loc("A3"),
                end: loc("A1")
            })
        );
        assert_eq!(
            LocationRange::new("A1", "A1"),
            Err(RangeError::NotBefore {
                start: loc("A1"),
                end: loc("A1")
            })
        );
        assert_eq!(
            LocationRange::new("A1", "C4"),
            Err(RangeError::Diagonal {
                start: loc("A1"),
                end: loc("C4")
            })
        );
    }

    #[test]
    fn rejects_spans_longer_than_any_board() {
        assert_eq!(
            LocationRange::new("A1", "A4000000000"),
            Err(RangeError::TooLong {
                length: 4_000_000_000,
                max: MAX_WIDTH
            })
        );
        assert_eq!(
            LocationRange::new("A1", "A27"),
            Err(RangeError::TooLong {
                length: 27,
                max: MAX_WIDTH
            })
        );
        assert_eq!(LocationRange::new("A1", "A26").map(|r| r.len()), Ok(26));
        assert_eq!(LocationRange::new("A1", "A17").map(|r| r.len()), Ok(17));
    }

    #[test]
    fn propagates_location_errors() {
        match LocationRange::new("A1", "1A") {
            Err(RangeError::Location(err)) => assert_eq!(err.code(), "1A"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
