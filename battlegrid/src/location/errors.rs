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
//! Errors produced while parsing locations and building ranges.

use thiserror::Error;

use crate::location::Location;

/// Reason why a location code could not be parsed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidLocationReason {
    /// The code had fewer than two characters.
    #[error("location code must be at least 2 characters long")]
    TooShort,
    /// The code did not start with an uppercase letter.
    #[error("location code must start with a letter from A to Z")]
    InvalidRow,
    /// The code after the row letter was not a column number.
    #[error("location code must end with a column number")]
    InvalidColumn,
}

/// Error returned when a location code is malformed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid location code {code:?}: {reason}")]
pub struct ParseLocationError {
    /// Why the code was rejected.
    reason: InvalidLocationReason,
    /// The code as given by the caller.
    code: String,
}

impl ParseLocationError {
    pub(super) fn new(reason: InvalidLocationReason, code: &str) -> Self {
        Self {
            reason,
            code: code.to_owned(),
        }
    }

    /// Get the reason the code was rejected.
    pub fn reason(&self) -> InvalidLocationReason {
        self.reason
    }

    /// Get the code that failed to parse.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Error returned when two locations do not describe a usable range.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RangeError {
    /// One of the endpoint codes was malformed.
    #[error(transparent)]
    Location(#[from] ParseLocationError),
    /// The start location did not come before the end location.
    #[error("invalid range, start location {start} must come before the end location {end}")]
    NotBefore { start: Location, end: Location },
    /// The endpoints share neither a row nor a column.
    #[error("invalid range, {start} and {end} must not be diagonal to one another")]
    Diagonal { start: Location, end: Location },
    /// The span is longer than a row or column of the widest board.
    #[error("invalid range, length {length} exceeds the widest board ({max})")]
    TooLong { length: usize, max: usize },
    /// The span along the shared axis did not match the number of locations produced.
    #[error("invalid range, {count} locations produced for a span of length {length}")]
    InconsistentLength { length: usize, count: usize },
}
