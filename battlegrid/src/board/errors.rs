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
//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{location::Location, ships::Ship};

/// Reason why a ship could not be placed on a range.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// The range is longer than the board is wide.
    #[error("range of length {length} cannot be larger than the board width {width}")]
    TooLargeForBoard { length: usize, width: usize },
    /// The range does not have the same length as the ship.
    #[error("range of length {range} must be equal to the length of the ship ({ship})")]
    LengthMismatch { range: usize, ship: usize },
    /// Part of the range lies off the board.
    #[error("location {0} is not on the board")]
    OutOfBounds(Location),
    /// A cell of the range already holds a ship.
    #[error("location {0} is already occupied")]
    AlreadyOccupied(Location),
    /// No free range could be found for the ship.
    #[error("no free range found for the ship")]
    NoRoom,
}

/// Error caused when attempting to place a ship on an invalid range. Hands the ship
/// back to the caller.
#[derive(Error)]
#[error("could not place ship: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the ship that was not placed.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular location could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The location selected was not on the board.
    #[error("the location is not on the board")]
    OutOfBounds,
}

/// Error returned when trying to shoot a location.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot location {location}: {reason}")]
pub struct ShotError {
    /// Reason why the location could not be shot.
    reason: CannotShootReason,

    /// The location that was targeted.
    location: Location,
}

impl ShotError {
    pub(super) fn new(reason: CannotShootReason, location: Location) -> Self {
        Self { reason, location }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the targeted location.
    pub fn location(&self) -> Location {
        self.location
    }
}
