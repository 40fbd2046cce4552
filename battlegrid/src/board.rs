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
//! The board: which ship occupies each location and where shots have landed.

use std::fmt;

use log::debug;

use crate::{
    location::{Location, LocationRange},
    ships::Ship,
};

use self::grid::Grid;
pub use self::errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError};

mod errors;
mod grid;
#[cfg(feature = "rng_gen")]
mod random;
mod render;

/// Widest supported board. Rows are lettered `A` to `Z`.
pub const MAX_WIDTH: usize = 26;

/// Width of the classic board.
pub const DEFAULT_WIDTH: usize = 10;

/// Handle to a ship placed on a [`Board`]. Only meaningful for the board that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShipKey(usize);

/// What a shot recorded at a location.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShotResult {
    /// The shot struck a ship.
    Hit,
    /// The shot landed in open water.
    Miss,
}

impl ShotResult {
    /// Single-letter code used when rendering the board.
    pub fn code(self) -> &'static str {
        match self {
            ShotResult::Hit => "H",
            ShotResult::Miss => "M",
        }
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of a shot that landed on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the given ship, which is still afloat.
    Hit(ShipKey),
    /// The shot hit the given ship and it has no strength left.
    Sunk(ShipKey),
}

impl ShotOutcome {
    /// Get the key of the ship that was hit.
    pub fn ship(&self) -> Option<ShipKey> {
        match *self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(key) | ShotOutcome::Sunk(key) => Some(key),
        }
    }

    /// The result recorded in the shot history for this outcome.
    pub fn result(&self) -> ShotResult {
        match self {
            ShotOutcome::Miss => ShotResult::Miss,
            ShotOutcome::Hit(_) | ShotOutcome::Sunk(_) => ShotResult::Hit,
        }
    }
}

/// Reference to a particular cell of the board.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    location: Location,
    shot: Option<ShotResult>,
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The location of this cell.
    pub fn location(&self) -> Location {
        self.location
    }

    /// What the last shot at this cell recorded, if it was ever shot.
    pub fn shot(&self) -> Option<ShotResult> {
        self.shot
    }

    /// The ship occupying this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }
}

/// A square battleground for one game session: ship occupancy plus shot history.
///
/// Ships are handed to the board with [`place`][Board::place] and are referred to by
/// [`ShipKey`] afterwards. Every cell a ship covers points at the same ship, so damage
/// taken through one cell is seen through all of them.
#[derive(Debug)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,

    /// All placed ships, indexed by [`ShipKey`].
    ships: Vec<Ship>,
}

impl Board {
    /// Create a `width` by `width` board with no ships and no shots.
    /// Panics if `width` is 0 or greater than [`MAX_WIDTH`].
    pub fn new(width: usize) -> Self {
        match Self::try_new(width) {
            Some(board) => board,
            None => panic!("board width must be in 1..={}, got {}", MAX_WIDTH, width),
        }
    }

    /// Create a `width` by `width` board. Returns `None` if `width` is 0 or greater than
    /// [`MAX_WIDTH`].
    pub fn try_new(width: usize) -> Option<Self> {
        if width == 0 || width > MAX_WIDTH {
            None
        } else {
            Some(Self {
                grid: Grid::new(width),
                ships: Vec::new(),
            })
        }
    }

    /// Number of rows, which is also the number of columns.
    pub fn width(&self) -> usize {
        self.grid.width
    }

    /// Returns true if `location` is on this board.
    pub fn is_valid_location(&self, location: &Location) -> bool {
        self.grid.get(location).is_some()
    }

    /// Check whether `ship` could be placed on `range` without placing it.
    ///
    /// The range is first checked against the board and ship (see
    /// [`LocationRange::validate_for`]), then every location is checked in range order.
    /// The first location that is off the board or already occupied is reported.
    pub fn check_placement(
        &self,
        ship: &Ship,
        range: &LocationRange,
    ) -> Result<(), CannotPlaceReason> {
        range.validate_for(self, ship)?;
        for location in range {
            match self.grid.get(location) {
                None => return Err(CannotPlaceReason::OutOfBounds(*location)),
                Some(cell) if cell.ship.is_some() => {
                    return Err(CannotPlaceReason::AlreadyOccupied(*location))
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Place `ship` on `range`, returning the key the board will know it by. On failure
    /// the board is unchanged and the ship is returned inside the error.
    pub fn place(&mut self, ship: Ship, range: &LocationRange) -> Result<ShipKey, PlaceError> {
        if let Err(reason) = self.check_placement(&ship, range) {
            debug!("rejected {} at {}: {}", ship.kind(), range, reason);
            return Err(PlaceError::new(reason, ship));
        }
        let key = ShipKey(self.ships.len());
        // Already ensured that every location is on the board and free.
        for location in range {
            self.grid[location].ship = Some(key);
        }
        debug!("placed {} at {}", ship.kind(), range);
        self.ships.push(ship);
        Ok(key)
    }

    /// Returns true if a ship occupies `location`. Locations off the board are simply
    /// unoccupied.
    pub fn is_occupied(&self, location: &Location) -> bool {
        self.grid
            .get(location)
            .map_or(false, |cell| cell.ship.is_some())
    }

    /// The ship occupying `location`, if any.
    pub fn occupant(&self, location: &Location) -> Option<&Ship> {
        self.grid
            .get(location)
            .and_then(|cell| cell.ship)
            .and_then(|key| self.ship(key))
    }

    /// Get the ship with the given key.
    pub fn ship(&self, key: ShipKey) -> Option<&Ship> {
        self.ships.get(key.0)
    }

    /// Iterate every ship on the board in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = (ShipKey, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .map(|(i, ship)| (ShipKey(i), ship))
    }

    /// Returns true if none of the placed ships is afloat. A board with no ships counts
    /// as defeated.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|ship| !ship.is_afloat())
    }

    /// What was recorded at `location`, if it has been shot.
    pub fn shot_at(&self, location: &Location) -> Option<ShotResult> {
        self.grid.get(location).and_then(|cell| cell.shot)
    }

    /// Get a reference to the cell at `location`. Returns `None` if it is off the board.
    pub fn cell(&self, location: Location) -> Option<CellRef<'_>> {
        self.grid.get(location).map(|cell| CellRef {
            location,
            shot: cell.shot,
            ship: cell.ship.and_then(|key| self.ship(key)),
        })
    }

    /// Fire a shot at `location`.
    ///
    /// A shot at an occupied location takes one point of strength from the ship there
    /// and records a hit, even if the location was shot before. Otherwise a miss is
    /// recorded. Nothing is recorded for a location off the board.
    pub fn shoot(&mut self, location: Location) -> Result<ShotOutcome, ShotError> {
        let cell = match self.grid.get_mut(location) {
            Some(cell) => cell,
            None => {
                debug!("shot at {} is off the board", location);
                return Err(ShotError::new(CannotShootReason::OutOfBounds, location));
            }
        };
        let outcome = match cell.ship {
            None => ShotOutcome::Miss,
            Some(key) => {
                let ship = &mut self.ships[key.0];
                ship.on_impact();
                if ship.is_afloat() {
                    ShotOutcome::Hit(key)
                } else {
                    ShotOutcome::Sunk(key)
                }
            }
        };
        cell.shot = Some(outcome.result());
        debug!("shot at {}: {:?}", location, outcome);
        Ok(outcome)
    }

    /// Attack the location named by `code` and describe the outcome for a player.
    ///
    /// Unparseable codes and locations off the board are answered with a message asking
    /// for another location, and no shot is recorded.
    pub fn attack(&mut self, code: &str) -> String {
        let outcome = Location::parse(code)
            .map_err(|err| debug!("attack rejected: {}", err))
            .and_then(|location| self.shoot(location).map_err(|_| ()))
            .ok();
        outcome
            .and_then(|outcome| self.describe(outcome))
            .unwrap_or_else(|| {
                format!("Invalid Location {}. Please select another location.", code)
            })
    }

    /// Human-readable description of a shot outcome on this board. Returns `None` if the
    /// outcome names a ship this board does not hold.
    pub fn describe(&self, outcome: ShotOutcome) -> Option<String> {
        Some(match outcome {
            ShotOutcome::Miss => "Miss!".to_owned(),
            ShotOutcome::Hit(key) => format!("Hit. {}.", self.ship(key)?.kind()),
            ShotOutcome::Sunk(key) => {
                let ship = self.ship(key)?;
                format!("Sunk {} of length {}!", ship.kind(), ship.len())
            }
        })
    }
}

impl Default for Board {
    /// Construct the classic 10x10 board.
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.display())
    }
}
