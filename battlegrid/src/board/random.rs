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
//! Random placement of ships, enabled by the `rng_gen` feature.

use log::debug;
use rand::Rng;

use crate::{
    board::{Board, CannotPlaceReason, PlaceError, ShipKey},
    location::LocationRange,
    ships::Ship,
};

/// Number of random ranges tried before giving up on a ship.
const MAX_ATTEMPTS: usize = 100;

impl Board {
    /// Pick a random range where `ship` could be placed right now. Returns `None` if the
    /// ship cannot fit on this board or no free range was found after a bounded number of
    /// attempts. Ships of length 1 never fit, since a range spans at least two locations.
    pub fn random_range<R: Rng>(&self, ship: &Ship, rng: &mut R) -> Option<LocationRange> {
        let width = self.width();
        let len = ship.len();
        if len < 2 || len > width {
            return None;
        }
        for _ in 0..MAX_ATTEMPTS {
            let horizontal: bool = rng.gen();
            let (rows, columns) = if horizontal {
                (width, width - len + 1)
            } else {
                (width - len + 1, width)
            };
            let row = rng.gen_range(0, rows);
            let column = rng.gen_range(0, columns);
            let start = self.grid.location_at(row, column);
            let end = if horizontal {
                self.grid.location_at(row, column + len - 1)
            } else {
                self.grid.location_at(row + len - 1, column)
            };
            let range = match LocationRange::between(start, end) {
                Ok(range) => range,
                Err(_) => continue,
            };
            if self.check_placement(ship, &range).is_ok() {
                return Some(range);
            }
        }
        debug!("no free range found for {}", ship.kind());
        None
    }

    /// Place `ship` on a random free range.
    pub fn place_randomly<R: Rng>(
        &mut self,
        ship: Ship,
        rng: &mut R,
    ) -> Result<ShipKey, PlaceError> {
        match self.random_range(&ship, rng) {
            Some(range) => self.place(ship, &range),
            None => Err(PlaceError::new(CannotPlaceReason::NoRoom, ship)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::ships::ShipClass;

    #[test]
    fn places_the_standard_fleet() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::default();
        for class in ShipClass::ALL.iter() {
            board.place_randomly(Ship::from(*class), &mut rng).unwrap();
        }
        let occupied = board
            .grid
            .rows()
            .flatten()
            .filter(|location| board.is_occupied(location))
            .count();
        assert_eq!(occupied, 17);
    }

    #[test]
    fn too_long_for_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(4);
        let err = board.place_randomly(Ship::carrier(), &mut rng).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::NoRoom);
    }
}
