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
//! Board core for the classic game Battleship.
//!
//! A [`Board`] is a square grid whose rows are lettered from `A` and whose columns are
//! numbered from 1. Ships are placed on straight [`LocationRange`]s built from two
//! location codes, then shots are fired at single [`Location`]s:
//!
//! ```
//! use battlegrid::{Board, LocationRange, Ship};
//!
//! let mut board = Board::new(4);
//! let range = LocationRange::new("A1", "A3").unwrap();
//! board.place(Ship::cruiser(), &range).unwrap();
//!
//! assert_eq!(board.attack("A2"), "Hit. Cruiser.");
//! assert_eq!(board.attack("B1"), "Miss!");
//! ```
//!
//! Turn order, input handling, and opponents are left to the caller.

pub mod board;
pub mod location;
pub mod ships;

pub use crate::{
    board::{
        Board, CannotPlaceReason, CannotShootReason, CellRef, PlaceError, ShipKey, ShotError,
        ShotOutcome, ShotResult, DEFAULT_WIDTH, MAX_WIDTH,
    },
    location::{
        Axis, InvalidLocationReason, Location, LocationRange, ParseLocationError, RangeError,
    },
    ships::{Ship, ShipClass},
};
