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
//! Dense cell storage backing the [`Board`][crate::board::Board].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::{
    board::{ShipKey, ShotResult},
    location::{Location, FIRST_ROW},
};

/// A single cell in the grid.
#[derive(Debug, Default)]
pub(super) struct GridCell {
    /// The ship that occupies this cell, if any.
    pub(super) ship: Option<ShipKey>,

    /// Outcome of the last shot at this cell. `None` until the cell is attacked.
    pub(super) shot: Option<ShotResult>,
}

/// Square grid of cells, `width` rows lettered from `A` by `width` columns numbered from 1.
#[derive(Debug)]
pub(super) struct Grid {
    /// Number of rows and of columns.
    pub(super) width: usize,
    /// Cells in row-major order.
    cells: Box<[GridCell]>,
}

impl Grid {
    /// Allocate an empty grid. The caller bounds `width`.
    pub(super) fn new(width: usize) -> Self {
        let cells = (0..width * width).map(|_| Default::default()).collect();
        Self { width, cells }
    }

    /// Convert a location to a linear index. Returns `None` if it is off the grid.
    fn try_linearize(&self, location: &Location) -> Option<usize> {
        let row = location.row_index();
        let column = (location.column() as usize).checked_sub(1)?;
        if row < self.width && column < self.width {
            Some(row * self.width + column)
        } else {
            None
        }
    }

    /// The location at a zero-based row and column. Both must be below `width`.
    pub(super) fn location_at(&self, row: usize, column: usize) -> Location {
        debug_assert!(row < self.width && column < self.width);
        Location::from_parts(FIRST_ROW + row as u8, column as u32 + 1)
    }

    /// Get a reference to the cell at the given [`Location`].
    pub(super) fn get<B: Borrow<Location>>(&self, location: B) -> Option<&GridCell> {
        self.try_linearize(location.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Location`].
    pub(super) fn get_mut<B: Borrow<Location>>(&mut self, location: B) -> Option<&mut GridCell> {
        self.try_linearize(location.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the rows of the grid. Each row is an iterator over its locations.
    pub(super) fn rows(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Location>> {
        let width = self.width;
        (0..width).map(move |row| (0..width).map(move |column| self.location_at(row, column)))
    }
}

impl<B: Borrow<Location>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, location: B) -> &Self::Output {
        self.get(location).expect("location out of bounds")
    }
}

impl<B: Borrow<Location>> IndexMut<B> for Grid {
    fn index_mut(&mut self, location: B) -> &mut Self::Output {
        self.get_mut(location).expect("location out of bounds")
    }
}
