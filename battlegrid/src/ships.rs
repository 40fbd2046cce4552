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
//! Ships and the catalog of standard ship classes.

/// The standard fleet. Each class has a fixed display name and length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipClass {
    /// Every class in the standard fleet, largest first.
    pub const ALL: [ShipClass; 5] = [
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Submarine,
        ShipClass::Destroyer,
    ];

    /// Display name of this class.
    pub fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
        }
    }

    /// Get the length of this ship class.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }
}

/// A sinkable ship. Starts with strength equal to its length and loses one point per
/// impact.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Display name, e.g. `Cruiser`.
    kind: String,
    /// Number of cells the ship covers.
    length: usize,
    /// Remaining hit points. Never exceeds `length`.
    strength: usize,
}

impl Ship {
    /// Construct a ship of the given kind and length. Panics if length is 0.
    pub fn new<K: Into<String>>(kind: K, length: usize) -> Self {
        assert!(length > 0, "ship length must be nonzero");
        Self {
            kind: kind.into(),
            length,
            strength: length,
        }
    }

    /// Construct a ship of the given kind and length. Returns `None` if length is 0.
    pub fn try_new<K: Into<String>>(kind: K, length: usize) -> Option<Self> {
        if length == 0 {
            None
        } else {
            Some(Self::new(kind, length))
        }
    }

    /// A carrier from the standard fleet.
    pub fn carrier() -> Self {
        ShipClass::Carrier.into()
    }

    /// A battleship from the standard fleet.
    pub fn battleship() -> Self {
        ShipClass::Battleship.into()
    }

    /// A cruiser from the standard fleet.
    pub fn cruiser() -> Self {
        ShipClass::Cruiser.into()
    }

    /// A submarine from the standard fleet.
    pub fn submarine() -> Self {
        ShipClass::Submarine.into()
    }

    /// A destroyer from the standard fleet.
    pub fn destroyer() -> Self {
        ShipClass::Destroyer.into()
    }

    /// Display name of the ship.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Remaining strength of the ship.
    pub fn strength(&self) -> usize {
        self.strength
    }

    /// Register one impact. Strength bottoms out at zero, so impacts on a ship that is
    /// already sunk change nothing.
    pub fn on_impact(&mut self) {
        self.strength = self.strength.saturating_sub(1);
    }

    /// Returns true while the ship has strength left.
    pub fn is_afloat(&self) -> bool {
        self.strength > 0
    }
}

impl From<ShipClass> for Ship {
    fn from(class: ShipClass) -> Self {
        Self::new(class.name(), class.len())
    }
}
