//! Wagon classes and wagons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Class of a passenger wagon, which decides how many seats it has.
///
/// Declaration order is the order classes are listed in by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WagonType {
    /// Sleeping car with two-berth compartments.
    Sleeper,
    /// Four-berth closed compartments.
    Compartment,
    /// Open-plan berths.
    Plazkart,
}

impl WagonType {
    /// All wagon classes in declaration order.
    pub const ALL: [WagonType; 3] = [
        WagonType::Sleeper,
        WagonType::Compartment,
        WagonType::Plazkart,
    ];

    /// Returns the display name of the class.
    pub fn as_str(&self) -> &'static str {
        match self {
            WagonType::Sleeper => "Sleeper",
            WagonType::Compartment => "Compartment",
            WagonType::Plazkart => "Plazkart",
        }
    }
}

impl fmt::Display for WagonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single wagon attached to a train.
///
/// `occupied_seats` is the number of tickets sold for the wagon's whole
/// class, not the share seated in this particular wagon. Every wagon of
/// a class formed together carries the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wagon {
    wagon_type: WagonType,
    occupied_seats: u32,
    total_seats: u32,
}

impl Wagon {
    /// Creates a wagon.
    pub fn new(wagon_type: WagonType, occupied_seats: u32, total_seats: u32) -> Self {
        Self {
            wagon_type,
            occupied_seats,
            total_seats,
        }
    }

    pub fn wagon_type(&self) -> WagonType {
        self.wagon_type
    }

    pub fn occupied_seats(&self) -> u32 {
        self.occupied_seats
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }
}
