//! Train lifecycle record.

use std::fmt;

use super::{Direction, Wagon, WagonType};

/// Where a train is in the station workflow.
///
/// The variants are listed in the order the station moves a train through
/// them. Nothing in [`Train`] enforces that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TrainStatus {
    /// Constructor default; the station never leaves a train here.
    #[default]
    NoDirection,
    DirectionCreated,
    TicketsSold,
    TrainFormed,
    /// Terminal state.
    TrainSent,
}

impl TrainStatus {
    /// Returns a human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainStatus::NoDirection => "No direction",
            TrainStatus::DirectionCreated => "Direction created",
            TrainStatus::TicketsSold => "Tickets sold",
            TrainStatus::TrainFormed => "Train formed",
            TrainStatus::TrainSent => "Train sent",
        }
    }

    /// Returns true once wagons have been attached to the train.
    pub fn is_formed(&self) -> bool {
        matches!(self, TrainStatus::TrainFormed | TrainStatus::TrainSent)
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One route's train: its status, passenger count and wagons.
///
/// `update` is a plain setter. Any status may follow any other, and the
/// passenger count is overwritten as given; ordering is the station's job.
/// Wagons are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    direction: Direction,
    status: TrainStatus,
    total_passengers: u32,
    wagons: Vec<Wagon>,
}

impl Train {
    /// Creates a train with no wagons.
    pub fn new(direction: Direction, total_passengers: u32, status: TrainStatus) -> Self {
        Self {
            direction,
            status,
            total_passengers,
            wagons: Vec::new(),
        }
    }

    /// Overwrite the passenger count and status, appending `wagons` if given.
    pub fn update(
        &mut self,
        total_passengers: u32,
        status: TrainStatus,
        wagons: Option<Vec<Wagon>>,
    ) {
        self.total_passengers = total_passengers;
        self.status = status;

        if let Some(wagons) = wagons {
            self.wagons.extend(wagons);
        }
    }

    pub fn direction(&self) -> &Direction {
        &self.direction
    }

    pub fn status(&self) -> TrainStatus {
        self.status
    }

    pub fn total_passengers(&self) -> u32 {
        self.total_passengers
    }

    /// Wagons in the order they were attached.
    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    /// Total number of attached wagons.
    pub fn wagon_count(&self) -> usize {
        self.wagons.len()
    }

    /// Sum of seats over all attached wagons.
    pub fn total_seats(&self) -> u64 {
        self.wagons.iter().map(|w| u64::from(w.total_seats())).sum()
    }

    /// Number of attached wagons of the given class.
    pub fn wagon_count_by_type(&self, wagon_type: WagonType) -> usize {
        self.wagons
            .iter()
            .filter(|w| w.wagon_type() == wagon_type)
            .count()
    }
}

impl fmt::Display for Train {
    /// Trip summary: route, capacity, wagon and passenger counts, then
    /// wagon counts per class.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trip info: route {}, train capacity {}, total wagons {}, total passengers {}.",
            self.direction,
            self.total_seats(),
            self.wagon_count(),
            self.total_passengers
        )?;

        let per_type: Vec<String> = WagonType::ALL
            .iter()
            .map(|t| format!("{} wagons - {}", t, self.wagon_count_by_type(*t)))
            .collect();
        write!(f, "{}", per_type.join(", "))
    }
}
