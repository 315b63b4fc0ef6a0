//! Station workflow: direction → tickets → wagons → departure.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::config::StationConfig;
use super::error::StationError;
use crate::catalog::{CatalogError, WagonCatalog, wagons_needed};
use crate::domain::{Direction, Train, TrainStatus, Wagon, WagonType};

/// Tickets sold for one wagon class in the latest sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketSale {
    pub wagon_type: WagonType,
    pub sold: u32,
}

/// Session-wide aggregate of every train created during the run.
///
/// Operations always act on the most recently created train. The running
/// passenger total is never reset, so a train's passenger count includes
/// every ticket sold at this station before it.
pub struct Station {
    catalog: WagonCatalog,
    trains: Vec<Train>,
    latest_sale: Vec<TicketSale>,
    total_passengers: u32,
    rng: ChaCha8Rng,
}

impl Station {
    /// Create an empty station. `seed` makes ticket sales reproducible.
    pub fn new(catalog: WagonCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Self {
            catalog,
            trains: Vec::new(),
            latest_sale: Vec::new(),
            total_passengers: 0,
            rng,
        }
    }

    /// Create a station from configuration.
    pub fn from_config(config: &StationConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(config.catalog()?, config.seed))
    }

    pub fn catalog(&self) -> &WagonCatalog {
        &self.catalog
    }

    /// All trains in creation order.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// The train that operations currently act on.
    pub fn current_train(&self) -> Option<&Train> {
        self.trains.last()
    }

    /// Running passenger total across every sale at this station.
    pub fn total_passengers(&self) -> u32 {
        self.total_passengers
    }

    /// Per-class results of the most recent ticket sale, in catalog order.
    pub fn latest_sale(&self) -> &[TicketSale] {
        &self.latest_sale
    }

    /// Open a new direction and append a train for it.
    ///
    /// On a duplicate station nothing is appended.
    pub fn create_direction(
        &mut self,
        departure: &str,
        arrival: &str,
    ) -> Result<&Train, StationError> {
        let direction = match Direction::new(departure, arrival) {
            Ok(direction) => direction,
            Err(e) => {
                warn!(departure, arrival, "Rejected direction");
                return Err(e.into());
            }
        };

        info!(%direction, "Direction created");
        self.trains
            .push(Train::new(direction, 0, TrainStatus::DirectionCreated));

        self.current_train().ok_or(StationError::NoActiveTrain)
    }

    /// Sell tickets for every class of the current train.
    ///
    /// Each class sells a uniform draw from `1..=max_passengers`. The draws
    /// replace the previous sale and are added to the running total, which
    /// becomes the train's passenger count. If the running total would
    /// overflow, neither the station nor the train changes.
    pub fn sell_tickets(&mut self) -> Result<&[TicketSale], StationError> {
        if self.trains.is_empty() {
            return Err(StationError::NoActiveTrain);
        }

        let mut sale = Vec::with_capacity(self.catalog.classes().len());
        let mut total = self.total_passengers;

        for class in self.catalog.classes() {
            let sold = self.rng.gen_range(1..=class.max_passengers);
            debug!(wagon_type = %class.wagon_type, sold, "Tickets sold");

            total = total
                .checked_add(sold)
                .ok_or(StationError::PassengerOverflow)?;
            sale.push(TicketSale {
                wagon_type: class.wagon_type,
                sold,
            });
        }

        self.current_train_mut()?
            .update(total, TrainStatus::TicketsSold, None);
        self.total_passengers = total;
        self.latest_sale = sale;

        Ok(&self.latest_sale)
    }

    /// Form the current train from the latest sale.
    ///
    /// Each class gets just enough wagons to seat its sold tickets, and every
    /// one of those wagons records the class's full sold count as occupied.
    pub fn create_wagons(&mut self) -> Result<&Train, StationError> {
        if self.trains.is_empty() {
            return Err(StationError::NoActiveTrain);
        }

        let mut wagons = Vec::new();

        for sale in &self.latest_sale {
            let seats = self.catalog.seats_for(sale.wagon_type)?;
            let count = wagons_needed(sale.sold, seats);
            debug!(wagon_type = %sale.wagon_type, sold = sale.sold, count, "Wagons needed");

            wagons.extend((0..count).map(|_| Wagon::new(sale.wagon_type, sale.sold, seats)));
        }

        let total = self.total_passengers;
        let train = self.current_train_mut()?;
        train.update(total, TrainStatus::TrainFormed, Some(wagons));

        info!(
            direction = %train.direction(),
            wagons = train.wagon_count(),
            seats = train.total_seats(),
            "Train formed"
        );

        Ok(&*train)
    }

    /// Send the current train. Wagons are left as they are.
    pub fn send_train(&mut self) -> Result<&Train, StationError> {
        let total = self.total_passengers;
        let train = self.current_train_mut()?;
        train.update(total, TrainStatus::TrainSent, None);

        info!(
            direction = %train.direction(),
            passengers = train.total_passengers(),
            "Train sent"
        );

        Ok(&*train)
    }

    /// Run the whole workflow for a new direction.
    ///
    /// `on_step` is called with the station after the direction is created,
    /// after tickets are sold and after the train is formed. A rejected
    /// direction stops the run before any train is created.
    pub fn perform_train_operations<F>(
        &mut self,
        departure: &str,
        arrival: &str,
        mut on_step: F,
    ) -> Result<&Train, StationError>
    where
        F: FnMut(&Station),
    {
        self.create_direction(departure, arrival)?;
        on_step(&*self);

        self.sell_tickets()?;
        on_step(&*self);

        self.create_wagons()?;
        on_step(&*self);

        self.send_train()
    }

    fn current_train_mut(&mut self) -> Result<&mut Train, StationError> {
        self.trains.last_mut().ok_or(StationError::NoActiveTrain)
    }
}
