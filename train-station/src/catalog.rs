//! Wagon catalog: seats per wagon and ticket limits per wagon class.
//!
//! The catalog decides how many tickets can be sold for each class and
//! how many wagons of that class are needed to seat them.

use serde::{Deserialize, Serialize};

use crate::domain::WagonType;

/// Returned when the catalog has no entry for a wagon class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown wagon type: {0}")]
pub struct UnknownWagonType(pub WagonType);

/// Errors from building a catalog out of class entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A wagon class has zero seats, so no wagon count could seat anyone
    #[error("{0} wagons must have at least one seat")]
    NoSeats(WagonType),

    /// A wagon class allows no tickets to be sold
    #[error("{0} must allow at least one passenger")]
    NoPassengers(WagonType),

    /// The same wagon class is listed more than once
    #[error("{0} is listed more than once")]
    DuplicateClass(WagonType),

    /// A wagon class has more seats per wagon than any real wagon
    #[error("{0} wagons cannot have more than {max} seats", max = MAX_SEATS_PER_WAGON)]
    TooManySeats(WagonType),

    /// A wagon class allows more tickets than one train can carry
    #[error("{0} cannot allow more than {max} passengers", max = MAX_PASSENGERS_PER_CLASS)]
    TooManyPassengers(WagonType),

    /// A full sale of a wagon class would need more wagons than a train can haul
    #[error("{0} could need more than {max} wagons", max = MAX_WAGONS_PER_CLASS)]
    TooManyWagons(WagonType),
}

/// Upper bound on seats in a single wagon.
pub const MAX_SEATS_PER_WAGON: u32 = 200;

/// Upper bound on tickets sold for one wagon class per train.
pub const MAX_PASSENGERS_PER_CLASS: u32 = 10_000;

/// Upper bound on wagons of one class a single sale can require.
pub const MAX_WAGONS_PER_CLASS: u32 = 100;

/// Catalog entry for one wagon class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagonClass {
    pub wagon_type: WagonType,

    /// Seats in a single wagon of this class.
    pub seats_per_wagon: u32,

    /// Upper bound (inclusive) on tickets sold for this class per train.
    pub max_passengers: u32,
}

impl WagonClass {
    pub fn new(wagon_type: WagonType, seats_per_wagon: u32, max_passengers: u32) -> Self {
        Self {
            wagon_type,
            seats_per_wagon,
            max_passengers,
        }
    }
}

/// Validated lookup of wagon classes, in listing order.
///
/// Every entry has between 1 and [`MAX_SEATS_PER_WAGON`] seats, allows
/// between 1 and [`MAX_PASSENGERS_PER_CLASS`] passengers, and never needs
/// more than [`MAX_WAGONS_PER_CLASS`] wagons to seat a full sale.
///
/// # Examples
///
/// ```
/// use train_station::catalog::WagonCatalog;
/// use train_station::domain::WagonType;
///
/// let catalog = WagonCatalog::default();
/// assert_eq!(catalog.seats_for(WagonType::Plazkart), Ok(54));
/// assert_eq!(catalog.max_passengers_for(WagonType::Sleeper), Ok(167));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WagonCatalog {
    classes: Vec<WagonClass>,
}

impl WagonCatalog {
    /// Build a catalog from class entries, keeping their order.
    pub fn new(classes: Vec<WagonClass>) -> Result<Self, CatalogError> {
        for (i, class) in classes.iter().enumerate() {
            if class.seats_per_wagon == 0 {
                return Err(CatalogError::NoSeats(class.wagon_type));
            }
            if class.max_passengers == 0 {
                return Err(CatalogError::NoPassengers(class.wagon_type));
            }
            if class.seats_per_wagon > MAX_SEATS_PER_WAGON {
                return Err(CatalogError::TooManySeats(class.wagon_type));
            }
            if class.max_passengers > MAX_PASSENGERS_PER_CLASS {
                return Err(CatalogError::TooManyPassengers(class.wagon_type));
            }
            let full_sale_wagons = wagons_needed(class.max_passengers, class.seats_per_wagon);
            if full_sale_wagons > MAX_WAGONS_PER_CLASS {
                return Err(CatalogError::TooManyWagons(class.wagon_type));
            }
            if classes[..i].iter().any(|c| c.wagon_type == class.wagon_type) {
                return Err(CatalogError::DuplicateClass(class.wagon_type));
            }
        }

        Ok(Self { classes })
    }

    /// Seats in one wagon of the given class.
    pub fn seats_for(&self, wagon_type: WagonType) -> Result<u32, UnknownWagonType> {
        self.class(wagon_type).map(|c| c.seats_per_wagon)
    }

    /// Maximum tickets that can be sold for the given class.
    pub fn max_passengers_for(&self, wagon_type: WagonType) -> Result<u32, UnknownWagonType> {
        self.class(wagon_type).map(|c| c.max_passengers)
    }

    /// Catalog entries in listing order.
    pub fn classes(&self) -> &[WagonClass] {
        &self.classes
    }

    fn class(&self, wagon_type: WagonType) -> Result<&WagonClass, UnknownWagonType> {
        self.classes
            .iter()
            .find(|c| c.wagon_type == wagon_type)
            .ok_or(UnknownWagonType(wagon_type))
    }
}

impl Default for WagonCatalog {
    fn default() -> Self {
        Self {
            classes: default_classes(),
        }
    }
}

/// The standard catalog: sleeper, compartment and plazkart wagons.
pub fn default_classes() -> Vec<WagonClass> {
    vec![
        WagonClass::new(WagonType::Sleeper, 18, 167),
        WagonClass::new(WagonType::Compartment, 36, 333),
        WagonClass::new(WagonType::Plazkart, 54, 500),
    ]
}

/// Number of wagons needed to seat `passengers` at `seats_per_wagon` each.
///
/// `seats_per_wagon` must be non-zero; catalog entries always are.
pub fn wagons_needed(passengers: u32, seats_per_wagon: u32) -> u32 {
    passengers.div_ceil(seats_per_wagon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_values() {
        let catalog = WagonCatalog::default();

        assert_eq!(catalog.seats_for(WagonType::Sleeper), Ok(18));
        assert_eq!(catalog.seats_for(WagonType::Compartment), Ok(36));
        assert_eq!(catalog.seats_for(WagonType::Plazkart), Ok(54));

        assert_eq!(catalog.max_passengers_for(WagonType::Sleeper), Ok(167));
        assert_eq!(catalog.max_passengers_for(WagonType::Compartment), Ok(333));
        assert_eq!(catalog.max_passengers_for(WagonType::Plazkart), Ok(500));
    }

    #[test]
    fn default_catalog_is_valid_and_positive() {
        let catalog = WagonCatalog::new(default_classes()).unwrap();
        assert_eq!(catalog, WagonCatalog::default());

        for t in WagonType::ALL {
            assert!(catalog.seats_for(t).unwrap() > 0);
            assert!(catalog.max_passengers_for(t).unwrap() > 0);
        }
    }

    #[test]
    fn default_catalog_order() {
        let order: Vec<_> = WagonCatalog::default()
            .classes()
            .iter()
            .map(|c| c.wagon_type)
            .collect();
        assert_eq!(order, WagonType::ALL.to_vec());
    }

    #[test]
    fn unknown_type_is_an_error() {
        let catalog =
            WagonCatalog::new(vec![WagonClass::new(WagonType::Sleeper, 18, 167)]).unwrap();

        assert_eq!(
            catalog.seats_for(WagonType::Plazkart),
            Err(UnknownWagonType(WagonType::Plazkart))
        );
        assert_eq!(
            catalog.max_passengers_for(WagonType::Compartment),
            Err(UnknownWagonType(WagonType::Compartment))
        );
    }

    #[test]
    fn reject_zero_seats() {
        let err = WagonCatalog::new(vec![WagonClass::new(WagonType::Sleeper, 0, 10)]).unwrap_err();
        assert_eq!(err, CatalogError::NoSeats(WagonType::Sleeper));
    }

    #[test]
    fn reject_zero_passengers() {
        let err = WagonCatalog::new(vec![WagonClass::new(WagonType::Plazkart, 54, 0)]).unwrap_err();
        assert_eq!(err, CatalogError::NoPassengers(WagonType::Plazkart));
    }

    #[test]
    fn reject_duplicate_class() {
        let err = WagonCatalog::new(vec![
            WagonClass::new(WagonType::Compartment, 36, 333),
            WagonClass::new(WagonType::Compartment, 40, 100),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateClass(WagonType::Compartment));
    }

    #[test]
    fn reject_huge_values() {
        let huge = WagonClass::new(WagonType::Sleeper, u32::MAX, u32::MAX);
        let err = WagonCatalog::new(vec![huge]).unwrap_err();
        assert_eq!(err, CatalogError::TooManySeats(WagonType::Sleeper));

        let huge = WagonClass::new(WagonType::Plazkart, 54, u32::MAX);
        let err = WagonCatalog::new(vec![huge]).unwrap_err();
        assert_eq!(err, CatalogError::TooManyPassengers(WagonType::Plazkart));
    }

    #[test]
    fn seat_limit_boundary() {
        let at_limit = WagonClass::new(WagonType::Sleeper, MAX_SEATS_PER_WAGON, 1);
        assert!(WagonCatalog::new(vec![at_limit]).is_ok());

        let over = WagonClass::new(WagonType::Sleeper, MAX_SEATS_PER_WAGON + 1, 1);
        assert_eq!(
            WagonCatalog::new(vec![over]).unwrap_err(),
            CatalogError::TooManySeats(WagonType::Sleeper)
        );
    }

    #[test]
    fn passenger_limit_boundary() {
        let at_limit = WagonClass::new(WagonType::Plazkart, 200, MAX_PASSENGERS_PER_CLASS);
        assert!(WagonCatalog::new(vec![at_limit]).is_ok());

        let over = WagonClass::new(WagonType::Plazkart, 200, MAX_PASSENGERS_PER_CLASS + 1);
        assert_eq!(
            WagonCatalog::new(vec![over]).unwrap_err(),
            CatalogError::TooManyPassengers(WagonType::Plazkart)
        );
    }

    #[test]
    fn wagon_limit_boundary() {
        let at_limit = WagonClass::new(WagonType::Compartment, 1, MAX_WAGONS_PER_CLASS);
        assert!(WagonCatalog::new(vec![at_limit]).is_ok());

        let over = WagonClass::new(WagonType::Compartment, 1, MAX_WAGONS_PER_CLASS + 1);
        assert_eq!(
            WagonCatalog::new(vec![over]).unwrap_err(),
            CatalogError::TooManyWagons(WagonType::Compartment)
        );

        let one_seat_billions = WagonClass::new(WagonType::Compartment, 1, 4_000_000_000);
        assert!(WagonCatalog::new(vec![one_seat_billions]).is_err());
    }

    #[test]
    fn custom_order_is_kept() {
        let catalog = WagonCatalog::new(vec![
            WagonClass::new(WagonType::Plazkart, 54, 500),
            WagonClass::new(WagonType::Sleeper, 18, 167),
        ])
        .unwrap();

        let order: Vec<_> = catalog.classes().iter().map(|c| c.wagon_type).collect();
        assert_eq!(order, vec![WagonType::Plazkart, WagonType::Sleeper]);
    }

    #[test]
    fn wagons_needed_examples() {
        assert_eq!(wagons_needed(54, 54), 1);
        assert_eq!(wagons_needed(55, 54), 2);
        assert_eq!(wagons_needed(0, 54), 0);
        assert_eq!(wagons_needed(1, 18), 1);
        assert_eq!(wagons_needed(167, 18), 10);
        assert_eq!(wagons_needed(333, 36), 10);
        assert_eq!(wagons_needed(500, 54), 10);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            UnknownWagonType(WagonType::Sleeper).to_string(),
            "unknown wagon type: Sleeper"
        );
        assert_eq!(
            CatalogError::NoSeats(WagonType::Plazkart).to_string(),
            "Plazkart wagons must have at least one seat"
        );
        assert_eq!(
            CatalogError::NoPassengers(WagonType::Compartment).to_string(),
            "Compartment must allow at least one passenger"
        );
        assert_eq!(
            CatalogError::DuplicateClass(WagonType::Sleeper).to_string(),
            "Sleeper is listed more than once"
        );
        assert_eq!(
            CatalogError::TooManySeats(WagonType::Sleeper).to_string(),
            "Sleeper wagons cannot have more than 200 seats"
        );
        assert_eq!(
            CatalogError::TooManyPassengers(WagonType::Plazkart).to_string(),
            "Plazkart cannot allow more than 10000 passengers"
        );
        assert_eq!(
            CatalogError::TooManyWagons(WagonType::Compartment).to_string(),
            "Compartment could need more than 100 wagons"
        );
    }
}
