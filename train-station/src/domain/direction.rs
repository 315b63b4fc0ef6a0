//! Route between two stations.

use std::fmt;

/// Error returned when the departure and arrival stations are the same.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("departure station cannot be the same as arrival station: {station}")]
pub struct DuplicateStation {
    station: String,
}

impl DuplicateStation {
    /// The station name that was given for both ends, as entered for departure.
    pub fn station(&self) -> &str {
        &self.station
    }
}

/// A route from a departure station to an arrival station.
///
/// Station names are free text. The only rule is that both ends differ,
/// compared case-insensitively, so any `Direction` is a real route.
///
/// # Examples
///
/// ```
/// use train_station::domain::Direction;
///
/// let route = Direction::new("Moscow", "Kazan").unwrap();
/// assert_eq!(route.departure(), "Moscow");
/// assert_eq!(route.arrival(), "Kazan");
///
/// // Same station in a different case is rejected
/// assert!(Direction::new("Kazan", "kazan").is_err());
///
/// // Empty names are accepted
/// assert!(Direction::new("", "Kazan").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Direction {
    departure: String,
    arrival: String,
}

impl Direction {
    /// Create a direction, rejecting routes that start and end at the same station.
    pub fn new(
        departure: impl Into<String>,
        arrival: impl Into<String>,
    ) -> Result<Self, DuplicateStation> {
        let departure = departure.into();
        let arrival = arrival.into();

        if departure.to_lowercase() == arrival.to_lowercase() {
            return Err(DuplicateStation { station: departure });
        }

        Ok(Self { departure, arrival })
    }

    /// Returns the departure station name.
    pub fn departure(&self) -> &str {
        &self.departure
    }

    /// Returns the arrival station name.
    pub fn arrival(&self) -> &str {
        &self.arrival
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.departure, self.arrival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_stations() {
        let route = Direction::new("Moscow", "Kazan").unwrap();
        assert_eq!(route.departure(), "Moscow");
        assert_eq!(route.arrival(), "Kazan");
    }

    #[test]
    fn reject_identical_stations() {
        let err = Direction::new("Kazan", "Kazan").unwrap_err();
        assert_eq!(err.station(), "Kazan");
    }

    #[test]
    fn reject_case_variants() {
        assert!(Direction::new("Kazan", "kazan").is_err());
        assert!(Direction::new("KAZAN", "kAzAn").is_err());
        assert!(Direction::new("Казань", "КАЗАНЬ").is_err());
    }

    #[test]
    fn empty_names_accepted() {
        assert!(Direction::new("", "Kazan").is_ok());
        assert!(Direction::new("Moscow", "").is_ok());
    }

    #[test]
    fn both_empty_rejected() {
        assert!(Direction::new("", "").is_err());
    }

    #[test]
    fn whitespace_is_significant() {
        assert!(Direction::new("Kazan ", "Kazan").is_ok());
    }

    #[test]
    fn display() {
        let route = Direction::new("Moscow", "Kazan").unwrap();
        assert_eq!(route.to_string(), "Moscow - Kazan");
    }

    #[test]
    fn error_display() {
        let err = Direction::new("Kazan", "kazan").unwrap_err();
        assert_eq!(
            err.to_string(),
            "departure station cannot be the same as arrival station: Kazan"
        );
    }
}
