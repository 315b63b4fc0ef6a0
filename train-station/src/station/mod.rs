//! The station: owns every train of the session and drives each one
//! through ticket sales, formation and departure.

mod config;
mod error;
mod workflow;

pub use config::{ConfigError, StationConfig};
pub use error::StationError;
pub use workflow::{Station, TicketSale};
