//! Domain types for the ticketing simulation.
//!
//! `Direction` and `Wagon` are immutable values validated at construction.
//! `Train` is the one mutable entity; its status is a plain holder and
//! progresses only because the station drives it in order.

mod direction;
mod train;
mod wagon;

pub use direction::{Direction, DuplicateStation};
pub use train::{Train, TrainStatus};
pub use wagon::{Wagon, WagonType};
