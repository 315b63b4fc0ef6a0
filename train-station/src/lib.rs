//! Train station ticketing simulation.
//!
//! An operator opens a direction between two stations, tickets are sold
//! at random for every wagon class, the train is formed from just enough
//! wagons to seat everyone, and finally the train is sent.

pub mod catalog;
pub mod console;
pub mod domain;
pub mod station;
