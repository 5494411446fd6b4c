//! Type definitions for the survival predictor

pub mod passenger;
pub mod prediction;

pub use passenger::{EmbarkPort, Passenger, PassengerClass, Sex};
pub use prediction::{Outcome, Prediction};
