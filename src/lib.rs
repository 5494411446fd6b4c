//! Titanic Survival Predictor Library
//!
//! Derives a fixed 14-field engineered feature record from raw passenger
//! attributes and runs a pre-trained binary classifier over it via ONNX
//! Runtime. The classifier and its ordered feature-name list are opaque
//! artifacts produced by the training pipeline.

pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod types;

pub use config::AppConfig;
pub use error::Error;
pub use features::{FeatureDeriver, FeatureRecord};
pub use model::{FeatureSchema, Predictor, SurvivalModel};
pub use types::{Outcome, Passenger, Prediction};
