//! Model artifacts and inference components

pub mod loader;
pub mod predictor;
pub mod schema;

pub use loader::ModelLoader;
pub use predictor::{OnnxSurvivalModel, Predictor, SurvivalModel};
pub use schema::FeatureSchema;
