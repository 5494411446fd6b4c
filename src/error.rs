//! Error taxonomy for the prediction pipeline.

use thiserror::Error;

/// Errors surfaced by artifact loading, feature projection and inference.
#[derive(Debug, Error)]
pub enum Error {
    /// Artifact missing, corrupt, or mismatched with the feature schema.
    /// Fatal: raised before any prediction is served.
    #[error("startup failure: {0}")]
    Startup(String),

    /// The model expects a feature the record does not carry.
    #[error("feature '{field}' expected by the model is missing from the record")]
    SchemaMismatch { field: String },

    /// A numeric passenger attribute lies outside its declared domain.
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// ONNX Runtime failure during session setup or inference.
    #[error("inference failed: {0}")]
    Inference(#[from] ort::Error),

    /// The classifier emitted a label outside {0, 1}.
    #[error("classifier returned unknown label {0}")]
    UnknownLabel(i64),

    /// Broken internal invariant (poisoned lock, empty output tensor).
    #[error("{0}")]
    Internal(String),
}
