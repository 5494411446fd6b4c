//! ONNX model loader

use std::path::Path;
use std::sync::Mutex;

use ort::session::{builder::GraphOptimizationLevel, Session};
use tracing::info;

use crate::error::Error;
use crate::model::predictor::OnnxSurvivalModel;

/// Loader for the survival classifier artifact
pub struct ModelLoader {
    /// Number of threads for ONNX inference
    onnx_threads: usize,
}

impl ModelLoader {
    /// Create a new model loader with default settings (1 thread)
    pub fn new() -> Result<Self, Error> {
        Self::with_threads(1)
    }

    /// Create a new model loader with specified number of threads
    pub fn with_threads(onnx_threads: usize) -> Result<Self, Error> {
        // Initialize ONNX Runtime
        ort::init().commit()?;
        info!(onnx_threads = onnx_threads, "ONNX Runtime initialized");
        Ok(Self { onnx_threads })
    }

    /// Load the classifier from file.
    ///
    /// Discovers input/output tensor names from the session metadata; the
    /// label output is preferred so the model's binary decision, not its
    /// probability head, drives the outcome.
    pub fn load_model<P: AsRef<Path>>(&self, path: P) -> Result<OnnxSurvivalModel, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::Startup(format!(
                "model artifact not found at {}",
                path.display()
            )));
        }

        info!(path = %path.display(), threads = self.onnx_threads, "Loading ONNX model");

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(self.onnx_threads)?
            .commit_from_file(path)
            .map_err(|e| {
                Error::Startup(format!("failed to load model from {}: {e}", path.display()))
            })?;

        // Get input/output names
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("label"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| {
                session
                    .outputs
                    .first()
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| "output_label".to_string())
            });

        info!(
            input = %input_name,
            output = %output_name,
            "Model loaded successfully"
        );

        Ok(OnnxSurvivalModel {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}
