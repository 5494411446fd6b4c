//! Survival predictor wrapping the pre-trained classifier.

use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::error::Error;
use crate::features::FeatureRecord;
use crate::model::loader::ModelLoader;
use crate::model::schema::FeatureSchema;
use crate::types::prediction::Outcome;

/// Binary classifier over one ordered feature row.
///
/// The predictor only depends on this trait, so the pipeline can be
/// exercised with a stub and the ONNX binding stays at the edge.
pub trait SurvivalModel: Send + Sync {
    /// Classify a single ordered feature row.
    fn predict(&self, features: &[f32]) -> Result<Outcome, Error>;
}

/// ONNX Runtime-backed survival model.
///
/// The session is read-only after load; the mutex exists because the
/// runtime wants exclusive access while executing a graph.
pub struct OnnxSurvivalModel {
    pub(crate) session: Mutex<Session>,
    pub(crate) input_name: String,
    pub(crate) output_name: String,
}

impl SurvivalModel for OnnxSurvivalModel {
    fn predict(&self, features: &[f32]) -> Result<Outcome, Error> {
        // Single-row batch: shape [1, num_features]
        let shape = vec![1_i64, features.len() as i64];
        let input_tensor = Tensor::from_array((shape, features.to_vec()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| Error::Internal(format!("model session lock poisoned: {e}")))?;

        let outputs = session.run(ort::inputs![self.input_name.as_str() => input_tensor])?;

        let value = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            Error::Internal(format!("model produced no '{}' output", self.output_name))
        })?;

        // sklearn-onnx exports labels as int64; fall back to a float
        // tensor for exporters that emit the label as f32.
        let label = if let Ok((_, data)) = value.try_extract_tensor::<i64>() {
            data.first()
                .copied()
                .ok_or_else(|| Error::Internal("empty label tensor".to_string()))?
        } else {
            let (_, data) = value.try_extract_tensor::<f32>()?;
            data.first()
                .copied()
                .map(|v| v.round() as i64)
                .ok_or_else(|| Error::Internal("empty label tensor".to_string()))?
        };

        debug!(label = label, "Classifier label extracted");

        Outcome::from_label(label)
    }
}

/// Ties the loaded classifier to its validated feature schema.
///
/// One call = one row = one synchronous inference. No batching, no
/// caching, no retries: the computation is deterministic, so a failure
/// will not be cured by reattempting.
pub struct Predictor {
    model: Box<dyn SurvivalModel>,
    schema: FeatureSchema,
}

impl Predictor {
    /// Build a predictor from an already-loaded model and schema.
    ///
    /// Validates the schema against the deriver's output up front so an
    /// arity or naming mismatch aborts startup instead of surfacing as a
    /// wrong prediction later.
    pub fn new(model: Box<dyn SurvivalModel>, schema: FeatureSchema) -> Result<Self, Error> {
        schema.validate_against(&FeatureRecord::SCHEMA)?;
        Ok(Self { model, schema })
    }

    /// Load both artifacts named by the configuration and build the predictor.
    pub fn from_config(config: &ModelConfig) -> Result<Self, Error> {
        let schema = FeatureSchema::load(&config.schema_path)?;
        let model = ModelLoader::with_threads(config.onnx_threads)?.load_model(&config.model_path)?;

        info!(
            features = schema.len(),
            model = %config.model_path,
            "Predictor initialized"
        );

        Self::new(Box::new(model), schema)
    }

    /// Predict the survival outcome for one feature record.
    pub fn predict(&self, record: &FeatureRecord) -> Result<Outcome, Error> {
        let row = self.schema.project(record)?;
        self.model.predict(&row)
    }

    /// Number of features the model consumes.
    pub fn feature_count(&self) -> usize {
        self.schema.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDeriver;
    use crate::types::passenger::{EmbarkPort, Passenger, PassengerClass, Sex};

    /// Stub that ignores its input entirely.
    struct AlwaysSurvives;

    impl SurvivalModel for AlwaysSurvives {
        fn predict(&self, _features: &[f32]) -> Result<Outcome, Error> {
            Ok(Outcome::Survived)
        }
    }

    /// Stub that records how many features it was handed.
    struct ArityProbe;

    impl SurvivalModel for ArityProbe {
        fn predict(&self, features: &[f32]) -> Result<Outcome, Error> {
            assert_eq!(features.len(), 14);
            Ok(Outcome::DidNotSurvive)
        }
    }

    fn canonical_schema() -> FeatureSchema {
        FeatureSchema::new(
            FeatureRecord::SCHEMA
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn any_record() -> FeatureRecord {
        FeatureDeriver::new().derive(&Passenger {
            pclass: PassengerClass::Second,
            age: 40.0,
            sibsp: 0,
            parch: 1,
            fare: 26.0,
            sex: Sex::Female,
            embarked: EmbarkPort::Cherbourg,
        })
    }

    #[test]
    fn test_stub_outcome_passes_through() {
        // The predictor must relay the model's label, not re-derive it.
        let predictor = Predictor::new(Box::new(AlwaysSurvives), canonical_schema()).unwrap();

        assert_eq!(predictor.predict(&any_record()).unwrap(), Outcome::Survived);
    }

    #[test]
    fn test_model_receives_full_row() {
        let predictor = Predictor::new(Box::new(ArityProbe), canonical_schema()).unwrap();

        assert_eq!(
            predictor.predict(&any_record()).unwrap(),
            Outcome::DidNotSurvive
        );
    }

    #[test]
    fn test_mismatched_schema_rejected_at_construction() {
        let schema = FeatureSchema::new(vec!["pclass".to_string()]);

        assert!(matches!(
            Predictor::new(Box::new(AlwaysSurvives), schema),
            Err(Error::Startup(_))
        ));
    }
}
