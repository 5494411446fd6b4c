//! Ordered feature-name schema the classifier was trained against.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::features::FeatureRecord;

/// Feature names in the exact order the model expects its input row.
///
/// Loaded from a JSON artifact exported next to the model during
/// training. Position matters: the predictor builds the input vector by
/// projecting a [`FeatureRecord`] through this list, so a stale or
/// reordered artifact is rejected at startup instead of producing
/// plausible wrong predictions.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema from an explicit name list.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load the schema artifact (a JSON array of feature names).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| {
            Error::Startup(format!(
                "failed to read feature schema at {}: {e}",
                path.display()
            ))
        })?;
        let names: Vec<String> = serde_json::from_str(&text).map_err(|e| {
            Error::Startup(format!(
                "failed to parse feature schema at {}: {e}",
                path.display()
            ))
        })?;

        info!(path = %path.display(), features = names.len(), "Feature schema loaded");

        Ok(Self { names })
    }

    /// Check arity and name-set agreement with the deriver's output schema.
    pub fn validate_against(&self, expected: &[&str]) -> Result<(), Error> {
        if self.names.len() != expected.len() {
            return Err(Error::Startup(format!(
                "feature schema arity mismatch: artifact lists {} features, deriver produces {}",
                self.names.len(),
                expected.len()
            )));
        }
        for name in &self.names {
            if !expected.contains(&name.as_str()) {
                return Err(Error::Startup(format!(
                    "feature schema lists '{name}', which the deriver does not produce"
                )));
            }
        }
        // Both directions: with equal arity this also rejects an artifact
        // that lists one name twice while dropping another.
        for name in expected {
            if !self.names.iter().any(|n| n == name) {
                return Err(Error::Startup(format!(
                    "feature schema is missing '{name}', which the deriver produces"
                )));
            }
        }
        Ok(())
    }

    /// Project a record into the model's input order.
    pub fn project(&self, record: &FeatureRecord) -> Result<Vec<f32>, Error> {
        self.names
            .iter()
            .map(|name| {
                record.get(name).ok_or_else(|| Error::SchemaMismatch {
                    field: name.clone(),
                })
            })
            .collect()
    }

    /// Number of features in the schema.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Feature names in model order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureDeriver;
    use crate::types::passenger::{EmbarkPort, Passenger, PassengerClass, Sex};

    fn canonical_schema() -> FeatureSchema {
        FeatureSchema::new(
            FeatureRecord::SCHEMA
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn record() -> FeatureRecord {
        FeatureDeriver::new().derive(&Passenger {
            pclass: PassengerClass::Third,
            age: 30.0,
            sibsp: 1,
            parch: 2,
            fare: 10.0,
            sex: Sex::Male,
            embarked: EmbarkPort::Queenstown,
        })
    }

    #[test]
    fn test_validate_canonical() {
        assert!(canonical_schema()
            .validate_against(&FeatureRecord::SCHEMA)
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_arity_mismatch() {
        let schema = FeatureSchema::new(vec!["pclass".to_string(), "age".to_string()]);
        assert!(matches!(
            schema.validate_against(&FeatureRecord::SCHEMA),
            Err(Error::Startup(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_name() {
        let mut names: Vec<String> = FeatureRecord::SCHEMA.iter().map(|s| s.to_string()).collect();
        names[0] = "cabin".to_string();
        assert!(matches!(
            FeatureSchema::new(names).validate_against(&FeatureRecord::SCHEMA),
            Err(Error::Startup(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_name() {
        // 14 entries, all valid names, but "age" twice and no "fare":
        // a subset check would wave this through and project a wrong row.
        let mut names: Vec<String> = FeatureRecord::SCHEMA.iter().map(|s| s.to_string()).collect();
        let fare = names.iter().position(|n| n == "fare").unwrap();
        names[fare] = "age".to_string();

        assert!(matches!(
            FeatureSchema::new(names).validate_against(&FeatureRecord::SCHEMA),
            Err(Error::Startup(_))
        ));
    }

    #[test]
    fn test_project_preserves_artifact_order() {
        // Artifact may list features in a different order than the deriver.
        let schema = FeatureSchema::new(vec![
            "fare".to_string(),
            "pclass".to_string(),
            "who_man".to_string(),
        ]);

        let row = schema.project(&record()).unwrap();
        assert_eq!(row, vec![10.0, 3.0, 1.0]);
    }

    #[test]
    fn test_project_reports_missing_field() {
        let schema = FeatureSchema::new(vec!["deck".to_string()]);

        match schema.project(&record()) {
            Err(Error::SchemaMismatch { field }) => assert_eq!(field, "deck"),
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_project_full_schema() {
        let row = canonical_schema().project(&record()).unwrap();
        assert_eq!(row.len(), 14);
        assert_eq!(row, record().values().to_vec());
    }
}
