//! Prediction result data structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Binary survival outcome, mirroring the classifier's label encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    DidNotSurvive,
    Survived,
}

impl Outcome {
    /// Map a raw classifier label to an outcome. Anything outside {0, 1}
    /// is reported, not coerced.
    pub fn from_label(label: i64) -> Result<Self, Error> {
        match label {
            0 => Ok(Outcome::DidNotSurvive),
            1 => Ok(Outcome::Survived),
            other => Err(Error::UnknownLabel(other)),
        }
    }

    /// The label encoding used by the trained artifact.
    pub fn label(self) -> i64 {
        match self {
            Outcome::DidNotSurvive => 0,
            Outcome::Survived => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::DidNotSurvive => write!(f, "Did not survive"),
            Outcome::Survived => write!(f, "Survived"),
        }
    }
}

/// Prediction envelope handed to the output surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted outcome
    pub outcome: Outcome,

    /// Prediction timestamp
    pub timestamp: DateTime<Utc>,
}

impl Prediction {
    /// Create a new prediction stamped with the current time.
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(Outcome::from_label(0).unwrap(), Outcome::DidNotSurvive);
        assert_eq!(Outcome::from_label(1).unwrap(), Outcome::Survived);
        assert!(matches!(
            Outcome::from_label(2),
            Err(Error::UnknownLabel(2))
        ));
    }

    #[test]
    fn test_label_round_trip() {
        assert_eq!(Outcome::from_label(Outcome::Survived.label()).unwrap(), Outcome::Survived);
        assert_eq!(
            Outcome::from_label(Outcome::DidNotSurvive.label()).unwrap(),
            Outcome::DidNotSurvive
        );
    }

    #[test]
    fn test_prediction_serialization() {
        let prediction = Prediction::new(Outcome::Survived);

        let json = serde_json::to_string(&prediction).unwrap();
        let deserialized: Prediction = serde_json::from_str(&json).unwrap();

        assert_eq!(prediction.outcome, deserialized.outcome);
        assert!(json.contains("\"outcome\":\"survived\""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Survived.to_string(), "Survived");
        assert_eq!(Outcome::DidNotSurvive.to_string(), "Did not survive");
    }
}
