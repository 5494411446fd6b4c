//! Feature derivation for the survival classifier.
//!
//! This module turns raw passenger attributes into the engineered
//! feature record the model was trained against. The encoding matches
//! the preprocessing done in the Python training pipeline exactly,
//! including which category of each one-hot group is left implicit.

use crate::types::passenger::{EmbarkPort, Passenger, PassengerClass, Sex};

/// Engineered feature record consumed by the classifier.
///
/// Exactly 14 named numeric fields. [`FeatureRecord::SCHEMA`] gives the
/// canonical order; the predictor projects the record through the
/// artifact's own feature list rather than trusting positions, so a
/// reordered artifact is caught instead of silently mis-predicting.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub pclass: f32,
    pub age: f32,
    pub sibsp: f32,
    pub parch: f32,
    pub fare: f32,
    pub adult_male: f32,
    pub alone: f32,
    pub sex_male: f32,
    pub embarked_q: f32,
    pub embarked_s: f32,
    pub class_second: f32,
    pub class_third: f32,
    pub who_man: f32,
    pub who_woman: f32,
}

impl FeatureRecord {
    /// Canonical feature names, in training order.
    pub const SCHEMA: [&'static str; 14] = [
        "pclass",
        "age",
        "sibsp",
        "parch",
        "fare",
        "adult_male",
        "alone",
        "sex_male",
        "embarked_Q",
        "embarked_S",
        "class_Second",
        "class_Third",
        "who_man",
        "who_woman",
    ];

    /// Look up a field by its training-time name.
    pub fn get(&self, name: &str) -> Option<f32> {
        match name {
            "pclass" => Some(self.pclass),
            "age" => Some(self.age),
            "sibsp" => Some(self.sibsp),
            "parch" => Some(self.parch),
            "fare" => Some(self.fare),
            "adult_male" => Some(self.adult_male),
            "alone" => Some(self.alone),
            "sex_male" => Some(self.sex_male),
            "embarked_Q" => Some(self.embarked_q),
            "embarked_S" => Some(self.embarked_s),
            "class_Second" => Some(self.class_second),
            "class_Third" => Some(self.class_third),
            "who_man" => Some(self.who_man),
            "who_woman" => Some(self.who_woman),
            _ => None,
        }
    }

    /// Field values in canonical [`SCHEMA`](Self::SCHEMA) order.
    pub fn values(&self) -> [f32; 14] {
        [
            self.pclass,
            self.age,
            self.sibsp,
            self.parch,
            self.fare,
            self.adult_male,
            self.alone,
            self.sex_male,
            self.embarked_q,
            self.embarked_s,
            self.class_second,
            self.class_third,
            self.who_man,
            self.who_woman,
        ]
    }
}

/// Derives the feature record from raw passenger attributes.
///
/// Pure and deterministic: no I/O, no randomness, no hidden state.
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// Create a new feature deriver.
    pub fn new() -> Self {
        Self
    }

    /// Derive the 14-field feature record for one passenger.
    pub fn derive(&self, p: &Passenger) -> FeatureRecord {
        let sex_male = matches!(p.sex, Sex::Male);

        // "who" collapses straight from sex; age plays no part here even
        // though adult_male uses it.
        let who_man = sex_male;

        FeatureRecord {
            pclass: p.pclass.as_f32(),
            age: p.age,
            sibsp: p.sibsp as f32,
            parch: p.parch as f32,
            fare: p.fare,
            adult_male: indicator(sex_male && p.age >= 18.0),
            alone: indicator(p.sibsp == 0 && p.parch == 0),
            sex_male: indicator(sex_male),
            embarked_q: indicator(matches!(p.embarked, EmbarkPort::Queenstown)),
            // Cherbourg is the reference category: neither indicator fires.
            embarked_s: indicator(matches!(p.embarked, EmbarkPort::Southampton)),
            class_second: indicator(matches!(p.pclass, PassengerClass::Second)),
            // First class is the reference category.
            class_third: indicator(matches!(p.pclass, PassengerClass::Third)),
            who_man: indicator(who_man),
            who_woman: indicator(!who_man),
        }
    }

    /// Number of features produced.
    pub fn feature_count(&self) -> usize {
        FeatureRecord::SCHEMA.len()
    }
}

impl Default for FeatureDeriver {
    fn default() -> Self {
        Self::new()
    }
}

fn indicator(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}
