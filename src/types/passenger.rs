//! Passenger data structures for survival prediction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ticket class. Serialized as the raw class number {1, 2, 3} so JSON
/// input matches the training data encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PassengerClass {
    First,
    Second,
    Third,
}

impl PassengerClass {
    /// Numeric value fed to the model as the `pclass` feature.
    pub fn as_f32(self) -> f32 {
        u8::from(self) as f32
    }
}

impl TryFrom<u8> for PassengerClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PassengerClass::First),
            2 => Ok(PassengerClass::Second),
            3 => Ok(PassengerClass::Third),
            other => Err(format!("passenger class must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<PassengerClass> for u8 {
    fn from(class: PassengerClass) -> Self {
        match class {
            PassengerClass::First => 1,
            PassengerClass::Second => 2,
            PassengerClass::Third => 3,
        }
    }
}

/// Passenger sex as recorded in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(format!("sex must be 'male' or 'female', got '{other}'")),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Port of embarkation, serialized with the single-letter codes used in
/// the original manifest (Cherbourg is the reference category in the
/// one-hot encoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbarkPort {
    #[serde(rename = "S")]
    Southampton,
    #[serde(rename = "C")]
    Cherbourg,
    #[serde(rename = "Q")]
    Queenstown,
}

impl FromStr for EmbarkPort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(EmbarkPort::Southampton),
            "C" => Ok(EmbarkPort::Cherbourg),
            "Q" => Ok(EmbarkPort::Queenstown),
            other => Err(format!("embarkation port must be S, C or Q, got '{other}'")),
        }
    }
}

/// Raw passenger attributes for one prediction request.
///
/// Enum fields make out-of-set categorical values unrepresentable; an
/// unknown sex or port fails at deserialization instead of silently
/// zeroing every derived indicator. Numeric domains are checked by
/// [`Passenger::validate`], which callers run before deriving features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    /// Ticket class
    pub pclass: PassengerClass,

    /// Age in years, [0, 80]
    pub age: f32,

    /// Siblings/spouses aboard, [0, 10]
    pub sibsp: u32,

    /// Parents/children aboard, [0, 10]
    pub parch: u32,

    /// Fare paid, [0.0, 600.0]
    pub fare: f32,

    /// Passenger sex
    pub sex: Sex,

    /// Port of embarkation
    pub embarked: EmbarkPort,
}

impl Passenger {
    /// Check that every numeric attribute lies within its declared domain.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=80.0).contains(&self.age) {
            return Err(Error::OutOfRange {
                field: "age",
                value: self.age as f64,
                min: 0.0,
                max: 80.0,
            });
        }
        if self.sibsp > 10 {
            return Err(Error::OutOfRange {
                field: "sibsp",
                value: self.sibsp as f64,
                min: 0.0,
                max: 10.0,
            });
        }
        if self.parch > 10 {
            return Err(Error::OutOfRange {
                field: "parch",
                value: self.parch as f64,
                min: 0.0,
                max: 10.0,
            });
        }
        if !(0.0..=600.0).contains(&self.fare) {
            return Err(Error::OutOfRange {
                field: "fare",
                value: self.fare as f64,
                min: 0.0,
                max: 600.0,
            });
        }
        Ok(())
    }
}
