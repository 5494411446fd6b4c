//! Titanic Survival Predictor - Main Entry Point
//!
//! Loads the classifier and feature-schema artifacts, derives the
//! engineered feature record for one passenger, and prints the
//! predicted outcome. One invocation = one synchronous prediction.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use titanic_predictor::{
    config::AppConfig,
    features::FeatureDeriver,
    model::Predictor,
    types::passenger::{EmbarkPort, Passenger, PassengerClass, Sex},
    types::prediction::Prediction,
};

#[derive(Parser)]
#[command(name = "titanic-predictor")]
#[command(about = "ONNX-based Titanic survival predictor")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config/config.toml")]
    config: PathBuf,

    /// Read the passenger from a JSON file instead of the flags below
    #[arg(long)]
    input: Option<PathBuf>,

    /// Passenger class (1, 2 or 3)
    #[arg(long, default_value_t = 1)]
    pclass: u8,

    /// Age in years (0-80)
    #[arg(long, default_value_t = 25.0)]
    age: f32,

    /// Siblings/spouses aboard (0-10)
    #[arg(long, default_value_t = 0)]
    sibsp: u32,

    /// Parents/children aboard (0-10)
    #[arg(long, default_value_t = 0)]
    parch: u32,

    /// Fare paid (0.0-600.0)
    #[arg(long, default_value_t = 50.0)]
    fare: f32,

    /// Sex (male or female)
    #[arg(long, default_value = "male")]
    sex: Sex,

    /// Port of embarkation (S, C or Q)
    #[arg(long, default_value = "S")]
    embarked: EmbarkPort,

    /// Emit the prediction as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn passenger(&self) -> Result<Passenger> {
        if let Some(path) = &self.input {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read passenger file {}", path.display()))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("failed to parse passenger file {}", path.display()));
        }

        Ok(Passenger {
            pclass: PassengerClass::try_from(self.pclass).map_err(anyhow::Error::msg)?,
            age: self.age,
            sibsp: self.sibsp,
            parch: self.parch,
            fare: self.fare,
            sex: self.sex,
            embarked: self.embarked,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("titanic_predictor=info".parse()?),
        )
        .init();

    info!("Starting Titanic survival predictor");

    // Load configuration
    let config = AppConfig::load_from_path(&cli.config)?;
    info!("Configuration loaded successfully");

    // Initialize components
    let deriver = FeatureDeriver::new();
    info!(
        "Feature deriver initialized ({} features)",
        deriver.feature_count()
    );

    // Load model and schema artifacts; any mismatch aborts here
    let predictor = Predictor::from_config(&config.model)?;

    // Build and validate the passenger
    let passenger = cli.passenger()?;
    passenger.validate()?;

    // Derive features and run one synchronous inference
    let record = deriver.derive(&passenger);
    let outcome = predictor.predict(&record)?;
    let prediction = Prediction::new(outcome);

    info!(
        pclass = u8::from(passenger.pclass),
        age = passenger.age,
        sex = %passenger.sex,
        outcome = %prediction.outcome,
        "Prediction complete"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("{}", prediction.outcome);
    }

    Ok(())
}
