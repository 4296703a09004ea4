//! Error types for the pv-app service layer.

use pv_sim::SimError;
use pv_state::StateError;
use std::path::PathBuf;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Application error type wrapping the backend crates' errors behind one
/// interface for CLI and GUI frontends.
#[derive(Error, Debug)]
pub enum AppError {
    /// Input text did not parse as a number. The input surface swallows this
    /// (no state change); it exists so the contract stays visible in tests.
    #[error("Could not parse \"{text}\" as a number")]
    Parse { text: String },

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario parse failed: {0}")]
    ScenarioParse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::ScenarioParse(err.to_string())
    }
}
