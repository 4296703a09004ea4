//! Error types for the animation engine.

use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown phase index: {index}")]
    UnknownPhase { index: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
