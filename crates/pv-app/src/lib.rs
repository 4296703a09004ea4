//! Shared application service layer for pvlab.
//!
//! This crate wires the input-binding layer to the animation engine behind
//! the two surfaces a frontend consumes: the text/unit input surface and the
//! phase-control surface. CLI and GUI frontends both drive a [`GasDemo`].

pub mod demo;
pub mod error;
pub mod input;
pub mod scenario;

pub use demo::GasDemo;
pub use error::{AppError, AppResult};
pub use input::{InputPanel, UNKNOWN_SENTINEL};
pub use scenario::{FieldInput, Scenario, StateInputs, load_scenario};
