use crate::state::StateProperty;
use thiserror::Error;

pub type StateResult<T> = Result<T, StateError>;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Unknown unit index {index} for {property}")]
    UnknownUnit {
        property: StateProperty,
        index: usize,
    },

    #[error("Unknown state property index: {index}")]
    UnknownProperty { index: usize },

    #[error("Degenerate reference state: {what}")]
    DegenerateState { what: &'static str },
}
