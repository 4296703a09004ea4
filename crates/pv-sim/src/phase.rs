//! Demonstration phase machine.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Phase of the demonstration.
///
/// Exactly one phase is active at a time. `Simulating` is entered only via
/// an explicit start action and is terminal in-core: the host restarts a run
/// by re-entering `Initial` or `Final` from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The user is editing the initial state; edits republish visuals.
    #[default]
    Initial,
    /// The user is editing the final state; one property stays unknown.
    Final,
    /// The animation is running between the two states.
    Simulating,
}

impl Phase {
    /// Index used by the UI-facing phase-control surface.
    pub fn index(&self) -> usize {
        match self {
            Self::Initial => 0,
            Self::Final => 1,
            Self::Simulating => 2,
        }
    }
}

impl TryFrom<usize> for Phase {
    type Error = SimError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Initial),
            1 => Ok(Self::Final),
            2 => Ok(Self::Simulating),
            _ => Err(SimError::UnknownPhase { index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for phase in [Phase::Initial, Phase::Final, Phase::Simulating] {
            assert_eq!(Phase::try_from(phase.index()).unwrap(), phase);
        }
        assert!(Phase::try_from(3).is_err());
    }

    #[test]
    fn default_is_initial() {
        assert_eq!(Phase::default(), Phase::Initial);
    }
}
