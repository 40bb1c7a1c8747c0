//! Error types for the kinematics engine

use thiserror::Error;

/// Errors raised by the kinematics engine.
///
/// Generation is pure arithmetic, so the only failure is a bad input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    pub fn parameter(&self) -> &'static str {
        match self {
            SimError::InvalidParameter { name, .. } => name,
        }
    }
}
