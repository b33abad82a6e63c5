//! Registry error types

use signup_types::SeedValidationError;
use thiserror::Error;

/// Registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },

    #[error("Invalid seed catalog: {0}")]
    InvalidSeed(#[from] SeedValidationError),
}

impl RegistryError {
    /// True for the roster conflicts (duplicate signup, missing unregister target)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RegistryError::AlreadySignedUp { .. } | RegistryError::NotSignedUp { .. }
        )
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
