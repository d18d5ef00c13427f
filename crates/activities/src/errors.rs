//! Error types for the activity registry

use thiserror::Error;

/// Severity class of a registry error, used by the transport to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The addressed activity does not exist.
    NotFound,
    /// The request was well-formed but violates a roster rule.
    ClientError,
    /// The registry could not be constructed from its seed.
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Activity is full")]
    CapacityExceeded {
        activity: String,
        max_participants: u32,
    },

    #[error("Duplicate activity in seed: {activity}")]
    DuplicateActivity { activity: String },

    #[error("Invalid activity in seed: {activity}: {reason}")]
    InvalidActivity { activity: String, reason: String },
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::ActivityNotFound { .. } => ErrorKind::NotFound,
            RegistryError::AlreadyRegistered { .. }
            | RegistryError::NotRegistered { .. }
            | RegistryError::CapacityExceeded { .. } => ErrorKind::ClientError,
            RegistryError::DuplicateActivity { .. } | RegistryError::InvalidActivity { .. } => {
                ErrorKind::Internal
            }
        }
    }

    /// Short machine-readable reason, used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            RegistryError::ActivityNotFound { .. } => "not_found",
            RegistryError::AlreadyRegistered { .. } => "already_registered",
            RegistryError::NotRegistered { .. } => "not_registered",
            RegistryError::CapacityExceeded { .. } => "capacity_exceeded",
            RegistryError::DuplicateActivity { .. } => "duplicate_activity",
            RegistryError::InvalidActivity { .. } => "invalid_activity",
        }
    }

    /// Name of the activity the failed operation addressed.
    pub fn activity(&self) -> &str {
        match self {
            RegistryError::ActivityNotFound { activity }
            | RegistryError::AlreadyRegistered { activity, .. }
            | RegistryError::NotRegistered { activity, .. }
            | RegistryError::CapacityExceeded { activity, .. }
            | RegistryError::DuplicateActivity { activity }
            | RegistryError::InvalidActivity { activity, .. } => activity,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
