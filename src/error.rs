//! Error types for GridLocked.

/// Top-level error type for the app core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value storage errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open storage: {0}")]
    Open(String),

    #[error("Read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Write failed for key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Validation errors surfaced to the user as transient notifications.
///
/// These are always local and non-fatal: the offending operation is rejected,
/// no state is mutated, and the message is safe to display verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both your first and last name")]
    NameRequired,

    #[error("Please select an option to continue")]
    SelectionRequired,

    #[error("Please select at least one option to continue")]
    AtLeastOneRequired,

    #[error("Please fill in all fields")]
    FieldsRequired,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Onboarding-flow errors.
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    /// A step was rejected by validation; the flow is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The flow already finished; answers were merged exactly once.
    #[error("Onboarding has already been completed")]
    AlreadyCompleted,

    /// An answer operation that does not match the current step's kind.
    #[error("Current step does not accept this answer type")]
    WrongStepKind,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for the app core.
pub type Result<T> = std::result::Result<T, Error>;
