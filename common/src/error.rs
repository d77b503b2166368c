use thiserror::Error;

/// Failure reported by an external device capability.
///
/// None of these are fatal: callers turn them into a notice for the user
/// and keep going.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("camera permission was not granted")]
    PermissionDenied,

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("could not open '{0}'")]
    Unopenable(String),

    #[error("sharing failed: {0}")]
    Share(String),
}

pub type CapabilityResult<T> = Result<T, CapabilityError>;
