use thiserror::Error;

/// Errors from content hashing.
///
/// The collection never intercepts these: a hashing failure surfaces
/// unchanged from whichever operation needed the value's digest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// The value could not be canonically serialized. Typical causes are a
    /// `Serialize` impl that reports an error or a map whose keys are not
    /// strings.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for hashing operations.
pub type HashResult<T> = Result<T, HashError>;
