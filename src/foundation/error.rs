/// Convenience result type used across Glidepath.
pub type GlidepathResult<T> = Result<T, GlidepathError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlidepathError {
    /// Invalid user-provided journey or oscillation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving telemetry state.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlidepathError {
    /// Build a [`GlidepathError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlidepathError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`GlidepathError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
