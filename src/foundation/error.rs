/// Convenience result type used across the engine.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only contract violations are errors. Recoverable conditions
/// (geometry not yet measurable, zero slides, degenerate extents) are
/// expressed as no-op plans and schedules, never as `Err`.
#[derive(thiserror::Error, Debug)]
pub enum MarqueeError {
    /// Invalid caller-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MarqueeError {
    /// Build a [`MarqueeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MarqueeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
