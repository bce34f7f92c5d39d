/// Convenience result type used across the crate.
pub type LayeredResult<T> = Result<T, LayeredError>;

/// Error taxonomy for surface, platform and control operations.
///
/// Degenerate geometry is never an error: zero-area draws are no-ops. Errors surface only where a
/// caller can act on them; the frame pipeline absorbs the rest (see [`crate::FrameStats`]).
#[derive(thiserror::Error, Debug)]
pub enum LayeredError {
    /// Invalid caller-provided data (configuration, sizes, handles).
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel surface could not be created or does not match the requested operation.
    #[error("surface error: {0}")]
    Surface(String),

    /// The window system rejected or failed an operation.
    #[error("platform error: {0}")]
    Platform(String),

    /// Text measurement or rendering failed.
    #[error("text error: {0}")]
    Text(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayeredError {
    /// Build a [`LayeredError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayeredError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`LayeredError::Platform`] value.
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }

    /// Build a [`LayeredError::Text`] value.
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }

    /// Build a [`LayeredError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
