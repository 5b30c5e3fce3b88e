//! Crate error type.

/// Convenience result alias used across the crate.
pub type FacadeResult<T> = Result<T, FacadeError>;

/// Top-level error type for host-document handling, registry setup and rendering.
///
/// Component-level problems (bad attributes, unreachable assets) are never surfaced through
/// this type; they are coerced or skipped and logged instead.
#[derive(thiserror::Error, Debug)]
pub enum FacadeError {
    /// Host document or attribute validation failure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Asset fetch or decode failure.
    #[error("asset error: {0}")]
    Asset(String),

    /// Surface or compositing failure.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FacadeError {
    /// Build a [`FacadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FacadeError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`FacadeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FacadeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
