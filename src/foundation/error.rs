/// Convenience result type used across Platen.
pub type PlatenResult<T> = Result<T, PlatenError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlatenError {
    /// Invalid request data (placement count contract, viewport, non-finite fields).
    #[error("validation error: {0}")]
    Validation(String),

    /// A base or design image failed to read or decode.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// A raster surface could not be allocated or addressed.
    #[error("surface error: {0}")]
    Surface(String),

    /// An output payload failed to encode.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlatenError {
    /// Build a [`PlatenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlatenError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`PlatenError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`PlatenError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
