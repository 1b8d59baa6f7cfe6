/// Convenience result type used across pixelweave.
pub type WeaveResult<T> = Result<T, WeaveError>;

/// Top-level error taxonomy used by the crate's APIs.
///
/// Data-shape mismatches (out-of-range writes, short or oversized sources)
/// never surface here: those degrade in place, per the crate-wide drop
/// policy. Errors are reserved for invalid construction input and for
/// sources that cannot be opened or decoded at all.
#[derive(thiserror::Error, Debug)]
pub enum WeaveError {
    /// Invalid user-provided construction data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while probing or decoding an animation source.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while parsing layout configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WeaveError {
    /// Build a [`WeaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WeaveError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`WeaveError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
