/// Crate-wide result alias.
pub type CollageResult<T> = Result<T, CollageError>;

/// Errors surfaced by the compositor and its collaborators.
///
/// Passing more images than a template holds is not an error; the extras are ignored.
#[derive(thiserror::Error, Debug)]
pub enum CollageError {
    /// Invalid canvas size, quality, template id, color or job contents.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input bytes could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// The raster encoder failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Reading inputs or writing outputs failed.
    #[error("io error: {0}")]
    Io(String),

    /// Any other error, with its context chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollageError {
    /// Build a [`CollageError::Configuration`].
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`CollageError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CollageError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CollageError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Whether this error stems from caller-supplied configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
