/// Convenience result type used across thumbr.
pub type ThumbResult<T> = Result<T, ThumbError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum ThumbError {
    /// The video source could not be opened or probed.
    #[error("source open error: {0}")]
    SourceOpen(String),

    /// Every probed position failed to decode.
    #[error("empty frame set: {0}")]
    EmptyFrameSet(String),

    /// Malformed grid specification or a configuration that yields a degenerate layout.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Errors while rasterizing panels, tiles or overlays.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or writing the output image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ThumbError {
    /// Build a [`ThumbError::SourceOpen`] value.
    pub fn source_open(msg: impl Into<String>) -> Self {
        Self::SourceOpen(msg.into())
    }

    /// Build a [`ThumbError::EmptyFrameSet`] value.
    pub fn empty_frame_set(msg: impl Into<String>) -> Self {
        Self::EmptyFrameSet(msg.into())
    }

    /// Build a [`ThumbError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`ThumbError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ThumbError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
