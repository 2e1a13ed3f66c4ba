use std::path::PathBuf;

/// Convenience result type used across the overlay builder.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Top-level error taxonomy used by compiler and generation APIs.
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// Rejected configuration (non-positive cycle, non-finite numbers, unusable style values).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The logo source did not exist when generation ran.
    #[error("asset not found: {}", path.display())]
    AssetNotFound {
        /// Absolute path that was looked up.
        path: PathBuf,
    },

    /// Malformed track data found while validating or sampling.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors when serializing or deserializing configuration or timelines.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverlayError {
    /// Build an [`OverlayError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build an [`OverlayError::AssetNotFound`] value.
    pub fn asset_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetNotFound { path: path.into() }
    }

    /// Build an [`OverlayError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`OverlayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
