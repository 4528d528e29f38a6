/// Convenience result type used across zebra.
pub type ZebraResult<T> = Result<T, ZebraError>;

/// Top-level error taxonomy used by the crate's boundary APIs.
///
/// The drawing core itself absorbs every degenerate configuration; errors only surface when
/// ingesting configuration or when a raster cannot be allocated.
#[derive(thiserror::Error, Debug)]
pub enum ZebraError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A raster could not be produced (for example, a surface exceeds the rasterizer limits).
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZebraError {
    /// Build a [`ZebraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ZebraError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ZebraError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
