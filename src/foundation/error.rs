use std::path::PathBuf;

/// Convenience result type used across noteicon.
pub type IconResult<T> = Result<T, IconError>;

/// Failures that abort an icon generation run.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// A shape does not fit the canvas or its own bounding box.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The rasterizer could not produce a canvas.
    #[error("raster error: {0}")]
    Raster(String),

    /// PNG encoding failed before anything touched the filesystem.
    #[error("encode error: {0}")]
    Encode(String),

    /// Writing an output file failed.
    #[error("write '{}': {source}", path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build an [`IconError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build an [`IconError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
