use std::path::PathBuf;

/// Convenience result alias used across the crate.
pub type LogomarkResult<T> = Result<T, LogomarkError>;

/// Error taxonomy for a single compositing run.
///
/// Every variant is terminal for the call that produced it.
#[derive(thiserror::Error, Debug)]
pub enum LogomarkError {
    /// The source image is missing, unreadable, or not a decodable raster.
    #[error("load error: '{}': {source}", path.display())]
    Load {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: anyhow::Error,
    },

    /// The output could not be encoded or written.
    #[error("save error: '{}': {source}", path.display())]
    Save {
        /// Destination path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: anyhow::Error,
    },

    /// Canvas parameters the rasterizer cannot honor.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Any other failure, such as a malformed JSON spec.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogomarkError {
    /// Build a [`LogomarkError::Load`] for `path`.
    pub fn load(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Build a [`LogomarkError::Save`] for `path`.
    pub fn save(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::Save {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Build a [`LogomarkError::Geometry`].
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
