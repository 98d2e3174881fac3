use std::path::PathBuf;

/// Errors raised while probing process metadata.
///
/// These never reach callers of the public detectors; they are collapsed
/// to `false` inside [`crate::discovery::sandbox`] and only surface in logs
/// or through the lower-level probe functions.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Reading a metadata file failed (missing, permission denied, I/O).
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The current platform has no metadata source to inspect.
    #[error("process metadata is not available on {0}")]
    UnsupportedPlatform(&'static str),
}

/// Convenience Result type for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
