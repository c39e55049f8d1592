//! Error types for the lunge repetition counter.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A pose did not carry a landmark at one of the consumed skeleton indices
    #[error("Missing landmark {index}: pose only has {available} landmarks")]
    MissingLandmark {
        /// Skeleton index that was requested
        index: usize,
        /// Number of landmarks the pose actually carried
        available: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Recorded landmark stream could not be decoded
    #[error("Recording error: {0}")]
    RecordingError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
