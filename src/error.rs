//! Error types for the wordmill library.
//!
//! All fatal failures are represented by the [`WordmillError`] enum. Problems
//! that a run can recover from (a malformed record in a structured dump, for
//! example) are not errors: readers report them as
//! [`RecordParseWarning`](crate::source::RecordParseWarning) values instead.
//!
//! # Examples
//!
//! ```
//! use wordmill::error::{WordmillError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordmillError::config("scowl-size must be between 35 and 95"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for wordmill operations.
#[derive(Error, Debug)]
pub enum WordmillError {
    /// Invalid configuration value or flag combination
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors without a known path
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// I/O errors tied to a specific path
    #[error("I/O error on {}: {source}", path.display())]
    IoAt {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Building or querying the SCOWL dictionary failed
    #[error("Build error: {0}")]
    Build(String),

    /// An enabled external resource is not installed
    #[error("Missing dependency: {0}")]
    DependencyMissing(String),

    /// Unrecoverable parse failure
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordmillError.
pub type Result<T> = std::result::Result<T, WordmillError>;

impl WordmillError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordmillError::Config(msg.into())
    }

    /// Create a new path-scoped I/O error.
    pub fn io_at<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        WordmillError::IoAt {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new build error.
    pub fn build<S: Into<String>>(msg: S) -> Self {
        WordmillError::Build(msg.into())
    }

    /// Create a new missing dependency error.
    pub fn dependency_missing<S: Into<String>>(msg: S) -> Self {
        WordmillError::DependencyMissing(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        WordmillError::Parse(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordmillError::Other(msg.into())
    }

    /// Process exit status for this error.
    ///
    /// Configuration problems share clap's usage error code.
    pub fn exit_code(&self) -> i32 {
        match self {
            WordmillError::Config(_) => 2,
            _ => 1,
        }
    }
}
