// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every variant is raised at the CLI / filesystem boundary; text
/// normalization itself cannot fail.
#[derive(Debug, Error)]
pub enum PacOptimizerError {
    #[error("Input and output file paths are required")]
    MissingArguments { found: usize },

    #[error("Input file '{}' does not exist", .path.display())]
    InputFileNotFound { path: PathBuf },

    #[error("Error reading input file: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to output file: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PacOptimizerError>;

impl PacOptimizerError {
    /// Path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InputFileNotFound { path }
            | Self::InputRead { path, .. }
            | Self::OutputWrite { path, .. } => Some(path),
            Self::MissingArguments { .. } => None,
        }
    }
}
