// crates/infra/src/persistence/file_reader.rs
use std::{fs::File, io::Read, path::Path};

use log::{debug, trace};
use pac_optimizer_shared_kernel::{PacOptimizerError, Result};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the whole input file as raw bytes.
    ///
    /// A path that is known not to exist yields `InputFileNotFound`. If
    /// existence cannot be determined the read is attempted anyway and its
    /// failure is reported as `InputRead`.
    pub fn read_input(path: &Path) -> Result<Vec<u8>> {
        if matches!(path.try_exists(), Ok(false)) {
            return Err(PacOptimizerError::InputFileNotFound {
                path: path.to_path_buf(),
            });
        }

        trace!("reading {}", path.display());
        let bytes = Self::read_to_end(path).map_err(|source| PacOptimizerError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }
}
