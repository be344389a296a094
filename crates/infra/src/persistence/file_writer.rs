// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, trace};
use pac_optimizer_shared_kernel::{PacOptimizerError, Result};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let tmp = Self::temp_path(path)?;

        let result = Self::write_and_rename(&tmp, path, data);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    /// Write the optimized output, never leaving a partial file behind.
    pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
        trace!("writing {} bytes to {}", data.len(), path.display());
        Self::atomic_write(path, data).map_err(|source| PacOptimizerError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn temp_path(path: &Path) -> std::io::Result<PathBuf> {
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;
        let name = path
            .file_name()
            .ok_or_else(|| std::io::Error::other("path has no file name"))?
            .to_string_lossy();

        // Same directory as the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Ok(parent.join(format!(".{name}.{}.{nanos}.tmp", std::process::id())))
    }

    fn write_and_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let file = File::create(tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();

        fs::rename(tmp, path)?;

        // Attempt to sync parent directory to make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Some(parent) = path.parent()
                && let Ok(dir) = File::open(parent)
            {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
