// crates/core/src/stats.rs

/// Counters gathered while normalizing one document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Number of lines after splitting on the detected terminator.
    pub lines: usize,
    /// Lines from which a `//` comment was removed.
    pub comments_stripped: usize,
    /// Lines that ended up empty (including ones emptied by comment removal).
    pub blank_lines: usize,
    /// Runs of 2+ empty lines reduced to a single empty line.
    pub collapsed_runs: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
}

impl NormalizeStats {
    /// Bytes removed by normalization.
    #[must_use]
    pub const fn bytes_saved(&self) -> usize {
        self.bytes_in.saturating_sub(self.bytes_out)
    }
}
