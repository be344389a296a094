// crates/core/src/document.rs
//! # Document Normalization
//!
//! Ties the per-line pipeline together:
//!
//! 1. detect the [`LineEnding`] once for the whole document
//! 2. split on it and run every slice through [`Line::process`]
//! 3. rejoin with the same terminator
//! 4. collapse blank runs with [`collapse_blank_runs`]
//!
//! The last slice is processed like any other, whether or not the input
//! ends with a terminator.

use log::debug;

use crate::collapse::collapse_blank_runs;
use crate::line::Line;
use crate::line_ending::LineEnding;
use crate::stats::NormalizeStats;

/// Input text together with its detected line-ending style.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    content: &'a [u8],
    line_ending: LineEnding,
}

impl<'a> Document<'a> {
    #[must_use]
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            content,
            line_ending: LineEnding::detect(content),
        }
    }

    #[must_use]
    pub const fn content(&self) -> &'a [u8] {
        self.content
    }

    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Processed lines, in order, before blank-run collapsing.
    pub fn lines(&self) -> impl Iterator<Item = Line<'a>> + 'a {
        self.line_ending.split(self.content).map(Line::process)
    }

    /// Produce the normalized content. The document itself is left as is.
    #[must_use]
    pub fn normalize(&self) -> Normalized {
        let ending = self.line_ending.as_bytes();
        let mut stats = NormalizeStats {
            bytes_in: self.content.len(),
            ..NormalizeStats::default()
        };

        let mut joined = Vec::with_capacity(self.content.len());
        for (idx, line) in self.lines().enumerate() {
            if idx > 0 {
                joined.extend_from_slice(ending);
            }
            stats.lines += 1;
            stats.comments_stripped += usize::from(line.comment_stripped());
            stats.blank_lines += usize::from(line.is_blank());
            joined.extend_from_slice(line.as_bytes());
        }

        let (collapsed, runs) = collapse_blank_runs(&joined, self.line_ending);
        stats.collapsed_runs = runs;
        let content = collapsed.into_owned();
        stats.bytes_out = content.len();

        debug!(
            "normalized {} lines ({} line endings): {} comments stripped, {} blank, {} runs collapsed, {} -> {} bytes",
            stats.lines,
            self.line_ending,
            stats.comments_stripped,
            stats.blank_lines,
            stats.collapsed_runs,
            stats.bytes_in,
            stats.bytes_out,
        );

        Normalized {
            content,
            line_ending: self.line_ending,
            stats,
        }
    }
}

/// Result of [`Document::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    content: Vec<u8>,
    line_ending: LineEnding,
    stats: NormalizeStats,
}

impl Normalized {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    #[must_use]
    pub const fn stats(&self) -> &NormalizeStats {
        &self.stats
    }
}
