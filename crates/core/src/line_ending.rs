// crates/core/src/line_ending.rs
//! Line-ending detection and splitting.

use core::fmt;

use memchr::memmem;

/// Line terminator convention of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// Windows (`\r\n`)
    CrLf,
    /// Classic Mac OS (`\r`)
    Cr,
    /// Unix (`\n`)
    #[default]
    Lf,
}

impl LineEnding {
    /// Detect the style used by `content`.
    ///
    /// First match wins in priority order CRLF, CR, LF. Content without any
    /// terminator (including empty content) is treated as LF.
    #[must_use]
    pub fn detect(content: &[u8]) -> Self {
        if memmem::find(content, b"\r\n").is_some() {
            Self::CrLf
        } else if memchr::memchr(b'\r', content).is_some() {
            Self::Cr
        } else {
            Self::Lf
        }
    }

    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
            Self::Lf => "\n",
        }
    }

    /// Short human-readable name used in logs and summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CrLf => "CRLF",
            Self::Cr => "CR",
            Self::Lf => "LF",
        }
    }

    /// Split `content` on this terminator.
    ///
    /// Yields `n + 1` slices for `n` terminators, so empty content yields a
    /// single empty slice and a trailing terminator yields a trailing empty
    /// slice.
    #[must_use]
    pub const fn split(self, content: &[u8]) -> SplitLines<'_> {
        SplitLines {
            rest: Some(content),
            sep: self.as_bytes(),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator returned by [`LineEnding::split`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: Option<&'a [u8]>,
    sep: &'static [u8],
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        if let Some(pos) = memmem::find(rest, self.sep) {
            self.rest = Some(&rest[pos + self.sep.len()..]);
            Some(&rest[..pos])
        } else {
            self.rest = None;
            Some(rest)
        }
    }
}
