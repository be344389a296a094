// crates/core/src/collapse.rs
//! Blank-run collapsing.
//!
//! A run of two or more empty lines shows up in the joined text as three or
//! more consecutive terminators. One pattern per [`LineEnding`] is built from
//! the escaped terminator and compiled once per process.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::bytes::{Captures, Regex};

use crate::line_ending::LineEnding;

/// Collapse every run of 3+ terminators down to exactly 2.
///
/// Returns the new content and the number of runs that were collapsed.
///
/// ```rust
/// use pac_optimizer_core::{LineEnding, collapse_blank_runs};
///
/// let (out, runs) = collapse_blank_runs(b"a\r\n\r\n\r\n\r\nb", LineEnding::CrLf);
/// assert_eq!(&*out, b"a\r\n\r\nb");
/// assert_eq!(runs, 1);
/// ```
#[must_use]
pub fn collapse_blank_runs(content: &[u8], ending: LineEnding) -> (Cow<'_, [u8]>, usize) {
    let re = blank_run_regex(ending);
    let mut runs = 0usize;
    let out = re.replace_all(content, |_: &Captures<'_>| {
        runs += 1;
        double(ending)
    });
    (out, runs)
}

fn double(ending: LineEnding) -> &'static [u8] {
    match ending {
        LineEnding::CrLf => b"\r\n\r\n",
        LineEnding::Cr => b"\r\r",
        LineEnding::Lf => b"\n\n",
    }
}

fn blank_run_regex(ending: LineEnding) -> &'static Regex {
    static CRLF: OnceLock<Regex> = OnceLock::new();
    static CR: OnceLock<Regex> = OnceLock::new();
    static LF: OnceLock<Regex> = OnceLock::new();

    let cell = match ending {
        LineEnding::CrLf => &CRLF,
        LineEnding::Cr => &CR,
        LineEnding::Lf => &LF,
    };
    cell.get_or_init(|| build_pattern(ending))
}

fn build_pattern(ending: LineEnding) -> Regex {
    let token = regex::escape(ending.as_str());
    Regex::new(&format!("(?:{token}){{3,}}"))
        .expect("escaped line terminator always forms a valid pattern")
}
