// crates/core/src/lib.rs
//! PACファイル向けの行正規化ライブラリ
//!
//! 入力テキストを改行コードで分割し、行末コメントの除去・空白行の畳み込み・
//! 連続空行の圧縮を行います。I/O は一切行わず、どんな入力でも失敗しません。
//!
//! ```rust
//! let src = "function FindProxyForURL(url, host) { // entry\n\n\n\n  return \"DIRECT\";\n}\n";
//! let out = pac_optimizer_core::normalize(src);
//! assert_eq!(out, "function FindProxyForURL(url, host) { \n\n  return \"DIRECT\";\n}\n");
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod collapse;
pub mod comment;
pub mod document;
pub mod line;
pub mod line_ending;
pub mod stats;

pub use collapse::collapse_blank_runs;
pub use comment::{find_comment_start, strip_comment};
pub use document::{Document, Normalized};
pub use line::Line;
pub use line_ending::{LineEnding, SplitLines};
pub use stats::NormalizeStats;

/// Normalize a PAC script held in memory as UTF-8 text.
#[must_use]
pub fn normalize(content: &str) -> String {
    let bytes = normalize_bytes(content.as_bytes());
    // Truncation only happens at ASCII `/`, so valid input stays valid.
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Normalize raw file content of any encoding.
#[must_use]
pub fn normalize_bytes(content: &[u8]) -> Vec<u8> {
    Document::new(content).normalize().into_bytes()
}
