// crates/core/src/comment.rs
//! 行末コメント (`//`) の検出
//!
//! 直前の1文字だけを見るヒューリスティックです。`:` または `/` の直後の
//! `//` は URL (`http://`, `ftp://`) やパス中の連続スラッシュとみなして
//! 読み飛ばします。
//!
//! 文字列リテラルは解釈しません。`"a // b"` のように引用符の中にある `//`
//! も、直前が `:` / `/` でなければコメント開始として扱われます。

use memchr::memmem;

/// コメント開始位置 (最初の `/` のバイトオフセット) を返す
///
/// 行頭の `//` は常にコメントです。
///
/// ```rust
/// use pac_optimizer_core::find_comment_start;
///
/// assert_eq!(find_comment_start(b"http://example.com // note"), Some(19));
/// assert_eq!(find_comment_start(b"ftp://host/pub"), None);
/// assert_eq!(find_comment_start(b"// whole line"), Some(0));
/// ```
#[must_use]
pub fn find_comment_start(line: &[u8]) -> Option<usize> {
    // Non-overlapping matches are enough: a `//` skipped by the iterator
    // always starts right after a `/`, which rules it out anyway.
    memmem::find_iter(line, b"//").find(|&pos| !is_url_slashes(line, pos))
}

/// コメントを取り除いた行と、除去したかどうかを返す
#[must_use]
pub fn strip_comment(line: &[u8]) -> (&[u8], bool) {
    match find_comment_start(line) {
        Some(pos) => (&line[..pos], true),
        None => (line, false),
    }
}

fn is_url_slashes(line: &[u8], pos: usize) -> bool {
    pos > 0 && matches!(line[pos - 1], b':' | b'/')
}
