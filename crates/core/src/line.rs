// crates/core/src/line.rs
//! 1行分の処理結果

use crate::comment::strip_comment;

/// コメント除去と空白行畳み込みを済ませた行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    text: &'a [u8],
    comment_stripped: bool,
    blank: bool,
}

impl<'a> Line<'a> {
    /// 改行コードを含まない生の行を処理する
    ///
    /// 1. `//` コメントを除去 ([`strip_comment`])
    /// 2. 空白文字だけが残った行は空文字列に置換
    ///
    /// 中身のある行の行頭インデントや末尾空白はそのまま残します。
    #[must_use]
    pub fn process(raw: &'a [u8]) -> Self {
        let (text, comment_stripped) = strip_comment(raw);
        let blank = is_blank(text);
        Self {
            text: if blank { &[] } else { text },
            comment_stripped,
            blank,
        }
    }

    /// 出力すべき内容 (空白行なら空)
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.text
    }

    #[must_use]
    pub const fn comment_stripped(&self) -> bool {
        self.comment_stripped
    }

    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.blank
    }
}

/// Unicode の空白文字のみで構成されているか
///
/// UTF-8 として不正なバイトを含む行は空白行とみなさない。
fn is_blank(text: &[u8]) -> bool {
    core::str::from_utf8(text).is_ok_and(|s| s.chars().all(char::is_whitespace))
}
