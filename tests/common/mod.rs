// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod fixtures;
pub mod temp;

#[allow(unused_imports)]
pub use fixtures::{PAC_CRLF, PAC_WITH_COMMENTS, PAC_WITH_COMMENTS_OPTIMIZED};
#[allow(unused_imports)]
pub use temp::TempDir;
