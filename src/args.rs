// src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// コマンドライン引数
///
/// `--help` / `--version` は clap 組み込みのものを無効化し、独自の
/// ヘルプ・バージョン表記を出力するためにフラグとして受け取ります。
/// 位置引数の個数チェックも [`crate::config::Command`] への変換時に行います。
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "pac-optimizer",
    about = "PAC File Optimizer",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// バージョン情報を表示
    #[arg(long)]
    pub version: bool,

    /// ヘルプを表示
    #[arg(long)]
    pub help: bool,

    /// 詳細ログと最適化サマリを表示
    #[arg(short, long)]
    pub verbose: bool,

    /// <input-file> <output-file>
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}
