// src/output.rs
//! 端末への出力 (ロゴ、ヘルプ、バージョン、結果メッセージ)

use std::io::{self, Write};
use std::path::Path;

use pac_optimizer_core::Normalized;
use pac_optimizer_shared_kernel::PacOptimizerError;

use crate::VERSION;

pub const LOGO: &str = concat!(
    "\n",
    r"  _____        _____    ____        _   _           _              ",
    "\n",
    r" |  __ \ /\   / ____|  / __ \      | | (_)         (_)             ",
    "\n",
    r" | |__) /  \ | |      | |  | |_ __ | |_ _ _ __ ___  _ _______ _ __ ",
    "\n",
    r" |  ___/ /\ \| |      | |  | | '_ \| __| | '_ ` _ \| |_  / _ \ '__|",
    "\n",
    r" | |  / ____ \ |____  | |__| | |_) | |_| | | | | | | |/ /  __/ |   ",
    "\n",
    r" |_| /_/    \_\_____|  \____/| .__/ \__|_|_| |_| |_|_/___\___|_|   ",
    "\n",
    r"                             | |                                   ",
    "\n",
    r"                             |_|                                   ",
    "\n",
);

pub const HELP_TEXT: &str = "Usage: pac-optimizer [options] <input-file> <output-file>

Options:
  --version     Show version information
  --help        Show this help message
  -v, --verbose Show debug logging and an optimization summary

Arguments:
  <input-file>  Path to the PAC file to optimize
  <output-file> Path where the optimized PAC file will be saved

Description:
  PAC File Optimizer removes comments, empty spaces, and blank lines from a PAC file.
";

#[must_use]
pub fn version_text() -> String {
    format!("PAC File Optimizer\nVersion {VERSION}")
}

pub fn print_banner() {
    println!("{LOGO}");
}

pub fn print_version() {
    println!("{}", version_text());
}

pub fn print_help() {
    println!("{HELP_TEXT}");
}

pub fn print_success(input: &Path, output: &Path) {
    println!(
        "PAC file optimized successfully: {} → {}",
        input.display(),
        output.display()
    );
}

/// `--verbose` 時のサマリ
pub fn write_summary<W: Write>(out: &mut W, result: &Normalized) -> io::Result<()> {
    let stats = result.stats();
    writeln!(out, "  line endings:     {}", result.line_ending())?;
    writeln!(out, "  lines:            {}", stats.lines)?;
    writeln!(out, "  comments removed: {}", stats.comments_stripped)?;
    writeln!(out, "  blank lines:      {}", stats.blank_lines)?;
    writeln!(out, "  collapsed runs:   {}", stats.collapsed_runs)?;
    writeln!(
        out,
        "  size:             {} -> {} bytes ({} saved)",
        stats.bytes_in,
        stats.bytes_out,
        stats.bytes_saved()
    )
}

pub fn print_summary(result: &Normalized) {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    if let Err(e) = write_summary(&mut lock, result) {
        log::warn!("failed to print summary: {e}");
    }
}

/// エラーを利用者向けの1行メッセージに整形する
#[must_use]
pub fn error_message(err: &PacOptimizerError) -> String {
    match err {
        PacOptimizerError::InputRead { .. } | PacOptimizerError::OutputWrite { .. } => {
            err.to_string()
        }
        _ => format!("Error: {err}"),
    }
}

/// エラーを stderr に出力する (引数不足の場合は使い方も表示)
pub fn report_error(err: &PacOptimizerError) {
    eprintln!("{}", error_message(err));
    if matches!(err, PacOptimizerError::MissingArguments { .. }) {
        eprintln!("{HELP_TEXT}");
    }
}
