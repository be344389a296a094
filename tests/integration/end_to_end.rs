// tests/integration/end_to_end.rs
use std::fs;

use pac_optimizer::app::optimize;
use pac_optimizer::config::Config;
use pac_optimizer_core::LineEnding;
use pac_optimizer_shared_kernel::PacOptimizerError;

#[path = "../common/mod.rs"]
mod common;
use common::{PAC_CRLF, PAC_WITH_COMMENTS, PAC_WITH_COMMENTS_OPTIMIZED, TempDir};

fn config(temp: &TempDir, input: &str, output: &str) -> Config {
    Config {
        input: temp.join(input),
        output: temp.join(output),
        verbose: false,
    }
}

#[test]
fn optimizes_file_on_disk() {
    let temp = TempDir::new("end_to_end");
    temp.write_file("proxy.pac", PAC_WITH_COMMENTS);

    let result = optimize(&config(&temp, "proxy.pac", "proxy.min.pac")).unwrap();

    assert_eq!(temp.read_file("proxy.min.pac"), PAC_WITH_COMMENTS_OPTIMIZED.as_bytes());
    assert_eq!(result.stats().comments_stripped, 3);
    assert_eq!(result.stats().collapsed_runs, 1);
}

#[test]
fn input_is_left_untouched() {
    let temp = TempDir::new("end_to_end");
    temp.write_file("proxy.pac", PAC_WITH_COMMENTS);

    optimize(&config(&temp, "proxy.pac", "out.pac")).unwrap();

    assert_eq!(temp.read_file("proxy.pac"), PAC_WITH_COMMENTS.as_bytes());
}

#[test]
fn crlf_file_keeps_crlf() {
    let temp = TempDir::new("end_to_end");
    temp.write_file("win.pac", PAC_CRLF);

    let result = optimize(&config(&temp, "win.pac", "win.out.pac")).unwrap();

    assert_eq!(result.line_ending(), LineEnding::CrLf);
    assert_eq!(
        temp.read_file("win.out.pac"),
        b"function FindProxyForURL(url, host) {\r\n\r\n  return \"DIRECT\";\r\n}\r\n"
    );
}

#[test]
fn optimizing_in_place_is_allowed() {
    let temp = TempDir::new("end_to_end");
    temp.write_file("proxy.pac", PAC_WITH_COMMENTS);

    optimize(&config(&temp, "proxy.pac", "proxy.pac")).unwrap();

    assert_eq!(temp.read_file("proxy.pac"), PAC_WITH_COMMENTS_OPTIMIZED.as_bytes());
}

#[test]
fn empty_file_produces_empty_output() {
    let temp = TempDir::new("end_to_end");
    temp.write_file("empty.pac", "");

    optimize(&config(&temp, "empty.pac", "out.pac")).unwrap();

    assert!(temp.read_file("out.pac").is_empty());
}

#[test]
fn missing_input_writes_nothing() {
    let temp = TempDir::new("end_to_end");

    let err = optimize(&config(&temp, "absent.pac", "out.pac")).unwrap_err();

    assert!(matches!(err, PacOptimizerError::InputFileNotFound { .. }));
    assert!(!temp.join("out.pac").exists());
}

#[test]
fn unwritable_output_is_reported() {
    let temp = TempDir::new("end_to_end");
    temp.write_file("proxy.pac", PAC_WITH_COMMENTS);

    let err = optimize(&config(&temp, "proxy.pac", "missing/dir/out.pac")).unwrap_err();

    assert!(matches!(err, PacOptimizerError::OutputWrite { .. }));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}
