// src/app.rs
use std::process::ExitCode;

use log::info;
use pac_optimizer_core::{Document, Normalized};
use pac_optimizer_infra::{FileReader, FileWriter};
use pac_optimizer_shared_kernel::Result;

use crate::args::Args;
use crate::config::{Command, Config};
use crate::output;

/// Read, normalize and write one PAC file.
///
/// Nothing is written unless the input was read in full; the output is
/// replaced atomically.
pub fn optimize(config: &Config) -> Result<Normalized> {
    let input = FileReader::read_input(&config.input)?;
    let normalized = Document::new(&input).normalize();
    FileWriter::write_output(&config.output, normalized.as_bytes())?;
    info!(
        "optimized {} -> {} ({} bytes saved)",
        config.input.display(),
        config.output.display(),
        normalized.stats().bytes_saved()
    );
    Ok(normalized)
}

/// Dispatch parsed arguments and map the outcome to a process exit code.
pub fn run(args: Args) -> ExitCode {
    let command = match Command::try_from(args) {
        Ok(command) => command,
        Err(e) => {
            output::report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Version => {
            output::print_version();
            ExitCode::SUCCESS
        }
        Command::Help => {
            output::print_help();
            ExitCode::SUCCESS
        }
        Command::Optimize(config) => match optimize(&config) {
            Ok(result) => {
                if config.verbose {
                    output::print_summary(&result);
                }
                output::print_success(&config.input, &config.output);
                ExitCode::SUCCESS
            }
            Err(e) => {
                output::report_error(&e);
                ExitCode::FAILURE
            }
        },
    }
}
