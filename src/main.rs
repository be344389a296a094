// src/main.rs
use clap::Parser;
use pac_optimizer::app;
use pac_optimizer::args::Args;
use pac_optimizer::{logging, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Shown even when argument parsing fails.
    output::print_banner();
    let args = Args::parse();
    logging::init(args.verbose);
    app::run(args)
}
