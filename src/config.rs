// src/config.rs
use crate::args::Args;
use pac_optimizer_shared_kernel::PacOptimizerError;
use std::path::PathBuf;

/// 解決済みの実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
}

/// 引数から決まる実行内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `--version` (`--help` より優先)
    Version,
    Help,
    Optimize(Config),
}

impl TryFrom<Args> for Command {
    type Error = PacOptimizerError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.version {
            return Ok(Self::Version);
        }
        if args.help {
            return Ok(Self::Help);
        }

        let found = args.files.len();
        let [input, output]: [PathBuf; 2] = args
            .files
            .try_into()
            .map_err(|_| PacOptimizerError::MissingArguments { found })?;

        Ok(Self::Optimize(Config {
            input,
            output,
            verbose: args.verbose,
        }))
    }
}
