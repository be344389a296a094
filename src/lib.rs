// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod output;

pub use pac_optimizer_core::{normalize, normalize_bytes};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
