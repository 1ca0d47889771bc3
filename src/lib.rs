pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod fs;
pub mod profile;

use anyhow::{anyhow, Result};

/// Routes `log` records of this crate to stderr. Verbosity 0 shows warnings.
pub fn init_logger(verbosity: u64) -> Result<()> {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity as usize + 1)
        .init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))
}
