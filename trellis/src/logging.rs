//! File logging setup for applications embedding the components.

use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::LoggingError;

/// Install a `simplelog` file logger at `path`.
///
/// Validation warnings and dispatch traces go through the `log` facade, so
/// nothing is printed unless a logger like this one is installed.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
