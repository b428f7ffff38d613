//! File logging for terminal programs.
//!
//! A full-screen program owns stdout and stderr, so log output goes to a file.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

/// Errors raised while installing the file logger.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// The log file could not be created.
    #[error("cannot create log file '{path}': {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A global logger was already installed.
    #[error("logger already initialized")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Install a global `simplelog` logger writing to `path` at `level`.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LogInitError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| LogInitError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
