use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("could not open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("could not start logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("no home directory to place logs in")]
    NoHomeDir,
}
