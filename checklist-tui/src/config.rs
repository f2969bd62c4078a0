//! Runtime configuration read from the environment.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use simplelog::LevelFilter;

/// Log level: `off`, `error`, `warn`, `info`, `debug` or `trace`.
pub const LOG_LEVEL_VAR: &str = "CHECKLIST_LOG";
/// Log file path. Disables rotation of the default log directory.
pub const LOG_FILE_VAR: &str = "CHECKLIST_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    /// A level value that could not be parsed, reported once logging is up.
    pub rejected_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
            rejected_level: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(LOG_LEVEL_VAR).ok().as_deref(),
            env::var_os(LOG_FILE_VAR),
        )
    }

    fn from_vars(level: Option<&str>, log_file: Option<OsString>) -> Self {
        let mut config = Self::default();

        if let Some(level) = level.map(str::trim).filter(|l| !l.is_empty()) {
            match level.parse() {
                Ok(parsed) => config.log_level = parsed,
                Err(_) => config.rejected_level = Some(level.to_string()),
            }
        }

        config.log_file = log_file.filter(|f| !f.is_empty()).map(PathBuf::from);
        config
    }
}
