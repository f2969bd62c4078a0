mod app;
mod config;
mod error;
mod keymap;
mod paths;

use std::fs::{self, File};
use std::process::ExitCode;

use checkdom::Terminal;
use simplelog::WriteLogger;

use crate::app::App;
use crate::config::Config;
use crate::error::AppError;

fn init_logging(config: &Config) -> Result<(), AppError> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => {
            paths::rotate_logs();
            paths::log_file().ok_or(AppError::NoHomeDir)?
        }
    };

    let open = || -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(&path)
    };
    let log_file = open().map_err(|source| AppError::LogFile {
        path: path.clone(),
        source,
    })?;

    WriteLogger::init(config.log_level, simplelog::Config::default(), log_file)?;

    if let Some(level) = &config.rejected_level {
        log::warn!(
            "unknown {} value `{level}`, using {}",
            config::LOG_LEVEL_VAR,
            config.log_level
        );
    }
    log::info!("logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), AppError> {
    let mut terminal = Terminal::new()?;
    App::new().run(&mut terminal)
}

fn main() -> ExitCode {
    let config = Config::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("checklist-tui {} starting", env!("CARGO_PKG_VERSION"));

    // The terminal is restored when `run` returns, before anything is printed
    match run() {
        Ok(()) => {
            log::info!("checklist-tui exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("checklist-tui failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
