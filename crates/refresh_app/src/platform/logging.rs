//! Logger setup for the demo app.
//!
//! File output goes to `./refresh.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./refresh.log";

/// Destination for log output.
pub enum LogDestination {
    /// Write to ./refresh.log in current directory.
    File,
    /// Write to the terminal (stderr), leaving stdout to the indicator frames.
    Terminal,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    /// Reads `REFRESH_LOG_TO` (`file`, `terminal` or `both`); defaults to both.
    pub fn from_env() -> Self {
        match std::env::var("REFRESH_LOG_TO").as_deref() {
            Ok("file") => Self::File,
            Ok("terminal") => Self::Terminal,
            _ => Self::Both,
        }
    }
}

/// Installs the global logger. `REFRESH_LOG=debug` (or trace, warn, ...)
/// overrides the default info level.
pub fn initialize(destination: LogDestination) {
    let level = std::env::var("REFRESH_LOG")
        .ok()
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => vec![term_logger(level, config)],
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![term_logger(level, config.clone())];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn term_logger(level: LevelFilter, config: Config) -> Box<TermLogger> {
    TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
