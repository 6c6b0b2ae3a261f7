use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "raybounce")]
#[command(about = "Traces rays bouncing between mirrors in a 2D scene")]
pub struct Args {
    /// Scene file describing primitives and rays
    #[arg(short, long, default_value = "scene.toml")]
    pub config: PathBuf,

    /// Overrides the bounce budget from the scene file
    #[arg(short, long)]
    pub max_bounces: Option<u32>,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Initialize the logger with the specified level
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
