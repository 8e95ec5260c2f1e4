//! Logger module for Redex
//!
//! Go-style simple logging: `[LEVEL] message`
//!
//! # Usage
//!
//! ```rust
//! use redex::util::logger;
//!
//! logger::init();
//! tracing::info!("reducing {}", "main");
//! ```

use crate::util::config::ReduceConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Every reduction step
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn layer(level: LogLevel) -> impl Layer<Registry> {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    // Go 风格：显示 [LEVEL] 前缀，不显示时间、不显示模块路径、无颜色
    tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter)
}

/// Initialize logger with default configuration (INFO level)
pub fn init() {
    init_with_level(LogLevel::Info);
}

/// Initialize logger with custom level
///
/// Panics if a global subscriber is already installed.
pub fn init_with_level(level: LogLevel) {
    Registry::default().with(layer(level)).init();
}

/// Install the logger unless another subscriber got there first.
///
/// Returns `true` when this call installed it; repeated calls are no-ops.
pub fn try_init_with_level(level: LogLevel) -> bool {
    Registry::default().with(layer(level)).try_init().is_ok()
}

/// Level matching a reduction config: per-step events need TRACE
pub fn level_for(config: &ReduceConfig) -> LogLevel {
    if config.log_steps {
        LogLevel::Trace
    } else {
        LogLevel::Info
    }
}

/// Initialize logger for debug use (DEBUG level)
pub fn init_debug() {
    init_with_level(LogLevel::Debug);
}
