// src/core/config.rs
use std::env;

use log::LevelFilter;

// Configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_port: u16,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_port: 5000,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
