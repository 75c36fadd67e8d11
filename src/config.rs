//! Configuration management for the library catalog

use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

use crate::{error::AppResult, models::Date};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Settings for the sample session run by the binary
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DemoConfig {
    /// Print the local date instead of the configured one
    pub use_system_date: bool,
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl DemoConfig {
    pub fn today(&self) -> Date {
        if self.use_system_date {
            Date::today()
        } else {
            Date::new(self.day, self.month, self.year)
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // LIBRARY_LOGGING__LEVEL, LIBRARY_DEMO__USE_SYSTEM_DATE, ...
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            use_system_date: false,
            day: 24,
            month: 7,
            year: 2025,
        }
    }
}
