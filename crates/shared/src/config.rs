//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output format of a generated report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment for the report surface.
    #[default]
    Html,
    /// Tab-separated plain text for copy/paste.
    Text,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Path of the catalog snapshot (JSON array of product records).
    pub catalog_path: Option<String>,
    /// Path of the report request (JSON). Defaults to a full-catalog request.
    pub request_path: Option<String>,
    /// Where to write the report. Stdout when unset.
    pub output_path: Option<String>,
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Raw record field the entry date is parsed from when `_dateObj` is missing.
    #[serde(default = "default_date_field")]
    pub date_field: String,
    /// Overrides of the underlying record key per logical column id.
    #[serde(default)]
    pub column_overrides: BTreeMap<String, String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            request_path: None,
            output_path: None,
            format: OutputFormat::default(),
            date_field: default_date_field(),
            column_overrides: BTreeMap::new(),
        }
    }
}

fn default_date_field() -> String {
    "Fecha_de_alta".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "tessera=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TESSERA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
