//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tessera_core::catalog::col;
use tessera_core::reports::{ReportRequest, ReportScope};
use tessera_shared::{OutputFormat, ReportConfig};

/// Columns shown when neither a request file nor `--columns` selects any.
pub const DEFAULT_COLUMNS: [&str; 5] = [col::ID, col::NOMBRE, col::MEDIDA, col::ACABADO_ART, col::COLOR];

/// Renders a grouped report from a catalog snapshot.
#[derive(Debug, Parser)]
#[command(name = "tessera-report", version, about)]
pub struct Cli {
    /// Catalog snapshot (JSON array of product records).
    #[arg(long, env = "TESSERA_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Report request (JSON) with scope, series, filters and columns.
    #[arg(long, env = "TESSERA_REQUEST")]
    pub request: Option<PathBuf>,

    /// Output file. Stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Report scope, overriding the request.
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Selected series, overriding the request.
    #[arg(long)]
    pub series: Option<String>,

    /// Comma separated column ids, overriding the request.
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Catalog search text, overriding the request.
    #[arg(long)]
    pub search: Option<String>,
}

/// `--format` values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// HTML fragment.
    Html,
    /// Tab-separated text.
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Text => Self::Text,
        }
    }
}

/// `--scope` values.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    /// Currently selected series.
    Current,
    /// Entire catalog.
    All,
}

impl From<ScopeArg> for ReportScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Current => Self::Current,
            ScopeArg::All => Self::All,
        }
    }
}

impl Cli {
    /// Catalog path from the flag or the configuration.
    pub fn catalog_path(&self, config: &ReportConfig) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| config.catalog_path.as_ref().map(PathBuf::from))
    }

    /// Request path from the flag or the configuration.
    pub fn request_path(&self, config: &ReportConfig) -> Option<PathBuf> {
        self.request
            .clone()
            .or_else(|| config.request_path.as_ref().map(PathBuf::from))
    }

    /// Output path from the flag or the configuration.
    pub fn output_path(&self, config: &ReportConfig) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| config.output_path.as_ref().map(PathBuf::from))
    }

    /// Output format from the flag or the configuration.
    pub fn format(&self, config: &ReportConfig) -> OutputFormat {
        self.format.map_or(config.format, Into::into)
    }

    /// Applies command line overrides to a request.
    pub fn apply_overrides(&self, mut request: ReportRequest) -> ReportRequest {
        if let Some(scope) = self.scope {
            request.scope = scope.into();
        }
        if let Some(series) = &self.series {
            request.current_series = Some(series.as_str().into());
        }
        if !self.columns.is_empty() {
            request.columns.clone_from(&self.columns);
        }
        if let Some(search) = &self.search {
            request.search = Some(search.clone());
        }
        if request.columns.is_empty() {
            request.columns = DEFAULT_COLUMNS.iter().map(ToString::to_string).collect();
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_request() {
        let cli = Cli::parse_from([
            "tessera-report",
            "--scope",
            "current",
            "--series",
            "Basalto",
            "--columns",
            "NOMBRE,MEDIDA",
            "--search",
            "gris",
        ]);
        let request = cli.apply_overrides(ReportRequest::new(ReportScope::All));

        assert_eq!(request.scope, ReportScope::Current);
        assert_eq!(
            request.current_series.as_ref().map(|s| s.as_str()),
            Some("Basalto")
        );
        assert_eq!(request.columns, vec!["NOMBRE", "MEDIDA"]);
        assert_eq!(request.search.as_deref(), Some("gris"));
    }

    #[test]
    fn test_default_columns_when_none_selected() {
        let cli = Cli::parse_from(["tessera-report"]);
        let request = cli.apply_overrides(ReportRequest::new(ReportScope::All));
        assert_eq!(request.columns, DEFAULT_COLUMNS);
        assert_eq!(request.scope, ReportScope::All);
    }

    #[test]
    fn test_flags_take_precedence_over_config() {
        let config = ReportConfig {
            catalog_path: Some("config.json".into()),
            format: OutputFormat::Html,
            ..ReportConfig::default()
        };

        let cli = Cli::parse_from(["tessera-report", "--catalog", "flag.json", "--format", "text"]);
        assert_eq!(cli.catalog_path(&config), Some(PathBuf::from("flag.json")));
        assert_eq!(cli.format(&config), OutputFormat::Text);

        let cli = Cli::parse_from(["tessera-report"]);
        assert_eq!(cli.catalog_path(&config), Some(PathBuf::from("config.json")));
        assert_eq!(cli.format(&config), OutputFormat::Html);
        assert_eq!(cli.output_path(&config), None);
    }
}
