//! Tessera report generator
//!
//! Renders a grouped catalog report from an exported catalog snapshot.

mod cli;
mod load;
mod surface;

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tessera_core::catalog::ColumnMap;
use tessera_core::filter::TextSearch;
use tessera_core::reports::{
    ReportContext, ReportOutcome, ReportRequest, ReportScope, ReportService, ReportSurface,
};
use tessera_shared::{AppConfig, AppError, AppResult, LoggingConfig};

use crate::cli::Cli;
use crate::surface::WriterSurface;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return report_failure(&AppError::from(err)),
    };

    init_tracing(&config.logging);

    match run(&cli, &config) {
        Ok(outcome) => {
            info!(?outcome, "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Report generation failed");
            report_failure(&err)
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the report
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn report_failure(err: &AppError) -> ExitCode {
    eprintln!("error[{}]: {err}", err.error_code());
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn run(cli: &Cli, config: &AppConfig) -> AppResult<ReportOutcome> {
    let catalog_path = cli.catalog_path(&config.report).ok_or_else(|| {
        AppError::Config("no catalog given (--catalog or report.catalog_path)".to_string())
    })?;
    let catalog = load::load_catalog(&catalog_path, &config.report.date_field)?;

    let request = match cli.request_path(&config.report) {
        Some(path) => load::load_request(&path)?,
        None => ReportRequest::new(ReportScope::All),
    };
    let request = cli.apply_overrides(request);

    let columns = ColumnMap::default().with_overrides(&config.report.column_overrides);
    let search = request
        .search
        .as_deref()
        .map(|query| TextSearch::new(query, &columns))
        .filter(|search| !search.is_empty());

    let mut ctx = ReportContext::new(&catalog, &columns, &request);
    if let Some(search) = &search {
        ctx = ctx.with_pre_filter(search);
    }

    let format = cli.format(&config.report);
    let mut surface: Box<dyn ReportSurface> = match cli.output_path(&config.report) {
        Some(path) => {
            let file = File::create(&path)
                .map_err(|err| AppError::Internal(format!("{}: {err}", path.display())))?;
            Box::new(WriterSurface::new(
                BufWriter::new(file),
                path.display().to_string(),
            ))
        }
        None => Box::new(WriterSurface::new(io::stdout().lock(), "stdout")),
    };

    Ok(ReportService::generate_as(&ctx, format, surface.as_mut())?)
}
