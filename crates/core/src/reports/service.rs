//! Report generation service.

use tessera_shared::OutputFormat;
use tessera_shared::types::{CollectionName, SeriesName, SkuId};
use tracing::{debug, info};

use super::error::ReportError;
use super::render;
use super::surface::ReportSurface;
use super::types::{
    EMPTY_MESSAGE, FULL_CATALOG_TITLE, GUIDANCE_MESSAGE, ReportContext, ReportOutcome,
    ReportRequest, ReportRow, ReportScope, ReportTable, ReportView, Resolution,
};
use crate::catalog::{ColumnMap, ProductRecord, col};

/// Service for resolving, grouping and rendering catalog reports.
pub struct ReportService;

impl ReportService {
    /// Selects the records a report covers.
    ///
    /// The base set is the whole catalog or the selected series, narrowed by
    /// the caller's pre-filter. Every candidate must then pass all active
    /// filters. Catalog order is preserved.
    pub fn resolve<'a>(ctx: &ReportContext<'a>) -> Resolution<'a> {
        let series = match ctx.request.scope {
            ReportScope::All => None,
            ReportScope::Current => match ctx.request.selected_series() {
                Some(series) => Some(series.as_str()),
                None => {
                    debug!("Current-series report requested without a selected series");
                    return Resolution::NeedsSeries;
                }
            },
        };

        let columns = ctx.columns;
        let mut candidates = 0usize;
        let records: Vec<&ProductRecord> = ctx
            .catalog
            .iter()
            .filter(|record| series.is_none_or(|s| columns.text(record, col::SERIE) == s))
            .filter(|record| ctx.pre_filter.is_none_or(|f| f.keep(record)))
            .inspect(|_| candidates += 1)
            .filter(|record| ctx.request.filters.admits(record, columns))
            .collect();

        debug!(
            scope = ?ctx.request.scope,
            series = series.unwrap_or_default(),
            active_filters = ctx.request.filters.active_count(),
            candidates,
            matched = records.len(),
            "Resolved report records"
        );

        Resolution::Records(records)
    }

    /// Title of the report for a request.
    #[must_use]
    pub fn title(request: &ReportRequest) -> String {
        match (request.scope, request.selected_series()) {
            (ReportScope::Current, Some(series)) => format!("Serie {series}"),
            _ => FULL_CATALOG_TITLE.to_string(),
        }
    }

    /// Groups resolved records into a display-ready view.
    ///
    /// Records are grouped by collection, then by series, both in
    /// first-seen order. Column ids are not validated; unknown ids yield
    /// empty cells.
    #[must_use]
    pub fn build_view(
        resolution: Resolution<'_>,
        column_ids: &[String],
        columns: &ColumnMap,
        title: &str,
    ) -> ReportView {
        let records = match resolution {
            Resolution::NeedsSeries => {
                return ReportView::Guidance {
                    message: GUIDANCE_MESSAGE.to_string(),
                };
            }
            Resolution::Records(records) if records.is_empty() => {
                return ReportView::Empty {
                    message: EMPTY_MESSAGE.to_string(),
                };
            }
            Resolution::Records(records) => records,
        };

        let mut table = ReportTable {
            title: title.to_string(),
            headers: column_ids
                .iter()
                .map(|id| columns.label(id).to_string())
                .collect(),
            sku_count: records.len(),
            collections: Vec::new(),
        };

        for record in records {
            let row = ReportRow {
                sku: SkuId::new(columns.text(record, col::ID)),
                cells: column_ids
                    .iter()
                    .map(|id| columns.text(record, id))
                    .collect(),
            };
            table
                .collection_mut(CollectionName::new(columns.text(record, col::COLECCION)))
                .series_mut(SeriesName::new(columns.text(record, col::SERIE)))
                .rows
                .push(row);
        }

        ReportView::Table(table)
    }

    /// Resolves, groups and renders a report as HTML onto a surface.
    pub fn generate<S>(ctx: &ReportContext<'_>, surface: &mut S) -> Result<ReportOutcome, ReportError>
    where
        S: ReportSurface + ?Sized,
    {
        Self::generate_as(ctx, OutputFormat::Html, surface)
    }

    /// Resolves, groups and renders a report in `format` onto a surface.
    ///
    /// The placeholder is hidden only after the content was written. A
    /// surface failure aborts generation.
    pub fn generate_as<S>(
        ctx: &ReportContext<'_>,
        format: OutputFormat,
        surface: &mut S,
    ) -> Result<ReportOutcome, ReportError>
    where
        S: ReportSurface + ?Sized,
    {
        let view = Self::build_view(
            Self::resolve(ctx),
            &ctx.request.columns,
            ctx.columns,
            &Self::title(ctx.request),
        );

        let content = match format {
            OutputFormat::Html => render::render_html(&view),
            OutputFormat::Text => render::render_text(&view),
        };
        surface.write_content(&content)?;
        surface.hide_placeholder()?;

        let outcome = view.outcome();
        info!(?outcome, ?format, "Report generated");
        Ok(outcome)
    }
}
