//! Report data types.

use serde::{Deserialize, Serialize};
use tessera_shared::types::{CollectionName, SeriesName, SkuId};

use crate::catalog::{ColumnMap, ProductRecord};
use crate::filter::{CatalogPreFilter, FilterSet};

/// Shown when the report is scoped to the current series but none is selected.
pub const GUIDANCE_MESSAGE: &str = "Selecciona una serie primero para generar el informe.";

/// Shown when no record passes the filters.
pub const EMPTY_MESSAGE: &str = "No hay resultados para los filtros seleccionados.";

/// Title of a full-catalog report.
pub const FULL_CATALOG_TITLE: &str = "Catálogo completo";

/// Which part of the catalog a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportScope {
    /// Only the currently selected series.
    #[default]
    Current,
    /// The entire catalog.
    All,
}

/// Snapshot of the operator's report settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRequest {
    /// Report scope.
    pub scope: ReportScope,
    /// Currently selected series, if any.
    #[serde(alias = "currentSerie")]
    pub current_series: Option<SeriesName>,
    /// Active filters.
    #[serde(flatten)]
    pub filters: FilterSet,
    /// Selected column ids, in display order.
    #[serde(alias = "selectedCols")]
    pub columns: Vec<String>,
    /// Catalog-level search text.
    pub search: Option<String>,
}

impl ReportRequest {
    /// Creates a request with the given scope and no filters.
    #[must_use]
    pub fn new(scope: ReportScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Sets the current series.
    #[must_use]
    pub fn with_series(mut self, series: impl Into<SeriesName>) -> Self {
        self.current_series = Some(series.into());
        self
    }

    /// Sets the filters.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Sets the displayed columns.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the selected series if one is set and not blank.
    #[must_use]
    pub fn selected_series(&self) -> Option<&SeriesName> {
        self.current_series.as_ref().filter(|series| !series.is_empty())
    }
}

/// Everything the resolver reads, borrowed for one generation.
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    /// Catalog records in catalog order.
    pub catalog: &'a [ProductRecord],
    /// Column enumeration.
    pub columns: &'a ColumnMap,
    /// Operator settings.
    pub request: &'a ReportRequest,
    /// Caller-supplied catalog narrowing.
    pub pre_filter: Option<&'a dyn CatalogPreFilter>,
}

impl<'a> ReportContext<'a> {
    /// Creates a context without pre-filter.
    #[must_use]
    pub const fn new(
        catalog: &'a [ProductRecord],
        columns: &'a ColumnMap,
        request: &'a ReportRequest,
    ) -> Self {
        Self {
            catalog,
            columns,
            request,
            pre_filter: None,
        }
    }

    /// Sets the catalog pre-filter.
    #[must_use]
    pub fn with_pre_filter(mut self, pre_filter: &'a dyn CatalogPreFilter) -> Self {
        self.pre_filter = Some(pre_filter);
        self
    }
}

/// Result of scope and filter resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Current-series scope without a selected series.
    NeedsSeries,
    /// Matching records in catalog order.
    Records(Vec<&'a ProductRecord>),
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// SKU identifier.
    pub sku: SkuId,
    /// Formatted cells in column order.
    pub cells: Vec<String>,
}

/// Rows of one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesGroup {
    /// Series name.
    pub name: SeriesName,
    /// Rows in catalog order.
    pub rows: Vec<ReportRow>,
}

/// Series of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionGroup {
    /// Collection name.
    pub name: CollectionName,
    /// Series in first-seen order.
    pub series: Vec<SeriesGroup>,
}

impl CollectionGroup {
    /// Number of SKUs in this collection.
    #[must_use]
    pub fn sku_count(&self) -> usize {
        self.series.iter().map(|s| s.rows.len()).sum()
    }

    /// Returns the group for `name`, appending it if not seen yet.
    pub fn series_mut(&mut self, name: SeriesName) -> &mut SeriesGroup {
        let idx = if let Some(idx) = self.series.iter().position(|s| s.name == name) {
            idx
        } else {
            self.series.push(SeriesGroup {
                name,
                rows: Vec::new(),
            });
            self.series.len() - 1
        };
        &mut self.series[idx]
    }
}

/// Grouped report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Report title.
    pub title: String,
    /// Column headers in selection order.
    pub headers: Vec<String>,
    /// Total number of SKUs.
    pub sku_count: usize,
    /// Collections in first-seen order.
    pub collections: Vec<CollectionGroup>,
}

impl ReportTable {
    /// Returns the group for `name`, appending it if not seen yet.
    pub fn collection_mut(&mut self, name: CollectionName) -> &mut CollectionGroup {
        let idx = if let Some(idx) = self.collections.iter().position(|c| c.name == name) {
            idx
        } else {
            self.collections.push(CollectionGroup {
                name,
                series: Vec::new(),
            });
            self.collections.len() - 1
        };
        &mut self.collections[idx]
    }

    /// Iterates over all rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.collections
            .iter()
            .flat_map(|c| c.series.iter())
            .flat_map(|s| s.rows.iter())
    }
}

/// Display-ready report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportView {
    /// A precondition is missing; shows guidance instead of a table.
    Guidance {
        /// Guidance text.
        message: String,
    },
    /// No record passed the filters.
    Empty {
        /// Explanation text.
        message: String,
    },
    /// Grouped table.
    Table(ReportTable),
}

impl ReportView {
    /// Outcome tag of this view.
    #[must_use]
    pub fn outcome(&self) -> ReportOutcome {
        match self {
            Self::Guidance { .. } => ReportOutcome::Guidance,
            Self::Empty { .. } => ReportOutcome::Empty,
            Self::Table(table) => ReportOutcome::Table {
                sku_count: table.sku_count,
            },
        }
    }
}

/// What a completed generation showed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// A table with this many SKUs.
    Table {
        /// Number of SKUs in the table.
        sku_count: usize,
    },
    /// The guidance message.
    Guidance,
    /// The empty-result message.
    Empty,
}
