//! Record filtering for reports.
//!
//! Three independent filter dimensions (date, technical, structural) are
//! combined with AND. An inactive dimension imposes no constraint.

pub mod attributes;
pub mod date;
pub mod params;
pub mod search;

use serde::{Deserialize, Serialize};

use crate::catalog::{ColumnMap, ProductRecord};

pub use attributes::{StructFilter, TechFilter};
pub use date::{DateFilter, DateMode};
pub use search::{CatalogPreFilter, TextSearch};

/// A single filter dimension.
pub trait RecordFilter {
    /// Returns true if the filter is toggled on.
    fn is_active(&self) -> bool;

    /// Returns true if the record satisfies the filter parameters.
    fn matches(&self, record: &ProductRecord, columns: &ColumnMap) -> bool;

    /// Returns true if the record passes; inactive filters pass everything.
    fn admits(&self, record: &ProductRecord, columns: &ColumnMap) -> bool {
        !self.is_active() || self.matches(record, columns)
    }
}

/// The full set of report filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    /// Date-of-entry filter.
    #[serde(alias = "dateFilter")]
    pub date: DateFilter,
    /// Technical classification filter.
    #[serde(alias = "techFilter")]
    pub tech: TechFilter,
    /// Structural filter.
    #[serde(alias = "structFilter")]
    pub structural: StructFilter,
}

impl FilterSet {
    /// Creates a filter set with every dimension inactive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date filter.
    #[must_use]
    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    /// Sets the technical filter.
    #[must_use]
    pub fn with_tech(mut self, tech: TechFilter) -> Self {
        self.tech = tech;
        self
    }

    /// Sets the structural filter.
    #[must_use]
    pub fn with_structural(mut self, structural: StructFilter) -> Self {
        self.structural = structural;
        self
    }

    fn dimensions(&self) -> [&dyn RecordFilter; 3] {
        [&self.date, &self.tech, &self.structural]
    }

    /// Number of active dimensions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.dimensions().iter().filter(|f| f.is_active()).count()
    }

    /// Returns true if the record passes every active dimension.
    #[must_use]
    pub fn admits(&self, record: &ProductRecord, columns: &ColumnMap) -> bool {
        self.dimensions()
            .iter()
            .all(|filter| filter.admits(record, columns))
    }
}
