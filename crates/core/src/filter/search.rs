//! Catalog-level pre-filters.

use crate::catalog::{ColumnMap, ProductRecord, col};

/// Narrowing applied to the catalog before report filters run.
///
/// The report pipeline treats it as opaque: it only asks whether a record
/// stays in the candidate set.
pub trait CatalogPreFilter {
    /// Returns true if the record stays in the candidate set.
    fn keep(&self, record: &ProductRecord) -> bool;
}

impl<F> CatalogPreFilter for F
where
    F: Fn(&ProductRecord) -> bool,
{
    fn keep(&self, record: &ProductRecord) -> bool {
        self(record)
    }
}

const SEARCHABLE: [&str; 5] = [col::ID, col::NOMBRE, col::COLECCION, col::SERIE, col::COLOR];

/// Free-text catalog search.
///
/// Case-insensitive substring match against the identifier, name,
/// collection, series and color of a record.
#[derive(Debug, Clone)]
pub struct TextSearch<'a> {
    needle: String,
    columns: &'a ColumnMap,
}

impl<'a> TextSearch<'a> {
    /// Creates a search for `query`.
    #[must_use]
    pub fn new(query: &str, columns: &'a ColumnMap) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
            columns,
        }
    }

    /// Returns true if the query is blank and keeps every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

impl CatalogPreFilter for TextSearch<'_> {
    fn keep(&self, record: &ProductRecord) -> bool {
        self.is_empty()
            || SEARCHABLE.iter().any(|id| {
                self.columns
                    .text(record, id)
                    .to_lowercase()
                    .contains(&self.needle)
            })
    }
}
