//! Exact-match attribute filters.
//!
//! Each parameter that is present must equal the record's value for the
//! corresponding column exactly. Absent parameters are not checked.

use serde::{Deserialize, Serialize};

use super::RecordFilter;
use super::params::{self, constraint};
use crate::catalog::{ColumnMap, ProductRecord, col};

fn field_matches(record: &ProductRecord, columns: &ColumnMap, id: &str, param: Option<&str>) -> bool {
    constraint(param).is_none_or(|expected| columns.text(record, id) == expected)
}

/// Technical classification filter (slip resistance ratings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechFilter {
    /// Whether the filter applies.
    pub active: bool,
    /// Slip-resistance class (e.g. "C1").
    #[serde(deserialize_with = "params::text")]
    pub cte: Option<String>,
    /// R rating (e.g. "R10").
    #[serde(deserialize_with = "params::text")]
    pub r: Option<String>,
    /// DIN letter rating (e.g. "A").
    #[serde(deserialize_with = "params::text")]
    pub din: Option<String>,
    /// PTV wet rating.
    #[serde(deserialize_with = "params::text")]
    pub ptv: Option<String>,
}

impl RecordFilter for TechFilter {
    fn is_active(&self) -> bool {
        self.active
    }

    fn matches(&self, record: &ProductRecord, columns: &ColumnMap) -> bool {
        field_matches(record, columns, col::CLASE, self.cte.as_deref())
            && field_matches(record, columns, col::R, self.r.as_deref())
            && field_matches(record, columns, col::LETRA, self.din.as_deref())
            && field_matches(record, columns, col::PTV, self.ptv.as_deref())
    }
}

/// Structural filter (size and typology).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructFilter {
    /// Whether the filter applies.
    pub active: bool,
    /// Size / format (e.g. "60x60").
    #[serde(deserialize_with = "params::text")]
    pub medida: Option<String>,
    /// Typology (e.g. "Porcelain").
    #[serde(deserialize_with = "params::text")]
    pub tipo: Option<String>,
}

impl RecordFilter for StructFilter {
    fn is_active(&self) -> bool {
        self.active
    }

    fn matches(&self, record: &ProductRecord, columns: &ColumnMap) -> bool {
        field_matches(record, columns, col::MEDIDA, self.medida.as_deref())
            && field_matches(record, columns, col::TIPOLOGIA, self.tipo.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn tile() -> ProductRecord {
        ProductRecord::new()
            .with_field("UNE_41901:2017_EX", "C1")
            .with_field("Deslizamiento_DIN_51130", "R10")
            .with_field("DIN_51097", "A")
            .with_field("PTV_(WET)", " P ")
            .with_field("Medida", "60x60")
            .with_field("Desc._Familia_web", "Porcelain")
    }

    fn tech(cte: Option<&str>, r: Option<&str>, din: Option<&str>, ptv: Option<&str>) -> TechFilter {
        TechFilter {
            active: true,
            cte: cte.map(str::to_string),
            r: r.map(str::to_string),
            din: din.map(str::to_string),
            ptv: ptv.map(str::to_string),
        }
    }

    #[rstest]
    #[case(tech(Some("C1"), Some("R10"), Some("A"), Some("P")), true)]
    #[case(tech(Some("C1"), None, None, None), true)]
    #[case(tech(None, None, None, None), true)]
    #[case(tech(Some(""), Some("  "), None, Some("P")), true)]
    #[case(tech(Some("C2"), Some("R10"), Some("A"), Some("P")), false)]
    #[case(tech(None, Some("R9"), None, None), false)]
    #[case(tech(None, None, Some("a"), None), false)]
    #[case(tech(None, None, None, Some("X")), false)]
    fn test_tech_matches(#[case] filter: TechFilter, #[case] expected: bool) {
        assert_eq!(filter.matches(&tile(), &ColumnMap::default()), expected);
    }

    #[test]
    fn test_tech_missing_field_fails_present_constraint() {
        let record = ProductRecord::new().with_field("UNE_41901:2017_EX", "C1");
        let filter = tech(Some("C1"), Some("R10"), None, None);
        assert!(!filter.matches(&record, &ColumnMap::default()));
    }

    #[rstest]
    #[case(Some("60x60"), Some("Porcelain"), true)]
    #[case(Some("60x60"), None, true)]
    #[case(None, Some("Porcelain"), true)]
    #[case(Some("60X60"), None, false)]
    #[case(Some("30x30"), Some("Porcelain"), false)]
    #[case(None, Some("Ceramic"), false)]
    fn test_struct_matches(
        #[case] medida: Option<&str>,
        #[case] tipo: Option<&str>,
        #[case] expected: bool,
    ) {
        let filter = StructFilter {
            active: true,
            medida: medida.map(str::to_string),
            tipo: tipo.map(str::to_string),
        };
        assert_eq!(filter.matches(&tile(), &ColumnMap::default()), expected);
    }

    #[test]
    fn test_remapped_columns() {
        let overrides = [("MEDIDA".to_string(), "Formato".to_string())];
        let columns = ColumnMap::default().with_overrides(overrides.iter().map(|(k, v)| (k, v)));
        let record = ProductRecord::new().with_field("Formato", "60x60");
        let filter = StructFilter {
            active: true,
            medida: Some("60x60".to_string()),
            tipo: None,
        };
        assert!(filter.matches(&record, &columns));
        assert!(!filter.matches(&record, &ColumnMap::default()));
    }

    #[test]
    fn test_deserialize_minimal_shapes() {
        let tech: TechFilter = serde_json::from_value(json!({"active": false})).unwrap();
        assert_eq!(tech, TechFilter::default());

        let structural: StructFilter =
            serde_json::from_value(json!({"active": true, "medida": "60x60", "tipo": ""}))
                .unwrap();
        assert!(structural.active);
        assert_eq!(structural.medida.as_deref(), Some("60x60"));
        assert_eq!(structural.tipo, None);
    }
}
