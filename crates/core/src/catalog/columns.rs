//! Logical column enumeration.
//!
//! The catalog's raw field names are an external schema. Filters and
//! reports refer to logical column ids instead and resolve them through a
//! [`ColumnMap`], so the schema can change without touching filter logic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::ProductRecord;

/// Logical column ids.
pub mod col {
    /// Collection name.
    pub const COLECCION: &str = "COLECCION";
    /// Series name.
    pub const SERIE: &str = "SERIE";
    /// Typology / product family.
    pub const TIPOLOGIA: &str = "TIPOLOGIA";
    /// Visual effect.
    pub const EFECTO: &str = "EFECTO";
    /// Intended use.
    pub const USO: &str = "USO";
    /// Series finish.
    pub const ACABADO_SERIE: &str = "ACABADO_SERIE";
    /// Chromatic variation.
    pub const VARIACION: &str = "VARIACION";
    /// Area.
    pub const AREA: &str = "AREA";
    /// Article identifier.
    pub const ID: &str = "ID";
    /// Image reference.
    pub const IMAGEN: &str = "IMAGEN";
    /// Article name.
    pub const NOMBRE: &str = "NOMBRE";
    /// Color.
    pub const COLOR: &str = "COLOR";
    /// Size / format.
    pub const MEDIDA: &str = "MEDIDA";
    /// Thickness in millimetres.
    pub const ESPESOR: &str = "ESPESOR";
    /// Article finish.
    pub const ACABADO_ART: &str = "ACABADO_ART";
    /// Price group.
    pub const GRUPO_PRECIO: &str = "GRUPO_PRECIO";
    /// Graphics.
    pub const GRAFICAS: &str = "GRAFICAS";
    /// PEI abrasion class.
    pub const PEI: &str = "PEI";
    /// Raw date of entry.
    pub const FECHA_ALTA: &str = "FECHA_ALTA";
    /// Slip-resistance class.
    pub const CLASE: &str = "CLASE";
    /// R rating.
    pub const R: &str = "R";
    /// DIN letter rating.
    pub const LETRA: &str = "LETRA";
    /// PTV wet rating.
    pub const PTV: &str = "PTV";
    /// Pieces per box.
    pub const PZ_CAJA: &str = "PZ_CAJA";
    /// Square metres per box.
    pub const M2_CAJA: &str = "M2_CAJA";
    /// Kilograms per box.
    pub const KG_CAJA: &str = "KG_CAJA";
    /// Boxes per pallet.
    pub const CJ_PALLET: &str = "CJ_PALLET";
    /// Square metres per pallet.
    pub const M2_PALLET: &str = "M2_PALLET";
    /// Kilograms per pallet.
    pub const KG_PALLET: &str = "KG_PALLET";
}

// (id, record key, header label)
const CATALOG_COLUMNS: &[(&str, &str, &str)] = &[
    (col::COLECCION, "Coleccion_web", "Colección"),
    (col::SERIE, "Serie_web", "Serie"),
    (col::TIPOLOGIA, "Desc._Familia_web", "Tipología"),
    (col::EFECTO, "Efecto_web", "Efecto"),
    (col::USO, "Tipo_de_uso", "Uso"),
    (col::ACABADO_SERIE, "Acabado_pieza_web", "Acabado serie"),
    (col::VARIACION, "Variacion_cromatica", "Variación"),
    (col::AREA, "area", "Área"),
    (col::ID, "Id._Articulo", "Id. artículo"),
    (col::IMAGEN, "Imagen_web", "Imagen"),
    (col::NOMBRE, "Nombre", "Nombre"),
    (col::COLOR, "Color_ok", "Color"),
    (col::MEDIDA, "Medida", "Medida"),
    (col::ESPESOR, "Espesor_mm", "Espesor (mm)"),
    (col::ACABADO_ART, "Acabado_pieza_web", "Acabado"),
    (col::GRUPO_PRECIO, "Grupo_Tarifa", "Grupo tarifa"),
    (col::GRAFICAS, "Graficas", "Gráficas"),
    (col::PEI, "UNE-EN_ISO_10545-7", "PEI"),
    (col::FECHA_ALTA, "Fecha_de_alta", "Fecha de alta"),
    (col::CLASE, "UNE_41901:2017_EX", "Clase"),
    (col::R, "Deslizamiento_DIN_51130", "R"),
    (col::LETRA, "DIN_51097", "DIN"),
    (col::PTV, "PTV_(WET)", "PTV"),
    (col::PZ_CAJA, "Pz/Caja", "Pz/Caja"),
    (col::M2_CAJA, "M2/Caja", "M2/Caja"),
    (col::KG_CAJA, "Kg/Caja", "Kg/Caja"),
    (col::CJ_PALLET, "Cj/Pallet", "Cj/Pallet"),
    (col::M2_PALLET, "M2/Pallet", "M2/Pallet"),
    (col::KG_PALLET, "Kg/Pallet", "Kg/Pallet"),
];

/// Underlying record key and header label of a logical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Record field key.
    pub key: String,
    /// Header label shown in reports.
    pub label: String,
}

/// Immutable mapping from logical column id to record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    columns: BTreeMap<String, ColumnSpec>,
}

impl Default for ColumnMap {
    /// The fixed catalog enumeration.
    fn default() -> Self {
        let columns = CATALOG_COLUMNS
            .iter()
            .map(|&(id, key, label)| {
                (
                    id.to_string(),
                    ColumnSpec {
                        key: key.to_string(),
                        label: label.to_string(),
                    },
                )
            })
            .collect();
        Self { columns }
    }
}

impl ColumnMap {
    /// Returns a copy with the record keys of the given ids replaced.
    ///
    /// Ids are matched case-insensitively (configuration sources may
    /// lowercase keys). Ids not yet known are added with their id as label.
    #[must_use]
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut columns = self.columns.clone();
        for (id, key) in overrides {
            let id = id.to_ascii_uppercase();
            columns
                .entry(id.clone())
                .and_modify(|spec| spec.key.clone_from(key))
                .or_insert_with(|| ColumnSpec {
                    key: key.clone(),
                    label: id,
                });
        }
        Self { columns }
    }

    /// Returns the column spec for an id.
    #[must_use]
    pub fn spec(&self, id: &str) -> Option<&ColumnSpec> {
        self.columns.get(id)
    }

    /// Returns the record key for an id.
    #[must_use]
    pub fn key(&self, id: &str) -> Option<&str> {
        self.spec(id).map(|spec| spec.key.as_str())
    }

    /// Returns the header label for an id, falling back to the id itself.
    #[must_use]
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.spec(id).map_or(id, |spec| spec.label.as_str())
    }

    /// Returns the display text of a logical column in a record.
    ///
    /// Unknown ids yield an empty cell.
    #[must_use]
    pub fn text(&self, record: &ProductRecord, id: &str) -> String {
        self.key(id).map(|key| record.text(key)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enumeration() {
        let map = ColumnMap::default();
        assert_eq!(map.columns.len(), CATALOG_COLUMNS.len());
        assert_eq!(map.key(col::CLASE), Some("UNE_41901:2017_EX"));
        assert_eq!(map.key(col::PTV), Some("PTV_(WET)"));
        assert_eq!(map.key(col::ACABADO_SERIE), map.key(col::ACABADO_ART));
        assert_eq!(map.label(col::MEDIDA), "Medida");
    }

    #[test]
    fn test_unknown_column() {
        let map = ColumnMap::default();
        let record = ProductRecord::new().with_field("Nombre", "Item 1");
        assert_eq!(map.key("PRECIO"), None);
        assert_eq!(map.label("PRECIO"), "PRECIO");
        assert_eq!(map.text(&record, "PRECIO"), "");
        assert_eq!(map.text(&record, col::NOMBRE), "Item 1");
    }

    #[test]
    fn test_overrides() {
        let overrides: BTreeMap<String, String> = [
            ("NOMBRE".to_string(), "Descripcion".to_string()),
            ("precio".to_string(), "Precio_web".to_string()),
        ]
        .into_iter()
        .collect();

        let base = ColumnMap::default();
        let map = base.with_overrides(&overrides);

        assert_eq!(map.key(col::NOMBRE), Some("Descripcion"));
        assert_eq!(map.label(col::NOMBRE), "Nombre");
        assert_eq!(map.key("PRECIO"), Some("Precio_web"));
        assert_eq!(map.label("PRECIO"), "PRECIO");
        assert_eq!(base.key(col::NOMBRE), Some("Nombre"));
    }
}
