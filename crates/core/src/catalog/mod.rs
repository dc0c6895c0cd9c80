//! Catalog data model.
//!
//! This module provides the in-memory view of the product catalog:
//! - Product records with their precomputed entry date
//! - The logical column enumeration and its record keys
//! - Null-safe value formatting

pub mod columns;
pub mod date;
pub mod record;

pub use columns::{ColumnMap, ColumnSpec, col};
pub use date::parse_entry_date;
pub use record::{ProductRecord, safe_text};
