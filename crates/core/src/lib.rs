//! Core catalog report logic for Tessera.
//!
//! This crate contains pure business logic with ZERO file, network or
//! terminal dependencies. It receives an already loaded catalog and the
//! operator's settings and produces a report.
//!
//! # Modules
//!
//! - `catalog` - Product records and the logical column enumeration
//! - `filter` - Date, technical and structural filters
//! - `reports` - Scope resolution, grouping and rendering

pub mod catalog;
pub mod filter;
pub mod reports;
