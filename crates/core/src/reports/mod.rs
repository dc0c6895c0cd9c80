//! Catalog report generation.
//!
//! This module turns a catalog snapshot and the operator's settings into a
//! report:
//! - Scope and filter resolution
//! - Grouping by collection and series
//! - HTML and plain-text rendering onto an output surface

pub mod error;
pub mod render;
pub mod service;
pub mod surface;
pub mod types;


pub use error::ReportError;
pub use render::{escape_html, render_html, render_text};
pub use service::ReportService;
pub use surface::{BufferSurface, ReportSurface};
pub use types::*;
