//! Common types used across the application.

pub mod name;

pub use name::{CollectionName, SeriesName, SkuId};
