//! Core library for StatCard
//!
//! This crate defines the display-value type, the class-token merge
//! utility, and the error type shared by the UI and showcase crates.

pub mod classes;
pub mod error;
pub mod value;

// Re-exports
pub use classes::{merge_classes, ClassList};
pub use error::{Error, Result};
pub use value::DisplayValue;
