//! Recipe catalog management
//!
//! Handles resolving the recipes file path, loading and saving the catalog,
//! validating recipe values, and the built-in default recipe set used when
//! no recipes file can be loaded.

mod defaults;
pub mod paths;
mod storage;
mod validation;

pub use defaults::built_in_catalog;
pub use storage::{load_catalog, load_catalog_or_default, save_catalog};
pub use validation::validate_catalog;
