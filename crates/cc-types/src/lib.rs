//! Shared types for craftcalc
//!
//! Data model (recipes, materials, the catalog) and the application error
//! enum used across the workspace.

pub mod errors;
pub mod recipes;

pub use errors::{AppError, AppResult};
pub use recipes::{normalize_name, Catalog, Material, Recipe};
