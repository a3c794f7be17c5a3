//! Catalog validation

use cc_types::{AppError, AppResult, Catalog};

/// Validate a catalog before it is used.
///
/// A failure here is treated exactly like a parse failure: the loader falls
/// back to the built-in defaults rather than serving bad data.
pub fn validate_catalog(catalog: &Catalog) -> AppResult<()> {
    for material in catalog.iter() {
        if material.name().is_empty() {
            return Err(AppError::Config(
                "Material names must be non-empty".to_string(),
            ));
        }

        for (item, recipe) in material.recipes() {
            if item.is_empty() {
                return Err(AppError::Config(format!(
                    "Material '{}' has an item with an empty name",
                    material.name()
                )));
            }

            if recipe.batch_output < 1 {
                return Err(AppError::Config(format!(
                    "Recipe '{}' of material '{}' has batch_output 0; must be at least 1",
                    item,
                    material.name()
                )));
            }

            if !recipe.raw_per_batch.is_finite() || recipe.raw_per_batch < 0.0 {
                return Err(AppError::Config(format!(
                    "Recipe '{}' of material '{}' has invalid raw_per_batch {}; must be a non-negative number",
                    item,
                    material.name(),
                    recipe.raw_per_batch
                )));
            }
        }
    }

    Ok(())
}
