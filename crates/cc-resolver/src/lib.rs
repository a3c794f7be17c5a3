//! Quantity resolution for batch-based crafting
//!
//! Crafting only happens in whole batches, so producing any quantity that is
//! not an exact multiple of a recipe's batch output still consumes a full
//! batch's raw input. These are pure functions; the catalog guarantees
//! `batch_output >= 1` for every recipe it serves.

use cc_types::{AppError, AppResult, Material, Recipe};

/// Number of whole batches needed to produce `quantity` items.
pub fn batches_required(batch_output: u32, quantity: u32) -> u32 {
    debug_assert!(batch_output >= 1);
    quantity.div_ceil(batch_output)
}

/// Raw units of material consumed to produce `quantity` items with `recipe`.
///
/// Errors with `InvalidQuantity` when `quantity` is zero.
pub fn raw_units_needed(recipe: &Recipe, quantity: u32) -> AppResult<f64> {
    if quantity == 0 {
        return Err(AppError::InvalidQuantity(
            "quantity must be a positive integer".to_string(),
        ));
    }

    let batches = batches_required(recipe.batch_output, quantity);
    Ok(f64::from(batches) * recipe.raw_per_batch)
}

/// Look up `item` in `material` and compute the raw units needed for
/// `quantity` of it.
pub fn resolve(material: &Material, item: &str, quantity: u32) -> AppResult<f64> {
    let recipe = material.recipe(item)?;
    raw_units_needed(recipe, quantity)
}
