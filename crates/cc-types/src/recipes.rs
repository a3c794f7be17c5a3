//! Recipe, material, and catalog types
//!
//! These types are built once at startup from the recipes file (or the
//! built-in defaults) and are read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Normalize a material or item name for storage and lookup.
///
/// Names are matched case-insensitively, so everything is trimmed and
/// lowercased on the way in.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A single crafting recipe: one craft yields `batch_output` items and
/// consumes `raw_per_batch` units of the owning material.
///
/// Crafting happens in whole batches only; producing a non-multiple quantity
/// still consumes a full batch's raw input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Items yielded per craft. Always at least 1 in a validated catalog.
    pub batch_output: u32,
    /// Raw units consumed per craft. Non-negative.
    pub raw_per_batch: f64,
}

impl Recipe {
    pub fn new(batch_output: u32, raw_per_batch: f64) -> Self {
        Self {
            batch_output,
            raw_per_batch,
        }
    }
}

/// A raw material and the set of items craftable from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    recipes: BTreeMap<String, Recipe>,
}

impl Material {
    /// Create a material. The name and all item names are normalized.
    pub fn new(name: &str, recipes: impl IntoIterator<Item = (String, Recipe)>) -> Self {
        Self {
            name: normalize_name(name),
            recipes: recipes
                .into_iter()
                .map(|(item, recipe)| (normalize_name(&item), recipe))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Craftable items in sorted order, with their recipes.
    pub fn recipes(&self) -> impl Iterator<Item = (&str, &Recipe)> {
        self.recipes.iter().map(|(item, recipe)| (item.as_str(), recipe))
    }

    /// Look up the recipe for an item, matching case-insensitively.
    pub fn recipe(&self, item: &str) -> AppResult<&Recipe> {
        let key = normalize_name(item);
        self.recipes.get(&key).ok_or_else(|| AppError::UnknownItem {
            item: key,
            material: self.name.clone(),
        })
    }
}

/// The in-memory collection of all materials and their recipes.
///
/// Constructed once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    materials: BTreeMap<String, Material>,
}

impl Catalog {
    pub fn new(materials: impl IntoIterator<Item = Material>) -> Self {
        Self {
            materials: materials
                .into_iter()
                .map(|material| (material.name().to_string(), material))
                .collect(),
        }
    }

    /// Material names in sorted order, for display.
    pub fn materials(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    /// Look up a material, matching case-insensitively.
    pub fn recipes_for(&self, material: &str) -> AppResult<&Material> {
        let key = normalize_name(material);
        self.materials
            .get(&key)
            .ok_or(AppError::UnknownMaterial(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
