//! Catalog storage - loading and saving the recipes JSON file

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use cc_types::{AppError, AppResult, Catalog, Material, Recipe};
use tracing::{debug, warn};

use crate::{defaults, paths, validation};

/// On-disk shape: `{material: {item: {"batch_output": n, "raw_per_batch": x}}}`.
type RawCatalog = BTreeMap<String, BTreeMap<String, Recipe>>;

/// Load a catalog from a recipes file.
///
/// Material and item names are normalized on the way in, and the result is
/// validated. Any failure (missing file, bad JSON, invalid recipe values) is
/// an `AppError::Config`.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    debug!("Loading recipes from {:?}", path);

    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read recipes file: {}", e)))?;

    let raw: RawCatalog = serde_json::from_str(&contents)
        .map_err(|e| AppError::Config(format!("Failed to parse recipes JSON: {}", e)))?;

    let catalog = Catalog::new(
        raw.into_iter()
            .map(|(name, recipes)| Material::new(&name, recipes)),
    );

    validation::validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Load a catalog from a recipes file, substituting the built-in defaults on
/// any failure.
///
/// This never errors: a missing or malformed recipes file is recovered
/// silently, logged only at warn level.
pub fn load_catalog_or_default(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => {
            debug!("Loaded {} material(s) from {:?}", catalog.len(), path);
            catalog
        }
        Err(e) => {
            warn!("Using built-in recipes: {}", e);
            defaults::built_in_catalog()
        }
    }
}

/// Save a catalog to a recipes file as pretty-printed JSON.
///
/// Writes to a temporary file first and renames it into place, so a crash
/// mid-write never leaves a truncated recipes file behind.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> AppResult<()> {
    debug!("Saving recipes to {:?}", path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            paths::ensure_dir_exists(&parent.to_path_buf())?;
        }
    }

    validation::validate_catalog(catalog)?;

    let raw: RawCatalog = catalog
        .iter()
        .map(|material| {
            (
                material.name().to_string(),
                material
                    .recipes()
                    .map(|(item, recipe)| (item.to_string(), *recipe))
                    .collect(),
            )
        })
        .collect();

    let json = serde_json::to_string_pretty(&raw)
        .map_err(|e| AppError::Config(format!("Failed to serialize recipes to JSON: {}", e)))?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, json)
        .map_err(|e| AppError::Config(format!("Failed to write recipes file: {}", e)))?;

    fs::rename(&temp_path, path)
        .map_err(|e| AppError::Config(format!("Failed to rename recipes file: {}", e)))?;

    Ok(())
}
