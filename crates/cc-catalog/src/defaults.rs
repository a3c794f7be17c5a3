//! Built-in recipe set, used whenever no recipes file can be loaded

use cc_types::{Catalog, Material, Recipe};

/// The built-in default catalog.
///
/// Substituted silently when the recipes file is missing or malformed, so a
/// fresh install is usable without any configuration.
pub fn built_in_catalog() -> Catalog {
    Catalog::new([
        Material::new(
            "wood",
            [
                ("plank".to_string(), Recipe::new(4, 1.0)),
                ("stick".to_string(), Recipe::new(4, 0.25)),
                ("door".to_string(), Recipe::new(3, 1.5)),
            ],
        ),
        Material::new(
            "cobblestone",
            [("furnace".to_string(), Recipe::new(1, 8.0))],
        ),
    ])
}
