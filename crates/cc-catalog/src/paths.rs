//! Path resolution for the recipes file

use std::path::PathBuf;

use cc_types::{AppError, AppResult};

/// Well-known name of the recipes file.
pub const RECIPES_FILE_NAME: &str = "recipes.json";

/// Environment variable that points directly at a recipes file.
pub const RECIPES_ENV_VAR: &str = "CRAFTCALC_RECIPES";

/// Get the configuration directory
///
/// Development (debug) builds use `~/.craftcalc-dev/`, release builds
/// `~/.craftcalc/`.
pub fn config_dir() -> AppResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AppError::Config("Could not determine home directory".to_string()))?;

    #[cfg(debug_assertions)]
    let dir = home.join(".craftcalc-dev");

    #[cfg(not(debug_assertions))]
    let dir = home.join(".craftcalc");

    Ok(dir)
}

/// Resolve the recipes file path.
///
/// Priority:
/// 1. `CRAFTCALC_RECIPES` environment variable (runtime override, for testing)
/// 2. `recipes.json` in the current working directory, if it exists
/// 3. `recipes.json` in the configuration directory, if it exists
///
/// Falls back to the working-directory default when nothing exists; the
/// loader substitutes the built-in catalog for a missing file.
pub fn recipes_file() -> PathBuf {
    if let Ok(path) = std::env::var(RECIPES_ENV_VAR) {
        return PathBuf::from(path);
    }

    let cwd_file = PathBuf::from(RECIPES_FILE_NAME);
    if cwd_file.exists() {
        return cwd_file;
    }

    if let Ok(dir) = config_dir() {
        let home_file = dir.join(RECIPES_FILE_NAME);
        if home_file.exists() {
            return home_file;
        }
    }

    cwd_file
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(path: &PathBuf) -> AppResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;
    }
    Ok(())
}
