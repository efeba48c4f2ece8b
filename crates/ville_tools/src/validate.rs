//! Catalog data validation.
//!
//! Loads the RON data tables a deployment ships and runs the same
//! referential-integrity checks the game applies at load time, so a
//! broken table is caught in CI instead of mid-session.

use std::fs;
use std::path::Path;

use ville_core::catalog::{Catalog, Recipe, Resource};
use ville_core::error::{GameError, Result};

/// File name for the resource table inside a data directory.
pub const RESOURCES_FILE: &str = "resources.ron";

/// File name for the recipe table inside a data directory.
pub const RECIPES_FILE: &str = "recipes.ron";

fn read_ron<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| GameError::DataParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    ron::from_str(&text).map_err(|e| GameError::DataParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load a catalog from a data directory.
///
/// Expects [`RESOURCES_FILE`] holding a RON list of resources and
/// [`RECIPES_FILE`] holding a RON list of recipes. The loaded catalog
/// is validated before it is returned.
///
/// # Errors
///
/// Returns a parse error for unreadable or malformed files, a
/// duplicate-id error for repeated entries, and any validation failure
/// from [`Catalog::validate`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let resources: Vec<Resource> = read_ron(&path.join(RESOURCES_FILE))?;
    let recipes: Vec<Recipe> = read_ron(&path.join(RECIPES_FILE))?;

    let mut catalog = Catalog::new();
    for resource in resources {
        catalog.register_resource(resource)?;
    }
    for recipe in recipes {
        catalog.register_recipe(recipe)?;
    }
    catalog.validate()?;
    Ok(catalog)
}

/// Validate the RON data tables in a directory.
///
/// # Errors
///
/// Returns the first problem found while loading or validating.
pub fn validate_data_directory(path: &Path) -> Result<()> {
    let catalog = load_catalog(path)?;
    tracing::info!(
        resources = catalog.resource_count(),
        recipes = catalog.recipe_count(),
        "catalog tables are valid"
    );
    Ok(())
}
