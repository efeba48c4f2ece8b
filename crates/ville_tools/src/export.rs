//! Catalog export.
//!
//! Writes a catalog out as the RON data tables [`crate::validate`]
//! loads, sorted by id so exports diff cleanly.

use std::fs;
use std::path::Path;

use ville_core::catalog::{Catalog, Recipe, Resource};
use ville_core::error::{GameError, Result};

use crate::validate::{RECIPES_FILE, RESOURCES_FILE};

fn write_ron<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let pretty = ron::ser::PrettyConfig::new();
    let text = ron::ser::to_string_pretty(value, pretty).map_err(|e| GameError::DataParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(path, text).map_err(|e| GameError::DataParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Write a catalog's tables into a directory as RON files.
///
/// # Errors
///
/// Returns a parse-style error wrapping any serialization or IO
/// failure.
pub fn export_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| GameError::DataParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut resources: Vec<&Resource> = catalog.all_resources().collect();
    resources.sort_by(|a, b| a.id.cmp(&b.id));
    write_ron(&path.join(RESOURCES_FILE), &resources)?;

    let mut recipes: Vec<&Recipe> = catalog.all_recipes().collect();
    recipes.sort_by(|a, b| a.id.cmp(&b.id));
    write_ron(&path.join(RECIPES_FILE), &recipes)?;

    tracing::info!(
        resources = resources.len(),
        recipes = recipes.len(),
        "catalog exported"
    );
    Ok(())
}
