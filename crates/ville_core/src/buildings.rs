//! Building types as seen by the production core.
//!
//! The host application owns the town grid; the core only reads a
//! building's type id and its raw-extraction declarations. Placement,
//! construction, and upgrades live outside this crate.

use serde::{Deserialize, Serialize};

use crate::catalog::{BuildingTypeId, ResourceId, Stack};

/// A raw resource a building can extract without a formal recipe.
///
/// # Example RON
///
/// ```ron
/// ExtractionYield(
///     resource: "wood",
///     quantity: 3,
///     minutes: 20,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionYield {
    /// The resource produced.
    pub resource: ResourceId,
    /// Units produced per extraction run.
    pub quantity: u32,
    /// Base minutes per run at 1x speed.
    pub minutes: u32,
}

impl ExtractionYield {
    /// Create an extraction declaration.
    pub fn new(resource: impl Into<ResourceId>, quantity: u32, minutes: u32) -> Self {
        Self {
            resource: resource.into(),
            quantity,
            minutes,
        }
    }

    /// The output stack one run produces.
    #[must_use]
    pub fn output(&self) -> Stack {
        Stack {
            resource: self.resource.clone(),
            quantity: self.quantity,
        }
    }
}

/// A placed building, as the core sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// The building's type id (matches `Recipe::required_building`).
    pub kind: BuildingTypeId,
    /// Display name.
    pub name: String,
    /// Building level (reserved for yield scaling by the host).
    pub level: u32,
    /// Raw resources this building can extract directly.
    #[serde(default)]
    pub produces: Vec<ExtractionYield>,
}

impl Building {
    /// Create a building with no extraction yields.
    pub fn new(kind: impl Into<BuildingTypeId>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            level: 1,
            produces: Vec::new(),
        }
    }

    /// Add extraction declarations.
    #[must_use]
    pub fn with_produces(mut self, produces: Vec<ExtractionYield>) -> Self {
        self.produces = produces;
        self
    }

    /// Find this building's yield for a given resource.
    #[must_use]
    pub fn yield_for(&self, resource: &str) -> Option<&ExtractionYield> {
        self.produces.iter().find(|y| y.resource.as_str() == resource)
    }
}

/// The town grid: an ordered list of building-or-empty slots.
///
/// Owned by the host; the core reads it and never mutates it.
pub type Grid = [Option<Building>];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_lookup() {
        let lumberyard = Building::new("lumberyard", "Lumberyard")
            .with_produces(vec![ExtractionYield::new("wood", 3, 20)]);

        let wood = lumberyard.yield_for("wood");
        assert!(wood.is_some());
        assert_eq!(wood.unwrap().quantity, 3);
        assert!(lumberyard.yield_for("stone").is_none());

        let output = wood.unwrap().output();
        assert_eq!(output.resource.as_str(), "wood");
        assert_eq!(output.quantity, 3);
    }
}
