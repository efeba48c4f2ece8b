//! Resource and recipe catalog.
//!
//! Static reference data describing every resource and production
//! recipe in the game, plus pure lookup and derivation functions.
//! Entries are defined at load time and never mutated afterwards.
//!
//! Unlike the original game data, catalogs are validated when built:
//! a recipe referencing a resource that does not exist is rejected up
//! front instead of surfacing as a failed lookup mid-session.

use std::borrow::Borrow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Unique identifier for resource types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

/// Unique identifier for recipes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

/// Unique identifier for building types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingTypeId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            /// Create a new id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(ResourceId);
string_id!(RecipeId);
string_id!(BuildingTypeId);

/// How hard a resource is to come by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    /// Abundant starter material.
    Common,
    /// Takes some effort to produce.
    Uncommon,
    /// Mid-game material.
    Rare,
    /// Late-game material.
    Epic,
    /// Endgame prestige material.
    Legendary,
}

/// Processing tier of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Extracted directly from a building's yield.
    Raw,
    /// One processing step from raw.
    Processed,
    /// Multiple processing steps.
    Refined,
    /// Intermediate part used by crafting recipes.
    Component,
    /// High-value finished good.
    Luxury,
}

/// What kind of work a recipe represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    /// Produces raw-adjacent goods.
    Production,
    /// Turns raw materials into processed ones.
    Processing,
    /// Assembles components and finished goods.
    Crafting,
    /// Produces construction materials.
    Construction,
}

/// Static catalog entry describing a resource type.
///
/// # Example RON
///
/// ```ron
/// Resource(
///     id: "planks",
///     name: "Planks",
///     description: "Sawn lumber ready for carpentry.",
///     icon: "🪚",
///     rarity: common,
///     category: processed,
///     base_value: 6,
///     storage_space: 1,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique string identifier for this resource.
    pub id: ResourceId,

    /// Display name.
    pub name: String,

    /// Flavor description.
    #[serde(default)]
    pub description: String,

    /// Icon shown in inventory and notifications.
    #[serde(default)]
    pub icon: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Processing tier.
    pub category: ResourceCategory,

    /// Coins per unit at base market price.
    pub base_value: u32,

    /// Inventory slots one unit occupies.
    #[serde(default = "default_storage_space")]
    pub storage_space: u32,
}

/// Default storage footprint for resources that don't declare one.
const fn default_storage_space() -> u32 {
    1
}

impl Resource {
    /// Create a resource entry with default description, icon, and storage.
    #[must_use]
    pub fn new(
        id: impl Into<ResourceId>,
        name: impl Into<String>,
        rarity: Rarity,
        category: ResourceCategory,
        base_value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            rarity,
            category,
            base_value,
            storage_space: default_storage_space(),
        }
    }

    /// Set the flavor description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the storage footprint per unit.
    #[must_use]
    pub fn with_storage_space(mut self, storage_space: u32) -> Self {
        self.storage_space = storage_space;
        self
    }
}

/// A resource id paired with a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    /// The resource.
    pub resource: ResourceId,
    /// How many units.
    pub quantity: u32,
}

impl Stack {
    /// Create a stack.
    pub fn new(resource: impl Into<ResourceId>, quantity: u32) -> Self {
        Self {
            resource: resource.into(),
            quantity,
        }
    }
}

/// Static catalog entry describing a production recipe.
///
/// # Example RON
///
/// ```ron
/// Recipe(
///     id: "cut_planks",
///     name: "Cut Planks",
///     category: processing,
///     inputs: [(resource: "wood", quantity: 2)],
///     outputs: [(resource: "planks", quantity: 1)],
///     production_minutes: 30,
///     xp_reward: 5,
///     unlock_level: 1,
///     required_building: "sawmill",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique string identifier for this recipe.
    pub id: RecipeId,

    /// Display name.
    pub name: String,

    /// Flavor description.
    #[serde(default)]
    pub description: String,

    /// Icon shown in production menus.
    #[serde(default)]
    pub icon: String,

    /// Kind of work this recipe represents.
    pub category: RecipeCategory,

    /// Resources consumed when the job starts.
    #[serde(default)]
    pub inputs: Vec<Stack>,

    /// Resources produced when the job completes.
    pub outputs: Vec<Stack>,

    /// Base duration in minutes at 1x speed.
    pub production_minutes: u32,

    /// Experience awarded on completion.
    #[serde(default)]
    pub xp_reward: u32,

    /// Minimum player level required.
    #[serde(default = "default_unlock_level")]
    pub unlock_level: u32,

    /// Building type that runs this recipe.
    pub required_building: BuildingTypeId,
}

/// Recipes unlock at level 1 unless stated otherwise.
const fn default_unlock_level() -> u32 {
    1
}

impl Recipe {
    /// Create a recipe with no inputs or outputs yet.
    #[must_use]
    pub fn new(
        id: impl Into<RecipeId>,
        name: impl Into<String>,
        category: RecipeCategory,
        required_building: impl Into<BuildingTypeId>,
        production_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            category,
            inputs: Vec::new(),
            outputs: Vec::new(),
            production_minutes,
            xp_reward: 0,
            unlock_level: default_unlock_level(),
            required_building: required_building.into(),
        }
    }

    /// Set the consumed resources.
    #[must_use]
    pub fn with_inputs(mut self, inputs: Vec<Stack>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Set the produced resources.
    #[must_use]
    pub fn with_outputs(mut self, outputs: Vec<Stack>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Set the experience reward.
    #[must_use]
    pub fn with_xp(mut self, xp_reward: u32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    /// Set the minimum player level.
    #[must_use]
    pub fn with_unlock_level(mut self, unlock_level: u32) -> Self {
        self.unlock_level = unlock_level;
        self
    }

    /// Set the flavor description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Market price overrides keyed by resource id.
///
/// Trading and marketplace systems adjust prices at runtime; cost and
/// value calculations fall back to a resource's base value when no
/// override is present.
pub type PriceTable = HashMap<ResourceId, u32>;

/// Registry containing all resource and recipe definitions.
///
/// Provides lookup by id and pure derivations over the data. The
/// default catalog ships the built-in NeighborVille tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Resource entries indexed by id.
    resources: HashMap<ResourceId, Resource>,
    /// Recipe entries indexed by id.
    recipes: HashMap<RecipeId, Recipe>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
            recipes: HashMap::new(),
        }
    }

    /// Register a resource entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateId`] if the id is already taken.
    pub fn register_resource(&mut self, resource: Resource) -> Result<()> {
        if self.resources.contains_key(&resource.id) {
            return Err(GameError::DuplicateId(resource.id.to_string()));
        }
        self.resources.insert(resource.id.clone(), resource);
        Ok(())
    }

    /// Register a recipe entry.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateId`] if the id is already taken.
    pub fn register_recipe(&mut self, recipe: Recipe) -> Result<()> {
        if self.recipes.contains_key(&recipe.id) {
            return Err(GameError::DuplicateId(recipe.id.to_string()));
        }
        self.recipes.insert(recipe.id.clone(), recipe);
        Ok(())
    }

    /// Look up a resource by id.
    #[must_use]
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Look up a recipe by id.
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Number of registered resources.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Number of registered recipes.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    /// Iterate over all resources (not in deterministic order).
    pub fn all_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// Iterate over all recipes (not in deterministic order).
    pub fn all_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// All recipes run by a given building type, sorted by id for
    /// deterministic presentation.
    #[must_use]
    pub fn recipes_for_building(&self, building: &str) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self
            .recipes
            .values()
            .filter(|r| r.required_building.as_str() == building)
            .collect();
        recipes.sort_by(|a, b| a.id.cmp(&b.id));
        recipes
    }

    /// All recipes unlocked at or below a player level, sorted by id.
    #[must_use]
    pub fn recipes_unlocked_at(&self, level: u32) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self
            .recipes
            .values()
            .filter(|r| r.unlock_level <= level)
            .collect();
        recipes.sort_by(|a, b| a.id.cmp(&b.id));
        recipes
    }

    /// Coin cost of a recipe's inputs at current prices.
    ///
    /// Unknown resource ids contribute nothing; a validated catalog
    /// has none.
    #[must_use]
    pub fn production_cost(&self, recipe: &Recipe, prices: &PriceTable) -> u64 {
        self.stacks_value(&recipe.inputs, prices)
    }

    /// Coin value of a recipe's outputs at current prices.
    #[must_use]
    pub fn production_value(&self, recipe: &Recipe, prices: &PriceTable) -> u64 {
        self.stacks_value(&recipe.outputs, prices)
    }

    /// Sum the value of a list of stacks at current prices.
    #[must_use]
    pub fn stacks_value(&self, stacks: &[Stack], prices: &PriceTable) -> u64 {
        stacks
            .iter()
            .map(|stack| {
                let unit = prices.get(&stack.resource).copied().or_else(|| {
                    self.resource(stack.resource.as_str()).map(|r| r.base_value)
                });
                u64::from(unit.unwrap_or(0)) * u64::from(stack.quantity)
            })
            .sum()
    }

    /// Check referential integrity and basic sanity of every entry.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a recipe input/output naming a
    /// resource absent from the catalog, a recipe with no outputs, a
    /// zero-quantity stack, or a zero-minute production time.
    pub fn validate(&self) -> Result<()> {
        let mut recipes: Vec<&Recipe> = self.recipes.values().collect();
        recipes.sort_by(|a, b| a.id.cmp(&b.id));

        for recipe in recipes {
            if recipe.outputs.is_empty() {
                return Err(GameError::InvalidCatalogEntry {
                    id: recipe.id.to_string(),
                    message: "recipe has no outputs".to_string(),
                });
            }
            if recipe.production_minutes == 0 {
                return Err(GameError::InvalidCatalogEntry {
                    id: recipe.id.to_string(),
                    message: "production time must be at least one minute".to_string(),
                });
            }
            for stack in recipe.inputs.iter().chain(&recipe.outputs) {
                if stack.quantity == 0 {
                    return Err(GameError::InvalidCatalogEntry {
                        id: recipe.id.to_string(),
                        message: format!("zero quantity of '{}'", stack.resource),
                    });
                }
                if !self.resources.contains_key(&stack.resource) {
                    return Err(GameError::DanglingResourceRef {
                        recipe: recipe.id.to_string(),
                        resource: stack.resource.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge another catalog's entries into this one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateId`] on any id collision.
    pub fn merge(&mut self, other: Self) -> Result<()> {
        let mut resources: Vec<Resource> = other.resources.into_values().collect();
        resources.sort_by(|a, b| a.id.cmp(&b.id));
        for resource in resources {
            self.register_resource(resource)?;
        }
        let mut recipes: Vec<Recipe> = other.recipes.into_values().collect();
        recipes.sort_by(|a, b| a.id.cmp(&b.id));
        for recipe in recipes {
            self.register_recipe(recipe)?;
        }
        Ok(())
    }
}

impl Default for Catalog {
    /// The built-in NeighborVille resource and recipe tables.
    fn default() -> Self {
        let mut catalog = Self::new();

        let resources = [
            Resource::new("wood", "Wood", Rarity::Common, ResourceCategory::Raw, 2)
                .with_icon("🪵")
                .with_description("Freshly felled timber."),
            Resource::new("stone", "Stone", Rarity::Common, ResourceCategory::Raw, 3)
                .with_icon("🪨")
                .with_description("Rough quarried stone."),
            Resource::new("clay", "Clay", Rarity::Common, ResourceCategory::Raw, 2)
                .with_icon("🟤")
                .with_description("Wet clay dug from the riverbank."),
            Resource::new("sand", "Sand", Rarity::Common, ResourceCategory::Raw, 1)
                .with_icon("⏳")
                .with_description("Fine sand for glassmaking."),
            Resource::new("iron_ore", "Iron Ore", Rarity::Uncommon, ResourceCategory::Raw, 5)
                .with_icon("⛏️")
                .with_description("Unrefined iron-bearing rock.")
                .with_storage_space(2),
            Resource::new("planks", "Planks", Rarity::Common, ResourceCategory::Processed, 6)
                .with_icon("🪚")
                .with_description("Sawn lumber ready for carpentry."),
            Resource::new("bricks", "Bricks", Rarity::Common, ResourceCategory::Processed, 7)
                .with_icon("🧱")
                .with_description("Kiln-fired building bricks."),
            Resource::new("glass", "Glass", Rarity::Uncommon, ResourceCategory::Processed, 8)
                .with_icon("🪟")
                .with_description("Clear panes blown from sand."),
            Resource::new(
                "iron_ingot",
                "Iron Ingot",
                Rarity::Uncommon,
                ResourceCategory::Processed,
                14,
            )
            .with_icon("🔩")
            .with_description("Smelted and cast iron.")
            .with_storage_space(2),
            Resource::new("steel", "Steel", Rarity::Rare, ResourceCategory::Refined, 32)
                .with_icon("🛠️")
                .with_description("Hardened alloy for precision work.")
                .with_storage_space(2),
            Resource::new("gears", "Gears", Rarity::Rare, ResourceCategory::Component, 20)
                .with_icon("⚙️")
                .with_description("Machined gears for workshops."),
            Resource::new(
                "furniture",
                "Furniture",
                Rarity::Epic,
                ResourceCategory::Luxury,
                45,
            )
            .with_icon("🪑")
            .with_description("Handcrafted furniture neighbors pay well for.")
            .with_storage_space(4),
        ];

        let recipes = [
            Recipe::new("cut_planks", "Cut Planks", RecipeCategory::Processing, "sawmill", 30)
                .with_inputs(vec![Stack::new("wood", 2)])
                .with_outputs(vec![Stack::new("planks", 1)])
                .with_xp(5)
                .with_icon("🪚")
                .with_description("Saw raw timber into usable planks."),
            Recipe::new("fire_bricks", "Fire Bricks", RecipeCategory::Construction, "kiln", 45)
                .with_inputs(vec![Stack::new("clay", 2)])
                .with_outputs(vec![Stack::new("bricks", 1)])
                .with_xp(6)
                .with_icon("🧱")
                .with_description("Fire wet clay into sturdy bricks."),
            Recipe::new("blow_glass", "Blow Glass", RecipeCategory::Processing, "kiln", 60)
                .with_inputs(vec![Stack::new("sand", 3)])
                .with_outputs(vec![Stack::new("glass", 1)])
                .with_xp(8)
                .with_unlock_level(2)
                .with_icon("🪟")
                .with_description("Melt sand into window panes."),
            Recipe::new("smelt_iron", "Smelt Iron", RecipeCategory::Processing, "smelter", 90)
                .with_inputs(vec![Stack::new("iron_ore", 2)])
                .with_outputs(vec![Stack::new("iron_ingot", 1)])
                .with_xp(10)
                .with_unlock_level(3)
                .with_icon("🔩")
                .with_description("Smelt ore down to workable ingots."),
            Recipe::new("forge_steel", "Forge Steel", RecipeCategory::Processing, "smelter", 120)
                .with_inputs(vec![Stack::new("iron_ingot", 2), Stack::new("stone", 1)])
                .with_outputs(vec![Stack::new("steel", 1)])
                .with_xp(18)
                .with_unlock_level(5)
                .with_icon("🛠️")
                .with_description("Alloy iron into hardened steel."),
            Recipe::new("cut_gears", "Cut Gears", RecipeCategory::Crafting, "workshop", 60)
                .with_inputs(vec![Stack::new("iron_ingot", 1)])
                .with_outputs(vec![Stack::new("gears", 2)])
                .with_xp(12)
                .with_unlock_level(4)
                .with_icon("⚙️")
                .with_description("Machine ingots into precision gears."),
            Recipe::new(
                "build_furniture",
                "Build Furniture",
                RecipeCategory::Crafting,
                "workshop",
                150,
            )
            .with_inputs(vec![Stack::new("planks", 4)])
            .with_outputs(vec![Stack::new("furniture", 1)])
            .with_xp(25)
            .with_unlock_level(6)
            .with_icon("🪑")
            .with_description("Join planks into fine furniture."),
        ];

        for resource in resources {
            catalog.resources.insert(resource.id.clone(), resource);
        }
        for recipe in recipes {
            catalog.recipes.insert(recipe.id.clone(), recipe);
        }

        debug_assert!(catalog.validate().is_ok());
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let catalog = Catalog::default();

        let wood = catalog.resource("wood");
        assert!(wood.is_some());
        assert_eq!(wood.unwrap().name, "Wood");
        assert_eq!(wood.unwrap().category, ResourceCategory::Raw);

        let planks = catalog.recipe("cut_planks");
        assert!(planks.is_some());
        assert_eq!(planks.unwrap().required_building.as_str(), "sawmill");

        assert!(catalog.resource("unobtainium").is_none());
        assert!(catalog.recipe("summon_dragon").is_none());
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert!(catalog.resource_count() >= 10);
        assert!(catalog.recipe_count() >= 5);
    }

    #[test]
    fn test_recipes_for_building() {
        let catalog = Catalog::default();

        let kiln = catalog.recipes_for_building("kiln");
        assert_eq!(kiln.len(), 2);
        // Sorted by id
        assert_eq!(kiln[0].id.as_str(), "blow_glass");
        assert_eq!(kiln[1].id.as_str(), "fire_bricks");

        assert!(catalog.recipes_for_building("arcade").is_empty());
    }

    #[test]
    fn test_recipes_unlocked_at() {
        let catalog = Catalog::default();

        let level_1 = catalog.recipes_unlocked_at(1);
        assert_eq!(level_1.len(), 2); // cut_planks, fire_bricks

        let level_4 = catalog.recipes_unlocked_at(4);
        assert_eq!(level_4.len(), 5);

        let all = catalog.recipes_unlocked_at(99);
        assert_eq!(all.len(), catalog.recipe_count());
    }

    #[test]
    fn test_production_cost_and_value() {
        let catalog = Catalog::default();
        let recipe = catalog.recipe("cut_planks").unwrap();
        let prices = PriceTable::new();

        // 2 wood at base value 2 each
        assert_eq!(catalog.production_cost(recipe, &prices), 4);
        // 1 plank at base value 6
        assert_eq!(catalog.production_value(recipe, &prices), 6);

        // Override wood price
        let mut prices = PriceTable::new();
        prices.insert(ResourceId::new("wood"), 10);
        assert_eq!(catalog.production_cost(recipe, &prices), 20);
        assert_eq!(catalog.production_value(recipe, &prices), 6);
    }

    #[test]
    fn test_validate_dangling_reference() {
        let mut catalog = Catalog::new();
        catalog
            .register_resource(Resource::new(
                "wood",
                "Wood",
                Rarity::Common,
                ResourceCategory::Raw,
                2,
            ))
            .unwrap();
        catalog
            .register_recipe(
                Recipe::new("ghost", "Ghost", RecipeCategory::Crafting, "workshop", 10)
                    .with_inputs(vec![Stack::new("wood", 1)])
                    .with_outputs(vec![Stack::new("ectoplasm", 1)]),
            )
            .unwrap();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, GameError::DanglingResourceRef { .. }));
    }

    #[test]
    fn test_validate_rejects_zero_quantity_and_empty_outputs() {
        let mut catalog = Catalog::new();
        catalog
            .register_resource(Resource::new(
                "wood",
                "Wood",
                Rarity::Common,
                ResourceCategory::Raw,
                2,
            ))
            .unwrap();
        catalog
            .register_recipe(
                Recipe::new("noop", "Noop", RecipeCategory::Crafting, "workshop", 10)
                    .with_outputs(vec![]),
            )
            .unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(GameError::InvalidCatalogEntry { .. })
        ));

        let mut catalog = Catalog::new();
        catalog
            .register_resource(Resource::new(
                "wood",
                "Wood",
                Rarity::Common,
                ResourceCategory::Raw,
                2,
            ))
            .unwrap();
        catalog
            .register_recipe(
                Recipe::new("zero", "Zero", RecipeCategory::Crafting, "workshop", 10)
                    .with_outputs(vec![Stack::new("wood", 0)]),
            )
            .unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(GameError::InvalidCatalogEntry { .. })
        ));
    }

    #[test]
    fn test_duplicate_registration() {
        let mut catalog = Catalog::new();
        let wood = Resource::new("wood", "Wood", Rarity::Common, ResourceCategory::Raw, 2);
        catalog.register_resource(wood.clone()).unwrap();
        assert!(matches!(
            catalog.register_resource(wood),
            Err(GameError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_merge_detects_collisions() {
        let mut a = Catalog::default();
        let b = Catalog::default();
        assert!(matches!(a.merge(b), Err(GameError::DuplicateId(_))));
    }

    #[test]
    fn test_ron_round_trip() {
        let recipe = Recipe::new("cut_planks", "Cut Planks", RecipeCategory::Processing, "sawmill", 30)
            .with_inputs(vec![Stack::new("wood", 2)])
            .with_outputs(vec![Stack::new("planks", 1)])
            .with_xp(5);

        let text = ron::to_string(&recipe).unwrap();
        let back: Recipe = ron::from_str(&text).unwrap();
        assert_eq!(back, recipe);
    }
}
