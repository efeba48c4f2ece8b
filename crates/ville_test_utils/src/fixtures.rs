//! Test fixtures and helpers.
//!
//! Pre-built towns, catalogs, and stockpiles for consistent testing.

use fixed::types::I32F32;

use ville_core::buildings::{Building, ExtractionYield};
use ville_core::catalog::Catalog;
use ville_core::clock::TimeSpeed;
use ville_core::production::{
    JobId, NoopHooks, ProductionError, ProductionEvent, ProductionManager, RecipeSource,
};
use ville_core::stockpile::Stockpile;

/// Create a fixed-point number from an integer.
#[must_use]
pub fn fixed(n: i32) -> I32F32 {
    I32F32::from_num(n)
}

/// Create a fixed-point number from a float (for tests only).
///
/// Note: In real simulation code, never use floats.
/// This is only for convenient test setup.
#[must_use]
pub fn fixed_f(n: f64) -> I32F32 {
    I32F32::from_num(n)
}

/// A standard test grid: lumberyard, quarry, sawmill, kiln, empty slot.
#[must_use]
pub fn town_grid() -> Vec<Option<Building>> {
    vec![
        Some(
            Building::new("lumberyard", "Lumberyard")
                .with_produces(vec![ExtractionYield::new("wood", 3, 20)]),
        ),
        Some(
            Building::new("quarry", "Quarry")
                .with_produces(vec![ExtractionYield::new("stone", 2, 25)]),
        ),
        Some(Building::new("sawmill", "Sawmill")),
        Some(Building::new("kiln", "Kiln")),
        None,
    ]
}

/// A complete town in one value: grid, catalog, stockpile, manager.
///
/// Wraps the full set of collaborators the production manager needs so
/// scenario tests read as a sequence of player actions.
#[derive(Debug, Clone)]
pub struct TownFixture {
    /// The town grid.
    pub grid: Vec<Option<Building>>,
    /// The (default) catalog.
    pub catalog: Catalog,
    /// The player stockpile.
    pub stockpile: Stockpile,
    /// The production manager under test.
    pub manager: ProductionManager,
    /// Time speed applied to every operation.
    pub speed: TimeSpeed,
    /// Player level used for unlock checks.
    pub player_level: u32,
}

impl TownFixture {
    /// A town with the standard grid, default catalog, and a generous
    /// stockpile of every raw material.
    #[must_use]
    pub fn new() -> Self {
        let mut stockpile = Stockpile::new();
        for id in ["wood", "stone", "clay", "sand", "iron_ore"] {
            stockpile.deposit(id.into(), 50);
        }
        Self {
            grid: town_grid(),
            catalog: Catalog::default(),
            stockpile,
            manager: ProductionManager::new(),
            speed: TimeSpeed::NORMAL,
            player_level: 10,
        }
    }

    /// Start a catalog recipe at a building slot.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProductionError`] from the manager.
    pub fn start_recipe(
        &mut self,
        building_index: usize,
        recipe: &str,
        now_total: i64,
    ) -> Result<JobId, ProductionError> {
        self.manager.start_production(
            &self.grid,
            building_index,
            RecipeSource::Recipe(recipe.into()),
            &self.catalog,
            &mut self.stockpile,
            self.player_level,
            now_total,
            self.speed,
            &mut NoopHooks,
        )
    }

    /// Start a raw extraction at a building slot, using the building's
    /// declared yield numbers.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProductionError`] from the manager.
    pub fn start_extraction(
        &mut self,
        building_index: usize,
        resource: &str,
        now_total: i64,
    ) -> Result<JobId, ProductionError> {
        let declared = self
            .grid
            .get(building_index)
            .and_then(|slot| slot.as_ref())
            .and_then(|b| b.yield_for(resource).cloned());
        let source = match declared {
            Some(y) => RecipeSource::Extraction {
                resource: y.resource,
                quantity: y.quantity,
                minutes: y.minutes,
            },
            // Let the manager produce the proper error
            None => RecipeSource::Extraction {
                resource: resource.into(),
                quantity: 1,
                minutes: 1,
            },
        };
        self.manager.start_production(
            &self.grid,
            building_index,
            source,
            &self.catalog,
            &mut self.stockpile,
            self.player_level,
            now_total,
            self.speed,
            &mut NoopHooks,
        )
    }

    /// Advance all queues to a game minute.
    pub fn advance_to(&mut self, now_total: i64) -> Vec<ProductionEvent> {
        self.manager
            .advance(now_total, self.speed, &mut self.stockpile, &mut NoopHooks)
    }

    /// Combined hash of manager and stockpile state.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        self.manager
            .state_hash()
            .wrapping_mul(31)
            .wrapping_add(self.stockpile.state_hash())
    }
}

impl Default for TownFixture {
    fn default() -> Self {
        Self::new()
    }
}
