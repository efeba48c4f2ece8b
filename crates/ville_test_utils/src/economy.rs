//! Economy balance checks.
//!
//! Tools for sweeping the recipe tables and flagging entries whose
//! numbers are out of line: recipes that lose coins, or that pay far
//! more per hour than their peers.

use ville_core::catalog::{Catalog, PriceTable, Recipe};

/// Cost/value breakdown for one recipe at given prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeMargin {
    /// The recipe id.
    pub recipe: String,
    /// Coin cost of the inputs.
    pub cost: u64,
    /// Coin value of the outputs.
    pub value: u64,
    /// Base production minutes at 1x speed.
    pub minutes: u32,
    /// Experience awarded on completion.
    pub xp: u32,
}

impl RecipeMargin {
    /// Net coins per run (negative when the recipe loses money).
    #[must_use]
    pub fn profit(&self) -> i64 {
        i64::try_from(self.value).unwrap_or(i64::MAX)
            - i64::try_from(self.cost).unwrap_or(i64::MAX)
    }

    /// Net coins per game hour of production time.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn profit_per_hour(&self) -> f64 {
        self.profit() as f64 * 60.0 / f64::from(self.minutes.max(1))
    }

    /// Experience per game hour of production time.
    #[must_use]
    pub fn xp_per_hour(&self) -> f64 {
        f64::from(self.xp) * 60.0 / f64::from(self.minutes.max(1))
    }
}

/// Margin for a single recipe at the given prices.
#[must_use]
pub fn recipe_margin(catalog: &Catalog, recipe: &Recipe, prices: &PriceTable) -> RecipeMargin {
    RecipeMargin {
        recipe: recipe.id.to_string(),
        cost: catalog.production_cost(recipe, prices),
        value: catalog.production_value(recipe, prices),
        minutes: recipe.production_minutes,
        xp: recipe.xp_reward,
    }
}

/// Margins for every recipe in the catalog, sorted by recipe id.
#[must_use]
pub fn catalog_margins(catalog: &Catalog, prices: &PriceTable) -> Vec<RecipeMargin> {
    let mut margins: Vec<RecipeMargin> = catalog
        .all_recipes()
        .map(|recipe| recipe_margin(catalog, recipe, prices))
        .collect();
    margins.sort_by(|a, b| a.recipe.cmp(&b.recipe));
    margins
}

/// Recipes that lose coins at the given prices.
#[must_use]
pub fn unprofitable_recipes(catalog: &Catalog, prices: &PriceTable) -> Vec<RecipeMargin> {
    catalog_margins(catalog, prices)
        .into_iter()
        .filter(|m| m.profit() < 0)
        .collect()
}
