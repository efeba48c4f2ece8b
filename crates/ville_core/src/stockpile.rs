//! Player resource stockpile.
//!
//! A single shared mapping from resource id to quantity. The production
//! manager is the sole writer for production-driven changes (deduction
//! on job start, deposit on completion); trading systems mutate it
//! through the same checked interface.
//!
//! Quantities are unsigned and consumption is all-or-nothing, so a
//! balance can never go negative.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PriceTable, ResourceId, Stack};
use crate::error::{GameError, Result};

/// The player's shared resource pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stockpile {
    /// Quantity held per resource id. Zero balances are not stored.
    quantities: HashMap<ResourceId, u64>,
}

impl Stockpile {
    /// Create an empty stockpile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The new-game starter allocation: 10 wood, 10 stone, 5 iron ore.
    #[must_use]
    pub fn starter() -> Self {
        let mut stockpile = Self::new();
        stockpile.deposit(ResourceId::new("wood"), 10);
        stockpile.deposit(ResourceId::new("stone"), 10);
        stockpile.deposit(ResourceId::new("iron_ore"), 5);
        stockpile
    }

    /// Quantity held of a resource (zero for anything unknown).
    #[must_use]
    pub fn amount(&self, resource: &str) -> u64 {
        self.quantities.get(resource).copied().unwrap_or(0)
    }

    /// Whether the stockpile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Add units of a resource.
    pub fn deposit(&mut self, resource: ResourceId, quantity: u64) {
        if quantity == 0 {
            return;
        }
        *self.quantities.entry(resource).or_insert(0) += quantity;
    }

    /// Add every stack in a list (used when a job's outputs land).
    pub fn deposit_stacks(&mut self, stacks: &[Stack]) {
        for stack in stacks {
            self.deposit(stack.resource.clone(), u64::from(stack.quantity));
        }
    }

    /// Check that every stack in a list is covered.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientResources`] for the first
    /// shortfall, in the order the stacks are listed.
    pub fn check(&self, stacks: &[Stack]) -> Result<()> {
        for stack in stacks {
            let available = self.amount(stack.resource.as_str());
            let required = u64::from(stack.quantity);
            if available < required {
                return Err(GameError::InsufficientResources {
                    resource: stack.resource.to_string(),
                    required,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Whether every stack in a list is covered.
    #[must_use]
    pub fn can_afford(&self, stacks: &[Stack]) -> bool {
        self.check(stacks).is_ok()
    }

    /// Remove every stack in a list, all-or-nothing.
    ///
    /// The full list is checked before anything is deducted, so a
    /// failure leaves the stockpile untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InsufficientResources`] on any shortfall.
    pub fn consume(&mut self, stacks: &[Stack]) -> Result<()> {
        self.check(stacks)?;
        for stack in stacks {
            let quantity = u64::from(stack.quantity);
            if let Some(held) = self.quantities.get_mut(&stack.resource) {
                *held -= quantity;
                if *held == 0 {
                    self.quantities.remove(&stack.resource);
                }
            }
        }
        Ok(())
    }

    /// Total coin value of the stockpile at current prices.
    #[must_use]
    pub fn total_value(&self, catalog: &Catalog, prices: &PriceTable) -> u64 {
        self.sorted()
            .into_iter()
            .map(|(id, quantity)| {
                let unit = prices
                    .get(id)
                    .copied()
                    .or_else(|| catalog.resource(id.as_str()).map(|r| r.base_value));
                u64::from(unit.unwrap_or(0)) * quantity
            })
            .sum()
    }

    /// Inventory slots used, per the catalog's storage footprints.
    #[must_use]
    pub fn storage_used(&self, catalog: &Catalog) -> u64 {
        self.sorted()
            .into_iter()
            .map(|(id, quantity)| {
                let space = catalog
                    .resource(id.as_str())
                    .map_or(1, |r| u64::from(r.storage_space));
                space * quantity
            })
            .sum()
    }

    /// Holdings sorted by resource id for deterministic iteration.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&ResourceId, u64)> {
        let mut entries: Vec<(&ResourceId, u64)> =
            self.quantities.iter().map(|(id, &q)| (id, q)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Hash of the stockpile contents, for determinism checks.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for (id, quantity) in self.sorted() {
            id.hash(&mut hasher);
            quantity.hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_allocation() {
        let stockpile = Stockpile::starter();
        assert_eq!(stockpile.amount("wood"), 10);
        assert_eq!(stockpile.amount("stone"), 10);
        assert_eq!(stockpile.amount("iron_ore"), 5);
        assert_eq!(stockpile.amount("planks"), 0);
    }

    #[test]
    fn test_deposit_and_amount() {
        let mut stockpile = Stockpile::new();
        stockpile.deposit(ResourceId::new("wood"), 3);
        stockpile.deposit(ResourceId::new("wood"), 2);
        assert_eq!(stockpile.amount("wood"), 5);

        // Zero deposits leave no entry behind
        stockpile.deposit(ResourceId::new("glass"), 0);
        assert_eq!(stockpile.amount("glass"), 0);
    }

    #[test]
    fn test_consume_all_or_nothing() {
        let mut stockpile = Stockpile::new();
        stockpile.deposit(ResourceId::new("wood"), 5);
        stockpile.deposit(ResourceId::new("stone"), 1);

        // Second stack is short - nothing may be deducted
        let wanted = vec![Stack::new("wood", 3), Stack::new("stone", 2)];
        let err = stockpile.consume(&wanted).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientResources {
                required: 2,
                available: 1,
                ..
            }
        ));
        assert_eq!(stockpile.amount("wood"), 5);
        assert_eq!(stockpile.amount("stone"), 1);

        // Affordable list goes through
        let wanted = vec![Stack::new("wood", 5), Stack::new("stone", 1)];
        stockpile.consume(&wanted).unwrap();
        assert_eq!(stockpile.amount("wood"), 0);
        assert!(stockpile.is_empty());
    }

    #[test]
    fn test_can_afford() {
        let mut stockpile = Stockpile::new();
        stockpile.deposit(ResourceId::new("wood"), 2);
        assert!(stockpile.can_afford(&[Stack::new("wood", 2)]));
        assert!(!stockpile.can_afford(&[Stack::new("wood", 3)]));
        assert!(stockpile.can_afford(&[]));
    }

    #[test]
    fn test_total_value_and_storage() {
        let catalog = Catalog::default();
        let prices = PriceTable::new();
        let stockpile = Stockpile::starter();

        // 10 wood * 2 + 10 stone * 3 + 5 iron_ore * 5
        assert_eq!(stockpile.total_value(&catalog, &prices), 75);
        // wood and stone take 1 slot, iron_ore takes 2
        assert_eq!(stockpile.storage_used(&catalog), 30);
    }

    #[test]
    fn test_state_hash_is_order_independent() {
        let mut a = Stockpile::new();
        a.deposit(ResourceId::new("wood"), 3);
        a.deposit(ResourceId::new("stone"), 7);

        let mut b = Stockpile::new();
        b.deposit(ResourceId::new("stone"), 7);
        b.deposit(ResourceId::new("wood"), 3);

        assert_eq!(a.state_hash(), b.state_hash());
    }
}
