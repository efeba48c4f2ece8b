//! # Ville Core
//!
//! Deterministic production and time-scheduling core for NeighborVille.
//!
//! This crate contains **only** deterministic logic:
//! - No rendering
//! - No IO
//! - No system randomness
//! - No floating-point math (uses fixed-point)
//!
//! The host application owns the grid, the player profile, and the
//! render loop; it feeds the current game minute into this crate and
//! applies the events and notifications that come back out. Identical
//! inputs always produce identical queue states, stockpiles, and event
//! streams, which is what makes save/load and replay verification
//! possible.
//!
//! ## Crate Structure
//!
//! - [`clock`] - Game clock, durations, and progress math
//! - [`catalog`] - Static resource and recipe tables
//! - [`stockpile`] - The player's shared resource pool
//! - [`buildings`] - Building types as the core sees them
//! - [`production`] - Per-building production queues
//! - [`dashboard`] - Read-only overview aggregation
//! - [`math`] - Fixed-point math utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod buildings;
pub mod catalog;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod math;
pub mod production;
pub mod stockpile;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::buildings::{Building, ExtractionYield, Grid};
    pub use crate::catalog::{
        BuildingTypeId, Catalog, PriceTable, Rarity, Recipe, RecipeCategory, RecipeId, Resource,
        ResourceCategory, ResourceId, Stack,
    };
    pub use crate::clock::{ClockSource, GameTime, ProgressReport, TimeOfDay, TimeSpeed};
    pub use crate::dashboard::{overview, ProductionOverview, ProductionRow};
    pub use crate::error::{GameError, Result};
    pub use crate::math::Fixed;
    pub use crate::production::{
        available_productions, JobId, JobStatus, NoopHooks, ProductionError, ProductionEvent,
        ProductionHooks, ProductionJob, ProductionManager, ProductionOption, ProductionQueue,
        RecipeSource, Severity,
    };
    pub use crate::stockpile::Stockpile;
}
