//! Production dashboard aggregation.
//!
//! Read-only snapshots of everything in flight, shaped for display:
//! per-building rows with percentages and formatted time strings, plus
//! stockpile totals. Building the overview never mutates game state,
//! so hosts can re-render it every frame.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PriceTable};
use crate::clock::{self, GameTime};
use crate::production::{JobStatus, ProductionManager};
use crate::stockpile::Stockpile;

/// One in-flight job as the dashboard presents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRow {
    /// Owning building slot.
    pub building_index: usize,
    /// Display name of the owning building.
    pub building_label: String,
    /// Display label of the work.
    pub label: String,
    /// Lifecycle state of the job.
    pub status: JobStatus,
    /// Completion percentage (0 for anything not active).
    pub percent: u32,
    /// Remaining time, formatted ("2h 5m", "< 1m", "done").
    pub remaining: String,
    /// Wall-clock finish time ("14:30"); empty while queued or paused.
    pub finishes_at: String,
}

/// Snapshot of all production activity plus stockpile totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOverview {
    /// Number of jobs currently producing.
    pub active: usize,
    /// Number of jobs waiting or paused.
    pub waiting: usize,
    /// One row per in-flight job, in ascending slot order then queue order.
    pub rows: Vec<ProductionRow>,
    /// Total coin value of the stockpile at current prices.
    pub stockpile_value: u64,
    /// Inventory slots used by the stockpile.
    pub storage_used: u64,
}

impl ProductionOverview {
    /// Whether nothing is producing or waiting anywhere.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the dashboard snapshot for the current game minute.
#[must_use]
pub fn overview(
    manager: &ProductionManager,
    stockpile: &Stockpile,
    catalog: &Catalog,
    prices: &PriceTable,
    now_total: i64,
) -> ProductionOverview {
    let mut rows = Vec::new();

    for (building_index, queue) in manager.queues_sorted() {
        for job in queue.iter() {
            let (percent, remaining, finishes_at) = match job.status {
                JobStatus::Active => {
                    let report = clock::progress(job.start_time, job.completion_time, now_total);
                    let remaining = if report.is_complete {
                        "done".to_string()
                    } else {
                        clock::format_duration_minutes(report.remaining)
                    };
                    let finish = GameTime::from_total_minutes(job.completion_time);
                    (report.percent, remaining, finish.format_24h())
                }
                JobStatus::Paused => (
                    0,
                    clock::format_duration_minutes(job.paused_remaining),
                    String::new(),
                ),
                JobStatus::Queued | JobStatus::Completed => (
                    0,
                    clock::format_duration_minutes(i64::from(job.base_minutes)),
                    String::new(),
                ),
            };

            rows.push(ProductionRow {
                building_index,
                building_label: job.building_label.clone(),
                label: job.label.clone(),
                status: job.status,
                percent,
                remaining,
                finishes_at,
            });
        }
    }

    ProductionOverview {
        active: manager.active_count(),
        waiting: manager.waiting_count(),
        rows,
        stockpile_value: stockpile.total_value(catalog, prices),
        storage_used: stockpile.storage_used(catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buildings::Building;
    use crate::catalog::{RecipeId, ResourceId};
    use crate::clock::TimeSpeed;
    use crate::production::{NoopHooks, RecipeSource};

    fn setup() -> (Catalog, Vec<Option<Building>>, Stockpile, ProductionManager) {
        let catalog = Catalog::default();
        let grid = vec![
            Some(Building::new("sawmill", "Sawmill")),
            Some(Building::new("kiln", "Kiln")),
        ];
        let mut stockpile = Stockpile::new();
        stockpile.deposit(ResourceId::new("wood"), 10);
        stockpile.deposit(ResourceId::new("clay"), 10);
        (catalog, grid, stockpile, ProductionManager::new())
    }

    #[test]
    fn test_idle_overview() {
        let (catalog, _, stockpile, manager) = setup();
        let prices = PriceTable::new();

        let view = overview(&manager, &stockpile, &catalog, &prices, 0);
        assert!(view.is_idle());
        assert_eq!(view.active, 0);
        assert_eq!(view.waiting, 0);
        // 10 wood * 2 + 10 clay * 2
        assert_eq!(view.stockpile_value, 40);
    }

    #[test]
    fn test_rows_for_active_and_queued() {
        let (catalog, grid, mut stockpile, mut manager) = setup();
        let prices = PriceTable::new();

        // Start at 8:00 (minute 480); two jobs at the sawmill, one at the kiln
        for _ in 0..2 {
            manager
                .start_production(
                    &grid,
                    0,
                    RecipeSource::Recipe(RecipeId::new("cut_planks")),
                    &catalog,
                    &mut stockpile,
                    1,
                    480,
                    TimeSpeed::NORMAL,
                    &mut NoopHooks,
                )
                .unwrap();
        }
        manager
            .start_production(
                &grid,
                1,
                RecipeSource::Recipe(RecipeId::new("fire_bricks")),
                &catalog,
                &mut stockpile,
                1,
                480,
                TimeSpeed::NORMAL,
                &mut NoopHooks,
            )
            .unwrap();

        // Fifteen minutes in: the active sawmill job is half done
        let view = overview(&manager, &stockpile, &catalog, &prices, 495);
        assert_eq!(view.active, 2);
        assert_eq!(view.waiting, 1);
        assert_eq!(view.rows.len(), 3);

        let first = &view.rows[0];
        assert_eq!(first.building_index, 0);
        assert_eq!(first.building_label, "Sawmill");
        assert_eq!(first.label, "Cut Planks");
        assert_eq!(first.status, JobStatus::Active);
        assert_eq!(first.percent, 50);
        assert_eq!(first.remaining, "15m");
        assert_eq!(first.finishes_at, "08:30");

        let queued = &view.rows[1];
        assert_eq!(queued.status, JobStatus::Queued);
        assert_eq!(queued.percent, 0);
        assert_eq!(queued.remaining, "30m");
        assert_eq!(queued.finishes_at, "");

        let kiln = &view.rows[2];
        assert_eq!(kiln.building_index, 1);
        assert_eq!(kiln.label, "Fire Bricks");
        // Started at 480 with a 45 minute run, so 30 left at 495
        assert_eq!(kiln.remaining, "30m");
    }

    #[test]
    fn test_overview_does_not_mutate() {
        let (catalog, grid, mut stockpile, mut manager) = setup();
        let prices = PriceTable::new();

        manager
            .start_production(
                &grid,
                0,
                RecipeSource::Recipe(RecipeId::new("cut_planks")),
                &catalog,
                &mut stockpile,
                1,
                0,
                TimeSpeed::NORMAL,
                &mut NoopHooks,
            )
            .unwrap();

        let before = (manager.state_hash(), stockpile.state_hash());
        // Render far past completion; only advance() may complete jobs
        let view = overview(&manager, &stockpile, &catalog, &prices, 10_000);
        assert_eq!(view.rows[0].remaining, "done");
        assert_eq!((manager.state_hash(), stockpile.state_hash()), before);
    }
}
