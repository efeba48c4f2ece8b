//! Production queue management.
//!
//! Owns the mapping from building slot to its ordered queue of
//! production jobs, advances jobs as game time elapses, and is the
//! sole production-driven writer of the player stockpile.
//!
//! Queue discipline per building: FIFO, at most one `Active` job at a
//! time; everything behind it is `Queued`. Inputs are deducted the
//! moment a job is accepted, so resources are reserved up front and
//! cannot be double-spent across buildings. Cancelling never refunds.
//!
//! Advancement is synchronous and bounded by the number of in-flight
//! jobs; queues are processed in ascending slot order so identical
//! inputs always produce identical event streams.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buildings::{Building, Grid};
use crate::catalog::{Catalog, RecipeId, ResourceId, Stack};
use crate::clock::{self, TimeSpeed};
use crate::error::GameError;
use crate::stockpile::Stockpile;

/// Unique identifier for production jobs.
///
/// Allocated from a per-manager monotonic counter, so ids never
/// collide no matter how quickly jobs are submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub u64);

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a production job runs.
///
/// Raw extraction is a first-class variant rather than a pseudo recipe
/// id, so extraction jobs can never collide with catalog recipe ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeSource {
    /// A formal recipe from the catalog.
    Recipe(RecipeId),
    /// A raw extraction run from a building's declared yield.
    Extraction {
        /// The resource extracted.
        resource: ResourceId,
        /// Units produced per run.
        quantity: u32,
        /// Base minutes per run at 1x speed.
        minutes: u32,
    },
}

/// Lifecycle state of a production job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Waiting behind the active job; timing not yet stamped.
    Queued,
    /// Currently producing.
    Active,
    /// Finished; only observed in completion events.
    Completed,
    /// Frozen by the player; blocks the queue until resumed.
    Paused,
}

/// One production job in a building's queue.
///
/// Jobs are fully resolved when accepted - outputs, xp, and labels are
/// captured up front so later grid or queue changes cannot retarget a
/// job that is already running.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionJob {
    /// Unique job id.
    pub id: JobId,
    /// What this job runs.
    pub source: RecipeSource,
    /// Owning building's slot in the grid.
    pub building_index: usize,
    /// Display label for the work (recipe or resource name).
    pub label: String,
    /// Display name of the owning building.
    pub building_label: String,
    /// Resources produced on completion.
    pub outputs: Vec<Stack>,
    /// Experience awarded on completion.
    pub xp_reward: u32,
    /// Base duration in minutes at 1x speed.
    pub base_minutes: u32,
    /// Speed-adjusted duration stamped at activation.
    pub duration: u32,
    /// Absolute game-minute the job began; zero while queued.
    pub start_time: i64,
    /// Absolute game-minute the job finishes; zero while queued.
    pub completion_time: i64,
    /// Lifecycle state.
    pub status: JobStatus,
    /// Minutes left when paused; zero otherwise.
    pub paused_remaining: i64,
}

/// FIFO queue of production jobs for one building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionQueue {
    jobs: VecDeque<ProductionJob>,
    max_len: usize,
}

impl ProductionQueue {
    /// Default maximum queue length per building.
    pub const DEFAULT_MAX_LEN: usize = 5;

    /// Create an empty queue with the default cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_len(Self::DEFAULT_MAX_LEN)
    }

    /// Create an empty queue with a specific cap.
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            jobs: VecDeque::new(),
            max_len,
        }
    }

    /// Whether no more jobs may be queued.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.jobs.len() >= self.max_len
    }

    /// Whether the queue holds no jobs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of jobs in the queue (active plus waiting).
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// The job at the head of the queue, if any.
    #[must_use]
    pub fn head(&self) -> Option<&ProductionJob> {
        self.jobs.front()
    }

    /// Iterate jobs in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductionJob> {
        self.jobs.iter()
    }

    /// Find a job by id.
    #[must_use]
    pub fn get(&self, id: JobId) -> Option<&ProductionJob> {
        self.jobs.iter().find(|job| job.id == id)
    }

    fn get_mut(&mut self, id: JobId) -> Option<&mut ProductionJob> {
        self.jobs.iter_mut().find(|job| job.id == id)
    }

    fn remove(&mut self, id: JobId) -> Option<ProductionJob> {
        let pos = self.jobs.iter().position(|job| job.id == id)?;
        self.jobs.remove(pos)
    }
}

impl Default for ProductionQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral progress information.
    Info,
    /// Something the player asked for worked.
    Success,
    /// Something was lost or skipped.
    Warning,
    /// A request was rejected.
    Error,
}

/// Host-injected side-effect sinks.
///
/// All methods default to no-ops: a host that does not care about a
/// collaborator simply leaves it out and the side effect is skipped.
pub trait ProductionHooks {
    /// Deliver a user-visible notification.
    fn notify(&mut self, message: &str, severity: Severity) {
        let _ = (message, severity);
    }

    /// Award experience to the player.
    fn grant_xp(&mut self, amount: u32, source: &str, description: &str) {
        let _ = (amount, source, description);
    }
}

/// Hooks implementation that ignores every side effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl ProductionHooks for NoopHooks {}

/// Errors from production operations.
///
/// Every failure leaves the manager and stockpile exactly as they
/// were before the call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductionError {
    /// The building index is outside the grid.
    #[error("No grid slot at index {0}")]
    UnknownBuilding(usize),

    /// The grid slot holds no building.
    #[error("Grid slot {0} is empty")]
    EmptySlot(usize),

    /// The recipe id is not in the catalog.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    /// The recipe needs a different building type.
    #[error("Recipe '{recipe}' requires a {required}")]
    WrongBuilding {
        /// The rejected recipe.
        recipe: String,
        /// The building type it needs.
        required: String,
    },

    /// The player has not unlocked this recipe yet.
    #[error("Recipe '{recipe}' unlocks at level {required}")]
    LevelTooLow {
        /// The rejected recipe.
        recipe: String,
        /// The level it unlocks at.
        required: u32,
    },

    /// The building does not declare a yield for this resource.
    #[error("Building '{building}' cannot extract '{resource}'")]
    NoSuchYield {
        /// The building's display name.
        building: String,
        /// The requested resource.
        resource: String,
    },

    /// The building's queue is at capacity.
    #[error("Production queue for slot {0} is full")]
    QueueFull(usize),

    /// Not enough resources in the stockpile.
    #[error(transparent)]
    Resources(#[from] GameError),

    /// No job with this id in the building's queue.
    #[error("Job {job} not found at slot {building_index}")]
    JobNotFound {
        /// The building slot searched.
        building_index: usize,
        /// The missing job id.
        job: JobId,
    },

    /// Pause requested for a job that is not active.
    #[error("Job {0} is not active")]
    NotActive(JobId),

    /// Resume requested for a job that is not paused.
    #[error("Job {0} is not paused")]
    NotPaused(JobId),
}

/// Events generated by queue advancement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionEvent {
    /// A job finished; its outputs were applied to the stockpile.
    Completed {
        /// Owning building slot.
        building_index: usize,
        /// The finished job's id.
        job: JobId,
        /// Display label of the work.
        label: String,
        /// Resources deposited.
        outputs: Vec<Stack>,
        /// Experience awarded.
        xp: u32,
    },
    /// A waiting job moved to the head and started producing.
    Promoted {
        /// Owning building slot.
        building_index: usize,
        /// The promoted job's id.
        job: JobId,
        /// Display label of the work.
        label: String,
        /// Freshly stamped completion minute.
        completion_time: i64,
    },
}

/// A producible option presented to the player for one building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOption {
    /// What starting this option would run.
    pub source: RecipeSource,
    /// Display label.
    pub label: String,
    /// Base minutes at 1x speed.
    pub minutes: u32,
    /// Resources consumed on start.
    pub inputs: Vec<Stack>,
    /// Resources produced on completion.
    pub outputs: Vec<Stack>,
    /// Experience awarded on completion.
    pub xp: u32,
}

/// Experience for one raw extraction run: half the yield, rounded up.
const fn extraction_xp(quantity: u32) -> u32 {
    quantity.div_ceil(2)
}

/// Everything needed to run a job, captured at submission time.
struct ResolvedJob {
    inputs: Vec<Stack>,
    outputs: Vec<Stack>,
    base_minutes: u32,
    xp_reward: u32,
    label: String,
}

/// Owner of every building's production queue.
///
/// The manager never reads the wall clock or advances game time; the
/// host supplies the current game-minute stamp and speed with each
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionManager {
    /// Queue per occupied building slot. Slots with no jobs hold no entry.
    queues: HashMap<usize, ProductionQueue>,
    /// Next job id to allocate.
    next_job_id: u64,
    /// Queue cap applied to newly created queues.
    max_queue_len: usize,
}

impl ProductionManager {
    /// Create a manager with the default per-building queue cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_queue_len(ProductionQueue::DEFAULT_MAX_LEN)
    }

    /// Create a manager with a specific per-building queue cap.
    #[must_use]
    pub fn with_max_queue_len(max_queue_len: usize) -> Self {
        Self {
            queues: HashMap::new(),
            next_job_id: 1,
            max_queue_len,
        }
    }

    /// The queue for a building slot, if it has one.
    #[must_use]
    pub fn queue(&self, building_index: usize) -> Option<&ProductionQueue> {
        self.queues.get(&building_index)
    }

    /// The active job for a building slot, if any.
    #[must_use]
    pub fn active_job(&self, building_index: usize) -> Option<&ProductionJob> {
        self.queue(building_index)
            .and_then(ProductionQueue::head)
            .filter(|job| job.status == JobStatus::Active)
    }

    /// Queues in ascending slot order.
    #[must_use]
    pub fn queues_sorted(&self) -> Vec<(usize, &ProductionQueue)> {
        let mut queues: Vec<(usize, &ProductionQueue)> =
            self.queues.iter().map(|(&idx, q)| (idx, q)).collect();
        queues.sort_by_key(|(idx, _)| *idx);
        queues
    }

    /// Total number of active jobs across all buildings.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.queues
            .values()
            .filter_map(ProductionQueue::head)
            .filter(|job| job.status == JobStatus::Active)
            .count()
    }

    /// Total number of waiting (queued or paused) jobs.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.queues
            .values()
            .flat_map(ProductionQueue::iter)
            .filter(|job| job.status != JobStatus::Active)
            .count()
    }

    /// Start a production job at a building slot.
    ///
    /// Validates the slot, the source, and the player's unlock level,
    /// then deducts inputs immediately - resources are reserved the
    /// instant a job is accepted, even if it has to wait in the queue.
    /// If the queue was empty the job starts at once with times
    /// stamped from `now`; otherwise it waits with placeholder times.
    ///
    /// # Errors
    ///
    /// Any validation failure is returned without touching manager or
    /// stockpile state.
    pub fn start_production(
        &mut self,
        grid: &Grid,
        building_index: usize,
        source: RecipeSource,
        catalog: &Catalog,
        stockpile: &mut Stockpile,
        player_level: u32,
        now_total: i64,
        speed: TimeSpeed,
        hooks: &mut dyn ProductionHooks,
    ) -> Result<JobId, ProductionError> {
        let slot = grid
            .get(building_index)
            .ok_or(ProductionError::UnknownBuilding(building_index))?;
        let building = slot
            .as_ref()
            .ok_or(ProductionError::EmptySlot(building_index))?;

        let resolved = resolve(&source, building, catalog, player_level)?;

        // Capacity check comes before the deduction so a full queue
        // cannot eat materials. No queue entry exists until the job is
        // accepted, so a rejected start leaves the manager untouched.
        if self
            .queues
            .get(&building_index)
            .is_some_and(ProductionQueue::is_full)
        {
            return Err(ProductionError::QueueFull(building_index));
        }

        stockpile.consume(&resolved.inputs)?;

        let queue = self
            .queues
            .entry(building_index)
            .or_insert_with(|| ProductionQueue::with_max_len(self.max_queue_len));

        let queued = !queue.is_empty();
        let timing = clock::schedule(now_total, resolved.base_minutes, speed, queued);

        let id = JobId(self.next_job_id);
        self.next_job_id += 1;

        let job = ProductionJob {
            id,
            source,
            building_index,
            label: resolved.label,
            building_label: building.name.clone(),
            outputs: resolved.outputs,
            xp_reward: resolved.xp_reward,
            base_minutes: resolved.base_minutes,
            duration: timing.duration,
            start_time: timing.start,
            completion_time: timing.end,
            status: if queued { JobStatus::Queued } else { JobStatus::Active },
            paused_remaining: 0,
        };

        if queued {
            hooks.notify(
                &format!("Queued {} at {}", job.label, job.building_label),
                Severity::Info,
            );
        } else {
            hooks.notify(
                &format!("Started producing {} at {}", job.label, job.building_label),
                Severity::Success,
            );
        }
        queue.jobs.push_back(job);

        Ok(id)
    }

    /// Cancel a job unconditionally.
    ///
    /// Already-deducted inputs are *not* refunded: starting a job
    /// commits its resource cost. If the cancelled job held the head
    /// slot (active or paused), the next waiting job is promoted
    /// immediately with fresh times.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::JobNotFound`] if the slot has no
    /// such job.
    pub fn cancel_production(
        &mut self,
        building_index: usize,
        job: JobId,
        now_total: i64,
        speed: TimeSpeed,
        hooks: &mut dyn ProductionHooks,
    ) -> Result<ProductionJob, ProductionError> {
        let queue = self
            .queues
            .get_mut(&building_index)
            .ok_or(ProductionError::JobNotFound { building_index, job })?;
        let removed = queue
            .remove(job)
            .ok_or(ProductionError::JobNotFound { building_index, job })?;

        // Removing the head (active or paused) unblocks the queue;
        // promote_head is a no-op unless the new head is still queued.
        promote_head(queue, now_total, speed);
        if queue.is_empty() {
            self.queues.remove(&building_index);
        }

        hooks.notify(
            &format!("Cancelled {} (materials not refunded)", removed.label),
            Severity::Warning,
        );
        Ok(removed)
    }

    /// Freeze the active job at a building slot.
    ///
    /// The remaining minutes are captured; the queue is blocked until
    /// the job is resumed or cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::NotActive`] unless the named job is
    /// the active head of its queue.
    pub fn pause_production(
        &mut self,
        building_index: usize,
        job: JobId,
        now_total: i64,
        hooks: &mut dyn ProductionHooks,
    ) -> Result<(), ProductionError> {
        let queue = self
            .queues
            .get_mut(&building_index)
            .ok_or(ProductionError::JobNotFound { building_index, job })?;
        let item = queue
            .get_mut(job)
            .ok_or(ProductionError::JobNotFound { building_index, job })?;

        if item.status != JobStatus::Active {
            return Err(ProductionError::NotActive(job));
        }

        item.paused_remaining = (item.completion_time - now_total).max(0);
        item.status = JobStatus::Paused;
        hooks.notify(&format!("Paused {}", item.label), Severity::Info);
        Ok(())
    }

    /// Resume a paused job, restamping its window from `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ProductionError::NotPaused`] unless the named job is
    /// paused.
    pub fn resume_production(
        &mut self,
        building_index: usize,
        job: JobId,
        now_total: i64,
        hooks: &mut dyn ProductionHooks,
    ) -> Result<(), ProductionError> {
        let queue = self
            .queues
            .get_mut(&building_index)
            .ok_or(ProductionError::JobNotFound { building_index, job })?;
        let item = queue
            .get_mut(job)
            .ok_or(ProductionError::JobNotFound { building_index, job })?;

        if item.status != JobStatus::Paused {
            return Err(ProductionError::NotPaused(job));
        }

        item.completion_time = now_total + item.paused_remaining;
        item.start_time = item.completion_time - i64::from(item.duration);
        item.paused_remaining = 0;
        item.status = JobStatus::Active;
        hooks.notify(&format!("Resumed {}", item.label), Severity::Info);
        Ok(())
    }

    /// Advance every queue to the current game time.
    ///
    /// Completes each active job whose completion stamp has passed:
    /// outputs land in the stockpile, xp is awarded, a notification
    /// fires, and the next waiting job (if any) is promoted with times
    /// computed *now* - waiting in the queue never counts toward a
    /// job's own duration. Paused jobs block their queue.
    ///
    /// Buildings are processed in ascending slot order; the returned
    /// events are in that order.
    pub fn advance(
        &mut self,
        now_total: i64,
        speed: TimeSpeed,
        stockpile: &mut Stockpile,
        hooks: &mut dyn ProductionHooks,
    ) -> Vec<ProductionEvent> {
        let mut events = Vec::new();

        let mut indices: Vec<usize> = self.queues.keys().copied().collect();
        indices.sort_unstable();

        for index in indices {
            let Some(queue) = self.queues.get_mut(&index) else {
                continue;
            };

            loop {
                match queue.jobs.front() {
                    Some(head)
                        if head.status == JobStatus::Active
                            && head.completion_time <= now_total => {}
                    _ => break,
                }
                let Some(mut done) = queue.jobs.pop_front() else {
                    break;
                };
                done.status = JobStatus::Completed;

                stockpile.deposit_stacks(&done.outputs);
                if done.xp_reward > 0 {
                    hooks.grant_xp(done.xp_reward, "production", &done.label);
                }
                hooks.notify(
                    &format!("{} complete at {}", done.label, done.building_label),
                    Severity::Success,
                );
                events.push(ProductionEvent::Completed {
                    building_index: index,
                    job: done.id,
                    label: done.label.clone(),
                    outputs: done.outputs.clone(),
                    xp: done.xp_reward,
                });

                if let Some(promoted) = promote_head(queue, now_total, speed) {
                    events.push(promoted);
                }
            }

            if queue.is_empty() {
                self.queues.remove(&index);
            }
        }

        events
    }

    /// Completion percentage for a job (0 for anything not active).
    #[must_use]
    pub fn progress(job: &ProductionJob, now_total: i64) -> u32 {
        if job.status != JobStatus::Active {
            return 0;
        }
        clock::progress(job.start_time, job.completion_time, now_total).percent
    }

    /// Hash of the full manager state, for determinism checks.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.next_job_id.hash(&mut hasher);
        for (index, queue) in self.queues_sorted() {
            index.hash(&mut hasher);
            for job in queue.iter() {
                job.hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

impl Default for ProductionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Promote the queue head to active with freshly stamped times.
fn promote_head(
    queue: &mut ProductionQueue,
    now_total: i64,
    speed: TimeSpeed,
) -> Option<ProductionEvent> {
    let head = queue.jobs.front_mut()?;
    if head.status != JobStatus::Queued {
        return None;
    }

    let timing = clock::schedule(now_total, head.base_minutes, speed, false);
    head.duration = timing.duration;
    head.start_time = timing.start;
    head.completion_time = timing.end;
    head.status = JobStatus::Active;

    Some(ProductionEvent::Promoted {
        building_index: head.building_index,
        job: head.id,
        label: head.label.clone(),
        completion_time: head.completion_time,
    })
}

/// Resolve a recipe source against the catalog and the owning building.
fn resolve(
    source: &RecipeSource,
    building: &Building,
    catalog: &Catalog,
    player_level: u32,
) -> Result<ResolvedJob, ProductionError> {
    match source {
        RecipeSource::Recipe(recipe_id) => {
            let recipe = catalog
                .recipe(recipe_id.as_str())
                .ok_or_else(|| ProductionError::UnknownRecipe(recipe_id.to_string()))?;
            if recipe.required_building != building.kind {
                return Err(ProductionError::WrongBuilding {
                    recipe: recipe.id.to_string(),
                    required: recipe.required_building.to_string(),
                });
            }
            if recipe.unlock_level > player_level {
                return Err(ProductionError::LevelTooLow {
                    recipe: recipe.id.to_string(),
                    required: recipe.unlock_level,
                });
            }
            Ok(ResolvedJob {
                inputs: recipe.inputs.clone(),
                outputs: recipe.outputs.clone(),
                base_minutes: recipe.production_minutes,
                xp_reward: recipe.xp_reward,
                label: recipe.name.clone(),
            })
        }
        RecipeSource::Extraction {
            resource,
            quantity,
            minutes,
        } => {
            if building.yield_for(resource.as_str()).is_none() {
                return Err(ProductionError::NoSuchYield {
                    building: building.name.clone(),
                    resource: resource.to_string(),
                });
            }
            let label = catalog
                .resource(resource.as_str())
                .map_or_else(|| resource.to_string(), |r| r.name.clone());
            Ok(ResolvedJob {
                inputs: Vec::new(),
                outputs: vec![Stack {
                    resource: resource.clone(),
                    quantity: *quantity,
                }],
                base_minutes: *minutes,
                xp_reward: extraction_xp(*quantity),
                label,
            })
        }
    }
}

/// Everything a building can produce, as one uniform list.
///
/// Raw extraction yields come first (in declaration order), followed
/// by the catalog recipes this building runs that the player has
/// unlocked.
#[must_use]
pub fn available_productions(
    building: &Building,
    catalog: &Catalog,
    player_level: u32,
) -> Vec<ProductionOption> {
    let mut options = Vec::new();

    for extraction in &building.produces {
        let label = catalog
            .resource(extraction.resource.as_str())
            .map_or_else(|| extraction.resource.to_string(), |r| r.name.clone());
        options.push(ProductionOption {
            source: RecipeSource::Extraction {
                resource: extraction.resource.clone(),
                quantity: extraction.quantity,
                minutes: extraction.minutes,
            },
            label,
            minutes: extraction.minutes,
            inputs: Vec::new(),
            outputs: vec![extraction.output()],
            xp: extraction_xp(extraction.quantity),
        });
    }

    for recipe in catalog.recipes_for_building(building.kind.as_str()) {
        if recipe.unlock_level > player_level {
            continue;
        }
        options.push(ProductionOption {
            source: RecipeSource::Recipe(recipe.id.clone()),
            label: recipe.name.clone(),
            minutes: recipe.production_minutes,
            inputs: recipe.inputs.clone(),
            outputs: recipe.outputs.clone(),
            xp: recipe.xp_reward,
        });
    }

    options
}
