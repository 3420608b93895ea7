//! Simulation constants - all tunable values in one place
//!
//! These values were lifted from the observed behavior of the live product
//! and are fixed rather than player-tunable.

// Time
/// Base interval between turns at speed X1, in milliseconds.
/// Higher speeds divide this (X2 = 1000ms, X10 = 200ms).
pub const BASE_TICK_MS: u64 = 2000;

// Response evaluation
/// A society succeeds at an event when its aggregated score reaches this
/// fraction of the required score.
pub const SUCCESS_RATE_THRESHOLD: f32 = 0.7;
/// A being is recorded as a contributor for an attribute when its individual
/// contribution covers at least this fraction of the attribute threshold.
pub const CONTRIBUTOR_SHARE: f32 = 0.3;

// Fitness
pub const INITIAL_FITNESS: f32 = 50.0;
/// Flat fitness reward for every contributor on a successful event.
pub const FITNESS_REWARD: f32 = 5.0;
/// Flat fitness penalty for every living being on a failed event.
pub const FITNESS_PENALTY: f32 = 2.0;

// Metrics
pub const METRIC_MIN: f32 = 0.0;
pub const METRIC_MAX: f32 = 100.0;
pub const INITIAL_METRIC_VALUE: f32 = 50.0;

// Hybridization
/// A new hybrid being is produced automatically every N turns.
pub const HYBRIDIZATION_PERIOD: u64 = 10;
/// Mutation range applied to each averaged attribute: ±5% of the average.
pub const MUTATION_SPREAD: f32 = 0.1;
/// How many knowledge pieces each parent passes on to a hybrid child.
pub const INHERITED_PIECES_PER_PARENT: usize = 6;

// Culling
/// Beings below this fitness are marked dead during a cull pass.
pub const CULL_FITNESS_THRESHOLD: f32 = 20.0;
/// A cull pass is skipped entirely when the living population is at or
/// below this floor. Checked once before the pass, not per removal.
pub const POPULATION_FLOOR: usize = 5;

// Histories
pub const METRICS_HISTORY_CAP: usize = 100;
pub const EVENT_LOG_CAP: usize = 50;
pub const INTERVENTION_HISTORY_CAP: usize = 50;

// Divine intervention economy
pub const MAX_DIVINE_POINTS: u32 = 5;
/// One divine point regenerates every N turns, up to MAX_DIVINE_POINTS.
pub const POINT_REGEN_PERIOD: u64 = 20;
/// Turns advanced synchronously by the skip-turns intervention.
pub const SKIP_TURNS_COUNT: u64 = 5;

// Intervention effects
/// Flat fitness granted to every living being by a blessing.
pub const BLESS_FITNESS_BONUS: f32 = 15.0;
/// Multiplier applied to one attribute by a forced mutation.
pub const MUTATE_BOOST: f32 = 1.2;
pub const HEAL_HEALTH_BONUS: f32 = 20.0;
/// Applied to both knowledge and cohesion by an inspiration.
pub const INSPIRE_METRIC_BONUS: f32 = 10.0;
