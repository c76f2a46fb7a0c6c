//! Genetic schedule optimization.
//!
//! [`GeneticOptimizer`] searches a population of candidate schedules
//! seeded by greedy attempts and bred through midpoint crossover and
//! route-level mutation. It trades the direct scheduler's
//! all-or-nothing guarantee for best-effort coverage that improves
//! monotonically across generations.

pub mod operators;

mod optimizer;

pub use optimizer::{GaConfig, GaOutcome, GeneticOptimizer};
