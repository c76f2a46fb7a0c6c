//! Generational genetic search over candidate schedules.
//!
//! # Algorithm
//!
//! Classic elitist GA: seed a population of greedy attempts, each
//! generation keep the top half as parents, refill with midpoint
//! crossover of random parent pairs, then mutate individuals at the
//! configured rate. Fitness is the number of routes an individual
//! covers; the search short-circuits as soon as the best individual
//! covers every requested route.
//!
//! The best individual only ever improves, so the per-generation best
//! trace is non-decreasing. Crossover and mutation may produce
//! assignment lists that break placement rules; by default they still
//! score by length. [`GaConfig::with_strict_fitness`] switches scoring
//! to a replay that counts only assignments a fresh ledger would
//! accept.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::error::ScheduleError;
use crate::feasibility::can_assign;
use crate::ga::operators::{build_attempt, crossover, mutate};
use crate::ledger::DriverLedger;
use crate::models::{Driver, Schedule};
use crate::scheduler::ScheduleRequest;
use crate::validation::validate_request;

/// Tuning knobs for the genetic search.
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Generation cap.
    pub generations: u32,
    /// Individuals kept per generation.
    pub population_size: usize,
    /// Per-individual mutation probability, clamped to `[0, 1]`.
    pub mutation_rate: f64,
    /// Score individuals by replayed legal assignments instead of raw
    /// length.
    pub strict_fitness: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 50,
            population_size: 20,
            mutation_rate: 0.1,
            strict_fitness: false,
        }
    }
}

impl GaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_strict_fitness(mut self, strict_fitness: bool) -> Self {
        self.strict_fitness = strict_fitness;
        self
    }
}

/// Result of a genetic search run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaOutcome {
    /// Best schedule found.
    pub schedule: Schedule,
    /// Its fitness under the configured scoring.
    pub fitness: usize,
    /// Whether every requested route is covered.
    pub full_coverage: bool,
    /// Best fitness after each generation that ran.
    pub best_by_generation: Vec<usize>,
}

#[derive(Debug, Clone)]
struct Individual {
    schedule: Schedule,
    fitness: usize,
}

/// Population-based schedule optimizer.
///
/// Unlike [`crate::scheduler::DirectScheduler`], which either covers
/// every route or fails, the genetic search always returns its best
/// partial schedule; callers check [`GaOutcome::full_coverage`].
#[derive(Debug, Clone, Default)]
pub struct GeneticOptimizer {
    config: GaConfig,
}

impl GeneticOptimizer {
    /// Creates an optimizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with the given configuration.
    pub fn with_config(config: GaConfig) -> Self {
        Self { config }
    }

    /// Runs the search and returns the best individual found.
    ///
    /// Fails on the same pre-flight checks as the direct scheduler,
    /// plus an empty population. Otherwise always produces an outcome,
    /// possibly with partial coverage.
    pub fn run<R: Rng + ?Sized>(
        &self,
        request: &ScheduleRequest,
        rng: &mut R,
    ) -> Result<GaOutcome, ScheduleError> {
        validate_request(request)?;
        if self.config.population_size == 0 {
            return Err(ScheduleError::InvalidInput(
                "population size must be positive".into(),
            ));
        }

        let target = request.num_routes as usize;
        let mutation_rate = self.config.mutation_rate.clamp(0.0, 1.0);
        // Mutation only ever draws from drivers working that day.
        let eligible: Vec<Driver> = request
            .roster
            .iter()
            .filter(|d| d.available_on(request.day))
            .cloned()
            .collect();

        let mut population: Vec<Individual> = (0..self.config.population_size)
            .map(|_| self.evaluate(build_attempt(request, rng), request))
            .collect();

        let mut best = match population.iter().max_by_key(|ind| ind.fitness) {
            Some(ind) => ind.clone(),
            None => {
                return Err(ScheduleError::InvalidInput(
                    "population size must be positive".into(),
                ))
            }
        };
        let mut best_by_generation = Vec::new();

        for generation in 0..self.config.generations {
            population.sort_by(|a, b| b.fitness.cmp(&a.fitness));
            if population[0].fitness > best.fitness {
                best = population[0].clone();
            }
            best_by_generation.push(best.fitness);
            debug!(
                "generation {}: best fitness {}/{}",
                generation, best.fitness, target
            );
            if best.fitness >= target {
                break;
            }

            let parent_count = (self.config.population_size / 2).max(1);
            let parents: Vec<Individual> =
                population[..parent_count.min(population.len())].to_vec();

            let mut next = parents.clone();
            while next.len() < self.config.population_size {
                let (pa, pb) = pick_pair(&parents, rng);
                let (c1, c2) = crossover(&pa.schedule, &pb.schedule);
                next.push(self.evaluate(c1, request));
                next.push(self.evaluate(c2, request));
            }

            for ind in &mut next {
                if rng.random_bool(mutation_rate) {
                    let mutated = mutate(&ind.schedule, &eligible, rng);
                    *ind = self.evaluate(mutated, request);
                }
            }

            next.truncate(self.config.population_size);
            population = next;
        }

        Ok(GaOutcome {
            full_coverage: best.fitness >= target,
            fitness: best.fitness,
            schedule: best.schedule,
            best_by_generation,
        })
    }

    fn evaluate(&self, schedule: Schedule, request: &ScheduleRequest) -> Individual {
        let fitness = if self.config.strict_fitness {
            legal_route_count(&schedule, request)
        } else {
            schedule.fitness()
        };
        Individual { schedule, fitness }
    }
}

/// Picks two parents at random, falling back to self-pairing when the
/// pool holds a single individual.
fn pick_pair<'a, R: Rng + ?Sized>(
    parents: &'a [Individual],
    rng: &mut R,
) -> (&'a Individual, &'a Individual) {
    let mut picked = parents.choose_multiple(rng, 2);
    match (picked.next(), picked.next()) {
        (Some(a), Some(b)) => (a, b),
        _ => (&parents[0], &parents[0]),
    }
}

/// Replays a schedule through a fresh ledger and counts the
/// assignments that still pass every placement rule in order.
fn legal_route_count(schedule: &Schedule, request: &ScheduleRequest) -> usize {
    let mut ledger = DriverLedger::new(&request.roster);
    let mut count = 0;
    for assignment in schedule {
        let Some(driver) = request
            .roster
            .iter()
            .find(|d| d.id == assignment.driver_id)
        else {
            continue;
        };
        if !driver.available_on(request.day) {
            continue;
        }
        let minutes = assignment.duration_minutes();
        if can_assign(driver, assignment.start, minutes, &ledger, &request.policy) {
            ledger.record(&driver.id, assignment.interval(), minutes);
            count += 1;
        }
    }
    count
}
