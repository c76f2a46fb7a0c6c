//! Genetic operators over whole schedules.
//!
//! The encoding is the schedule itself: an individual is an ordered
//! assignment list, and fitness is its length. Operators are pure
//! functions returning new values, so ledgers and schedules stay
//! independently testable and a population can be evaluated in
//! parallel.
//!
//! Crossover and mutation deliberately do not re-validate feasibility;
//! they are exploratory operators on assignment lists. Only the
//! initial attempt construction enforces the assignment constraints.

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::feasibility::can_assign;
use crate::ledger::DriverLedger;
use crate::models::{
    ClockTime, Driver, RouteAssignment, RouteKind, Schedule, TimeInterval, WorkWindow,
};
use crate::scheduler::ScheduleRequest;

/// Maximum minutes a mutation may jitter a route endpoint, each way.
const JITTER_MINUTES: i32 = 15;

/// Builds one candidate schedule greedily.
///
/// Simplified variant of the direct scheduler used to seed the
/// population: routes are placed back-to-back at the base travel
/// duration, the clock resets to the window opening when it runs past
/// the close (marking the next route an extra trip), and construction
/// stops at the first route no driver can take, yielding a partial
/// schedule.
pub fn build_attempt<R: Rng + ?Sized>(request: &ScheduleRequest, rng: &mut R) -> Schedule {
    let policy = &request.policy;
    let mut order: Vec<usize> = (0..request.roster.len()).collect();
    order.shuffle(rng);

    let mut ledger = DriverLedger::new(&request.roster);
    let mut schedule = Schedule::new();
    let mut current = WorkWindow::start_minutes();
    let mut force_extra = false;

    for _ in 0..request.num_routes {
        let kind = RouteKind::pick(rng);
        let minutes = policy.travel_minutes;
        let candidate_end = current + minutes;
        let extra = force_extra || !WorkWindow::fits(candidate_end);
        force_extra = false;

        let start = ClockTime::from_minutes(current);
        let mut placed = false;
        for &idx in &order {
            let driver = &request.roster[idx];
            if !driver.available_on(request.day) {
                continue;
            }
            if can_assign(driver, start, minutes, &ledger, policy) {
                let interval = TimeInterval::with_duration(start, minutes);
                ledger.record(&driver.id, interval, minutes);
                let mut assignment = RouteAssignment::new(
                    &driver.id,
                    kind,
                    interval,
                    ledger.route_count(&driver.id),
                );
                if extra {
                    assignment = assignment.as_extra_trip();
                }
                schedule.push(assignment);
                placed = true;
                break;
            }
        }
        if !placed {
            break;
        }

        current = candidate_end + policy.break_minutes;
        if current >= WorkWindow::end_minutes() {
            current = WorkWindow::start_minutes();
            force_extra = true;
        }
    }

    schedule
}

/// Single-point crossover at the first parent's midpoint.
///
/// Recombines head-of-one with tail-of-the-other in both directions.
/// Empty parents are returned unchanged.
pub fn crossover(p1: &Schedule, p2: &Schedule) -> (Schedule, Schedule) {
    if p1.is_empty() || p2.is_empty() {
        return (p1.clone(), p2.clone());
    }

    let cut = p1.len() / 2;
    let splice = |head: &Schedule, tail: &Schedule| Schedule {
        assignments: head
            .iter()
            .take(cut)
            .chain(tail.iter().skip(cut))
            .cloned()
            .collect(),
    };
    (splice(p1, p2), splice(p2, p1))
}

/// Reassigns one random route to a random driver, with a 50% chance of
/// additionally jittering its start and end independently by up to
/// ±15 minutes.
///
/// Jittered times wrap at midnight; the route is otherwise unchanged.
/// Returns a new schedule, leaving the input untouched.
pub fn mutate<R: Rng + ?Sized>(
    schedule: &Schedule,
    drivers: &[Driver],
    rng: &mut R,
) -> Schedule {
    if schedule.is_empty() {
        return schedule.clone();
    }

    let mut mutated = schedule.clone();
    let idx = rng.random_range(0..mutated.len());
    if let Some(driver) = drivers.choose(rng) {
        mutated.assignments[idx].driver_id = driver.id.clone();
    }

    if rng.random_bool(0.5) {
        let assignment = &mut mutated.assignments[idx];
        assignment.start = assignment
            .start
            .add_signed(rng.random_range(-JITTER_MINUTES..=JITTER_MINUTES));
        assignment.end = assignment
            .end
            .add_signed(rng.random_range(-JITTER_MINUTES..=JITTER_MINUTES));
    }

    mutated
}
