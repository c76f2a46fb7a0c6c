//! Route-assignment feasibility predicate.
//!
//! [`can_assign`] is the single source of truth for whether a driver may
//! take a route at a given start time. Both scheduler variants call it
//! exclusively; no constraint is re-checked elsewhere.
//!
//! # Checks, in order, short-circuiting on first failure
//!
//! 1. The candidate interval must not overlap any of the driver's busy
//!    intervals (half-open, post-normalization).
//! 2. If the driver has a prior interval, the candidate start must not
//!    precede its end and the gap must cover the mandatory rest.
//! 3. Worked minutes before this assignment must be strictly below the
//!    category's shift cap; routes are never split to fit.
//! 4. The normalized candidate end must not pass the work-window close.
//!    Routes that would exceed the window go through the extra-trip
//!    path instead of being clipped.
//!
//! Weekend availability is a roster-level rule checked by the callers,
//! not here.

use crate::ledger::DriverLedger;
use crate::models::{ClockTime, Driver, SchedulePolicy, TimeInterval, WorkWindow};

/// Whether `driver` can take a route of `minutes` starting at `start`.
pub fn can_assign(
    driver: &Driver,
    start: ClockTime,
    minutes: u32,
    ledger: &DriverLedger,
    policy: &SchedulePolicy,
) -> bool {
    let candidate = TimeInterval::with_duration(start, minutes);

    let busy = ledger.busy_intervals(&driver.id);
    if busy.iter().any(|interval| candidate.overlaps(interval)) {
        return false;
    }

    if let Some(last) = busy.last() {
        let (_, last_end) = last.normalized();
        let candidate_start = start.minutes();
        if candidate_start < last_end {
            return false;
        }
        if candidate_start - last_end < policy.min_rest_minutes {
            return false;
        }
    }

    if ledger.worked_minutes(&driver.id) >= policy.cap_minutes(driver.category) {
        return false;
    }

    let (_, candidate_end) = candidate.normalized();
    WorkWindow::fits(candidate_end)
}
