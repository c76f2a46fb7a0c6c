//! Pre-flight admission control for scheduling runs.
//!
//! Rejects provably bad requests before any scheduling attempt runs:
//! out-of-range inputs, duplicate driver IDs, weekends without
//! category-B cover, and staffing shortfalls from the ceiling-division
//! estimate. Both scheduler entry points call [`validate_request`]
//! first.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::scheduler::staffing::min_additional_drivers;
use crate::scheduler::ScheduleRequest;

/// Validates a request, returning the first failed check.
///
/// Checks, in order:
/// 1. Positive route count and travel duration, non-empty roster,
///    unique driver IDs (`InvalidInput`).
/// 2. On weekends, at least one category-B driver
///    (`WeekendStaffingGap`).
/// 3. The eligible roster covers the route count under the largest
///    shift cap among its categories (`StaffingShortfall`). On
///    weekends only category-B drivers are eligible.
pub fn validate_request(request: &ScheduleRequest) -> Result<(), ScheduleError> {
    if request.num_routes == 0 {
        return Err(ScheduleError::InvalidInput(
            "route count must be positive".into(),
        ));
    }
    if request.policy.travel_minutes == 0 {
        return Err(ScheduleError::InvalidInput(
            "route travel duration must be positive".into(),
        ));
    }
    if request.roster.is_empty() {
        return Err(ScheduleError::InvalidInput("driver roster is empty".into()));
    }

    let mut seen = HashSet::new();
    for driver in &request.roster {
        if !seen.insert(driver.id.as_str()) {
            return Err(ScheduleError::InvalidInput(format!(
                "duplicate driver ID '{}'",
                driver.id
            )));
        }
    }

    let weekend = request.day.is_weekend();
    let eligible: Vec<_> = request
        .roster
        .iter()
        .filter(|d| d.available_on(request.day))
        .collect();
    if weekend && eligible.is_empty() {
        return Err(ScheduleError::WeekendStaffingGap);
    }

    let shift_hours = eligible
        .iter()
        .map(|d| request.policy.shift_hours(d.category))
        .max()
        .unwrap_or(0);

    let needed = min_additional_drivers(
        request.num_routes,
        eligible.len(),
        shift_hours,
        request.policy.travel_minutes,
    );
    if needed > 0 {
        return Err(ScheduleError::StaffingShortfall { needed });
    }

    Ok(())
}
