//! Staffing estimator.
//!
//! Ceiling-division pre-flight check: how many drivers a route count
//! needs given the shift length, and how many the roster is short.
//! Callers reject a run outright when the shortfall is positive, before
//! any scheduling attempt is made.

/// Maximum routes one driver can complete in a shift.
///
/// Zero when a single route does not fit in the shift at all.
pub fn max_routes_per_driver(shift_hours: u32, travel_minutes: u32) -> u32 {
    if travel_minutes == 0 {
        return 0;
    }
    shift_hours * 60 / travel_minutes
}

/// Minimum additional drivers needed to cover `num_routes`.
///
/// Returns 0 iff `driver_count * max_routes_per_driver >= num_routes`.
/// When no driver can complete even one route, every route is
/// uncoverable and the full `num_routes` is reported as the shortfall.
pub fn min_additional_drivers(
    num_routes: u32,
    driver_count: usize,
    shift_hours: u32,
    travel_minutes: u32,
) -> u32 {
    let per_driver = max_routes_per_driver(shift_hours, travel_minutes);
    if per_driver == 0 {
        return num_routes;
    }
    let required = num_routes.div_ceil(per_driver);
    required.saturating_sub(driver_count as u32)
}
