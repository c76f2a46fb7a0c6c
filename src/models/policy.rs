//! Run-level scheduling policy constants.
//!
//! Route travel duration, the short break taken between routes, the
//! mandatory rest before a driver's next route, and per-category shift
//! caps. These are configuration for one run, not per-entity state.

use serde::{Deserialize, Serialize};

use super::driver::DriverCategory;

/// Policy constants for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// Base one-way travel duration in minutes.
    pub travel_minutes: u32,
    /// Break between consecutive routes in minutes.
    pub break_minutes: u32,
    /// Minimum mandatory rest before a driver's next route, in minutes.
    pub min_rest_minutes: u32,
    /// Shift cap for category-A drivers, in hours.
    pub shift_hours_a: u32,
    /// Shift cap for category-B drivers, in hours.
    pub shift_hours_b: u32,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            travel_minutes: 60,
            break_minutes: 10,
            min_rest_minutes: 30,
            shift_hours_a: DriverCategory::A.default_shift_hours(),
            shift_hours_b: DriverCategory::B.default_shift_hours(),
        }
    }
}

impl SchedulePolicy {
    /// Creates the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base travel duration.
    pub fn with_travel_minutes(mut self, minutes: u32) -> Self {
        self.travel_minutes = minutes;
        self
    }

    /// Sets the break between routes.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_minutes = minutes;
        self
    }

    /// Sets the minimum rest before a driver's next route.
    pub fn with_min_rest_minutes(mut self, minutes: u32) -> Self {
        self.min_rest_minutes = minutes;
        self
    }

    /// Shift length in hours for a category.
    pub fn shift_hours(&self, category: DriverCategory) -> u32 {
        match category {
            DriverCategory::A => self.shift_hours_a,
            DriverCategory::B => self.shift_hours_b,
        }
    }

    /// Shift cap in minutes for a category.
    pub fn cap_minutes(&self, category: DriverCategory) -> u32 {
        self.shift_hours(category) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let p = SchedulePolicy::default();
        assert_eq!(p.travel_minutes, 60);
        assert_eq!(p.break_minutes, 10);
        assert_eq!(p.min_rest_minutes, 30);
        assert_eq!(p.cap_minutes(DriverCategory::A), 480);
        assert_eq!(p.cap_minutes(DriverCategory::B), 720);
    }

    #[test]
    fn test_policy_builder() {
        let p = SchedulePolicy::new()
            .with_travel_minutes(45)
            .with_break_minutes(5)
            .with_min_rest_minutes(20);
        assert_eq!(p.travel_minutes, 45);
        assert_eq!(p.break_minutes, 5);
        assert_eq!(p.min_rest_minutes, 20);
    }
}
