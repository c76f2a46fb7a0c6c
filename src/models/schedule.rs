//! Schedule (solution) model.
//!
//! A schedule is the ordered list of route assignments produced by one
//! scheduling run. The per-driver ledger that guided construction is not
//! part of the returned schedule; only the assignment list and its
//! aggregate fitness survive into the optimizer's population.

use serde::{Deserialize, Serialize};

use super::route::RouteAssignment;

/// An ordered sequence of route assignments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments in placement order.
    pub assignments: Vec<RouteAssignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: RouteAssignment) {
        self.assignments.push(assignment);
    }

    /// Number of placed routes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no routes were placed.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of placed routes; the genetic optimizer's sole
    /// optimization signal.
    pub fn fitness(&self) -> usize {
        self.len()
    }

    /// Iterates over assignments in placement order.
    pub fn iter(&self) -> std::slice::Iter<'_, RouteAssignment> {
        self.assignments.iter()
    }

    /// Returns all assignments for a given driver.
    pub fn assignments_for_driver(&self, driver_id: &str) -> Vec<&RouteAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.driver_id == driver_id)
            .collect()
    }

    /// Number of routes assigned to a given driver.
    pub fn route_count_for(&self, driver_id: &str) -> usize {
        self.assignments
            .iter()
            .filter(|a| a.driver_id == driver_id)
            .count()
    }

    /// Number of extra-trip routes.
    pub fn extra_trip_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.extra_trip).count()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a RouteAssignment;
    type IntoIter = std::slice::Iter<'a, RouteAssignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::route::RouteKind;
    use crate::models::time::{ClockTime, TimeInterval};

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.push(RouteAssignment::new(
            "d1",
            RouteKind::OneWay,
            TimeInterval::with_duration(ClockTime::from_hm(6, 0), 60),
            1,
        ));
        s.push(RouteAssignment::new(
            "d2",
            RouteKind::RoundTrip,
            TimeInterval::with_duration(ClockTime::from_hm(7, 40), 120),
            1,
        ));
        s.push(
            RouteAssignment::new(
                "d1",
                RouteKind::OneWay,
                TimeInterval::with_duration(ClockTime::from_hm(2, 0), 60),
                2,
            )
            .as_extra_trip(),
        );
        s
    }

    #[test]
    fn test_fitness_is_route_count() {
        let s = sample_schedule();
        assert_eq!(s.len(), 3);
        assert_eq!(s.fitness(), 3);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_per_driver_queries() {
        let s = sample_schedule();
        assert_eq!(s.route_count_for("d1"), 2);
        assert_eq!(s.route_count_for("d2"), 1);
        assert_eq!(s.route_count_for("absent"), 0);
        assert_eq!(s.assignments_for_driver("d1").len(), 2);
    }

    #[test]
    fn test_extra_trip_count() {
        let s = sample_schedule();
        assert_eq!(s.extra_trip_count(), 1);
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert!(s.is_empty());
        assert_eq!(s.fitness(), 0);
    }

    #[test]
    fn test_schedule_serde() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
