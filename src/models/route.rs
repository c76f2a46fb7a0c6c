//! Route kinds and route assignments.
//!
//! A route is one scheduled trip: a kind (one-way or round trip), a
//! driver, and a time interval. Routes whose placement would exceed the
//! work window are flagged as extra trips and placed by the fallback
//! allocator instead of in-order.

use rand::prelude::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::time::{ClockTime, TimeInterval};

/// Kind of trip a route represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteKind {
    /// To the terminus only.
    OneWay,
    /// To the terminus and back; doubles the travel time.
    RoundTrip,
}

impl RouteKind {
    const ALL: [RouteKind; 2] = [RouteKind::OneWay, RouteKind::RoundTrip];

    /// Whether this kind doubles the base travel duration.
    pub const fn is_round_trip(self) -> bool {
        matches!(self, RouteKind::RoundTrip)
    }

    /// Actual travel minutes for this kind given the base duration.
    pub const fn travel_minutes(self, base_minutes: u32) -> u32 {
        if self.is_round_trip() {
            base_minutes * 2
        } else {
            base_minutes
        }
    }

    /// Picks a kind uniformly at random.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&RouteKind::OneWay)
    }
}

/// One placed route: driver, kind, time span, and the driver's route
/// ordinal for the shift.
///
/// Created only by the scheduler components and immutable once appended
/// to a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAssignment {
    /// Assigned driver ID.
    pub driver_id: String,
    /// Trip kind.
    pub kind: RouteKind,
    /// Whether this route was placed outside the nominal work window.
    pub extra_trip: bool,
    /// Departure time.
    pub start: ClockTime,
    /// Completion time. May precede `start` on the clock face.
    pub end: ClockTime,
    /// How many routes this driver has taken so far in the run,
    /// including this one.
    pub ordinal: u32,
}

impl RouteAssignment {
    /// Creates an assignment covering the given interval.
    pub fn new(
        driver_id: impl Into<String>,
        kind: RouteKind,
        interval: TimeInterval,
        ordinal: u32,
    ) -> Self {
        Self {
            driver_id: driver_id.into(),
            kind,
            extra_trip: false,
            start: interval.start,
            end: interval.end,
            ordinal,
        }
    }

    /// Marks the assignment as an extra trip.
    pub fn as_extra_trip(mut self) -> Self {
        self.extra_trip = true;
        self
    }

    /// The occupied time interval.
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    /// Route duration in minutes after wraparound adjustment.
    pub fn duration_minutes(&self) -> u32 {
        self.interval().duration_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_travel_minutes_doubled() {
        assert_eq!(RouteKind::OneWay.travel_minutes(60), 60);
        assert_eq!(RouteKind::RoundTrip.travel_minutes(60), 120);
        assert!(RouteKind::RoundTrip.is_round_trip());
        assert!(!RouteKind::OneWay.is_round_trip());
    }

    #[test]
    fn test_pick_covers_both_kinds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen_one_way = false;
        let mut seen_round = false;
        for _ in 0..50 {
            match RouteKind::pick(&mut rng) {
                RouteKind::OneWay => seen_one_way = true,
                RouteKind::RoundTrip => seen_round = true,
            }
        }
        assert!(seen_one_way && seen_round);
    }

    #[test]
    fn test_assignment_interval() {
        let interval = TimeInterval::with_duration(ClockTime::from_hm(23, 30), 120);
        let a = RouteAssignment::new("d1", RouteKind::RoundTrip, interval, 3).as_extra_trip();

        assert_eq!(a.driver_id, "d1");
        assert!(a.extra_trip);
        assert_eq!(a.ordinal, 3);
        assert_eq!(a.start, ClockTime::from_hm(23, 30));
        assert_eq!(a.end, ClockTime::from_hm(1, 30));
        assert_eq!(a.duration_minutes(), 120);
    }

    #[test]
    fn test_assignment_serde() {
        let interval = TimeInterval::with_duration(ClockTime::from_hm(6, 0), 60);
        let a = RouteAssignment::new("d1", RouteKind::OneWay, interval, 1);
        let json = serde_json::to_string(&a).unwrap();
        let back: RouteAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
