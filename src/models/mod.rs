//! Scheduling domain models.
//!
//! Core data types for the overnight rostering problem: wall-clock
//! times and wraparound-safe intervals, the driver roster, route
//! assignments, run-level policy constants, and the schedule that a
//! run returns to the caller.

mod driver;
mod policy;
mod route;
mod schedule;
mod time;

pub use driver::{Driver, DriverCategory, Weekday};
pub use policy::SchedulePolicy;
pub use route::{RouteAssignment, RouteKind};
pub use schedule::Schedule;
pub use time::{ClockTime, ParseClockTimeError, TimeInterval, WorkWindow, MINUTES_PER_DAY};
