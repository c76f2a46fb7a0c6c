//! Greedy scheduling and staffing estimation.
//!
//! # Algorithm
//!
//! [`DirectScheduler`] places routes back-to-back in route order,
//! spilling window-boundary conflicts into flagged extra trips via a
//! bounded randomized slot search. [`staffing`] provides the
//! ceiling-division pre-flight estimate used for admission control.

mod direct;
pub mod staffing;

pub use direct::{DirectScheduler, ScheduleRequest};
