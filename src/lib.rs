//! Overnight driver rostering for fixed-duration transit routes.
//!
//! Builds one-day duty rosters for a depot running identical routes
//! inside a 06:00-to-03:00 service window, under per-category shift
//! caps, mandatory rest between consecutive duties, and weekend
//! availability rules.
//!
//! # Modules
//!
//! - [`models`] - clock times, intervals, drivers, routes, policy
//!   constants, and the schedule itself
//! - [`ledger`] - per-driver booking state accumulated during a run
//! - [`feasibility`] - the single assignment-legality predicate
//! - [`slots`] - free-interval discovery over booked time
//! - [`validation`] - pre-flight admission checks
//! - [`scheduler`] - greedy placement with a randomized fallback, and
//!   the staffing estimator
//! - [`ga`] - population-based best-effort optimization
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use route_roster::models::{Driver, Weekday};
//! use route_roster::scheduler::{DirectScheduler, ScheduleRequest};
//!
//! let roster = vec![
//!     Driver::category_a("anna"),
//!     Driver::category_b("boris"),
//!     Driver::category_b("vera"),
//! ];
//! let request = ScheduleRequest::new(roster, Weekday::Tuesday, 6);
//! let mut rng = SmallRng::seed_from_u64(42);
//!
//! let schedule = DirectScheduler::new().run(&request, &mut rng)?;
//! assert_eq!(schedule.len(), 6);
//! # Ok::<(), route_roster::ScheduleError>(())
//! ```

pub mod error;
pub mod feasibility;
pub mod ga;
pub mod ledger;
pub mod models;
pub mod scheduler;
pub mod slots;
pub mod validation;

pub use error::ScheduleError;
