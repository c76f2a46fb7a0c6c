//! Run-level error type.
//!
//! Every kind is recoverable at the caller level: the presentation layer
//! surfaces the message and lets the user retry with different inputs.

use thiserror::Error;

/// Why a scheduling run was rejected or aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Out-of-range route count, duration, or roster supplied.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The pre-flight estimate shows too few drivers for the requested
    /// route count and shift length.
    #[error("not enough drivers: add at least {needed} more or reduce the route count")]
    StaffingShortfall {
        /// How many additional drivers the estimator requires.
        needed: u32,
    },

    /// Weekend day with no category-B drivers; category A cannot work
    /// weekends.
    #[error("weekend day with no category-B drivers on the roster")]
    WeekendStaffingGap,

    /// No driver/time-slot combination could be found within the retry
    /// budget. Partial schedules are never returned as a success.
    #[error("no feasible assignment found: add drivers or reduce the route count")]
    Infeasible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_remedy() {
        let e = ScheduleError::StaffingShortfall { needed: 3 };
        assert!(e.to_string().contains("3"));

        let e = ScheduleError::Infeasible;
        assert!(e.to_string().contains("add drivers"));

        let e = ScheduleError::InvalidInput("route count must be positive".into());
        assert!(e.to_string().contains("route count"));
    }
}
