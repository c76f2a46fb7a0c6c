//! Free-slot discovery for the randomized fallback allocator.
//!
//! For each driver, sorts the normalized busy intervals and walks the
//! gaps between them (and before the first / after the last) inside the
//! work window. A gap qualifies only if it can host a route plus its
//! break. The result is a discovery structure consumed by the fallback
//! allocator, not itself an assignment.

use serde::{Deserialize, Serialize};

use crate::ledger::DriverLedger;
use crate::models::{ClockTime, Driver, TimeInterval, WorkWindow};

/// A gap in one driver's bookings large enough to host a route plus
/// its break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// Driver whose bookings this gap lies between.
    pub driver_id: String,
    /// Gap start.
    pub start: ClockTime,
    /// Gap end.
    pub end: ClockTime,
}

impl FreeSlot {
    /// The gap as a wraparound-safe interval.
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }
}

/// Collects qualifying gaps across all rostered drivers.
///
/// `required_minutes` is the route duration plus the break; shorter gaps
/// are never returned.
pub fn free_slots(
    roster: &[Driver],
    ledger: &DriverLedger,
    required_minutes: u32,
) -> Vec<FreeSlot> {
    let mut slots = Vec::new();

    for driver in roster {
        let mut periods: Vec<(u32, u32)> = ledger
            .busy_intervals(&driver.id)
            .iter()
            .map(TimeInterval::normalized)
            .collect();
        periods.sort_by_key(|&(start, _)| start);

        let mut cursor = WorkWindow::start_minutes();
        for &(start, end) in &periods {
            if start >= cursor + required_minutes {
                slots.push(FreeSlot {
                    driver_id: driver.id.clone(),
                    start: ClockTime::from_minutes(cursor),
                    end: ClockTime::from_minutes(start),
                });
            }
            cursor = end;
        }
        if WorkWindow::end_minutes() >= cursor + required_minutes {
            slots.push(FreeSlot {
                driver_id: driver.id.clone(),
                start: ClockTime::from_minutes(cursor),
                end: WorkWindow::end(),
            });
        }
    }

    slots
}
