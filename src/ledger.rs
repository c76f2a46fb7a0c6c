//! Per-driver booking ledger for one scheduling attempt.
//!
//! Tracks, for each driver, the busy intervals recorded so far (in
//! insertion order), cumulative worked minutes, and the route count.
//! The ledger is append-only: schedules are built forward, never
//! unwound. Each greedy run or genetic individual owns a fresh ledger;
//! it is discarded once the attempt's schedule is finalized.

use std::collections::HashMap;

use crate::models::{Driver, TimeInterval};

/// Per-driver busy intervals, worked minutes, and route counts.
#[derive(Debug, Clone, Default)]
pub struct DriverLedger {
    entries: HashMap<String, DriverLog>,
}

#[derive(Debug, Clone, Default)]
struct DriverLog {
    busy: Vec<TimeInterval>,
    worked_minutes: u32,
    routes: u32,
}

impl DriverLedger {
    /// Creates a ledger with an empty log for every rostered driver.
    pub fn new(roster: &[Driver]) -> Self {
        let entries = roster
            .iter()
            .map(|d| (d.id.clone(), DriverLog::default()))
            .collect();
        Self { entries }
    }

    /// Busy intervals recorded for a driver, in insertion order.
    pub fn busy_intervals(&self, driver_id: &str) -> &[TimeInterval] {
        self.entries
            .get(driver_id)
            .map(|log| log.busy.as_slice())
            .unwrap_or(&[])
    }

    /// Cumulative worked minutes recorded for a driver.
    pub fn worked_minutes(&self, driver_id: &str) -> u32 {
        self.entries
            .get(driver_id)
            .map(|log| log.worked_minutes)
            .unwrap_or(0)
    }

    /// Number of routes recorded for a driver.
    pub fn route_count(&self, driver_id: &str) -> u32 {
        self.entries
            .get(driver_id)
            .map(|log| log.routes)
            .unwrap_or(0)
    }

    /// Records an assignment: appends the busy interval and adds the
    /// worked minutes and one route to the driver's totals.
    pub fn record(&mut self, driver_id: &str, interval: TimeInterval, minutes: u32) {
        let log = self.entries.entry(driver_id.to_string()).or_default();
        log.busy.push(interval);
        log.worked_minutes += minutes;
        log.routes += 1;
    }
}
