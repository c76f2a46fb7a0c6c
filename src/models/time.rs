//! Clock times, wraparound-safe intervals, and the overnight work window.
//!
//! # Time Model
//!
//! All times are wall-clock minutes within a single day cycle. The work
//! window runs from 06:00 to 03:00 the following day, so raw `"HH:MM"`
//! ordering is invalid across midnight. Every interval comparison must go
//! through [`TimeInterval::normalized`], which maps an interval whose end
//! precedes its start onto the next day (end + 24h).
//!
//! Normalized values are minute offsets from the scheduling day's midnight;
//! offsets ≥ 1440 denote the following day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// Displayed and parsed as `"HH:MM"`. Arithmetic wraps at 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime(u16);

/// Failure to parse an `"HH:MM"` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time '{0}', expected HH:MM")]
pub struct ParseClockTimeError(String);

impl ClockTime {
    /// Creates a time from hours and minutes. Wraps at 24h.
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(((hours * 60 + minutes) % MINUTES_PER_DAY) as u16)
    }

    /// Creates a time from a minute offset, wrapping at 24h.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    /// Minutes since midnight (0..1440).
    #[inline]
    pub const fn minutes(self) -> u32 {
        self.0 as u32
    }

    /// Hour component (0..24).
    #[inline]
    pub const fn hour(self) -> u32 {
        self.0 as u32 / 60
    }

    /// Minute component (0..60).
    #[inline]
    pub const fn minute(self) -> u32 {
        self.0 as u32 % 60
    }

    /// Advances the time by `n` minutes, wrapping past midnight.
    pub const fn add_minutes(self, n: u32) -> Self {
        Self::from_minutes(self.0 as u32 + (n % MINUTES_PER_DAY))
    }

    /// Shifts the time by a signed minute offset, wrapping in both directions.
    pub fn add_signed(self, n: i32) -> Self {
        let shifted = (self.0 as i32 + n).rem_euclid(MINUTES_PER_DAY as i32);
        Self(shifted as u16)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hours: u32 = h.parse().map_err(|_| err())?;
        let minutes: u32 = m.parse().map_err(|_| err())?;
        if hours >= 24 || minutes >= 60 {
            return Err(err());
        }
        Ok(Self::from_hm(hours, minutes))
    }
}

/// A busy or free interval of wall-clock time.
///
/// `end < start` denotes wraparound past midnight. Comparisons are
/// half-open on normalized offsets: touching endpoints do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Interval start.
    pub start: ClockTime,
    /// Interval end. May precede `start` on the clock face.
    pub end: ClockTime,
}

impl TimeInterval {
    /// Creates an interval from start and end times.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Creates an interval covering `minutes` starting at `start`.
    pub fn with_duration(start: ClockTime, minutes: u32) -> Self {
        Self {
            start,
            end: start.add_minutes(minutes),
        }
    }

    /// Normalizes to (start, end) minute offsets, adding 24h to the end
    /// when it precedes the start.
    pub fn normalized(&self) -> (u32, u32) {
        let start = self.start.minutes();
        let mut end = self.end.minutes();
        if end < start {
            end += MINUTES_PER_DAY;
        }
        (start, end)
    }

    /// Interval length in minutes after wraparound adjustment.
    pub fn duration_minutes(&self) -> u32 {
        let (start, end) = self.normalized();
        end - start
    }

    /// Half-open intersection test on normalized offsets.
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a_start, a_end) = self.normalized();
        let (b_start, b_end) = other.normalized();
        a_start < b_end && a_end > b_start
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The nominal overnight work window: 06:00 to 03:00 the next day.
///
/// All scheduling activity must fit inside it; routes flagged "extra trip"
/// are the sole mechanism allowed to exceed it.
#[derive(Debug, Clone, Copy)]
pub struct WorkWindow;

impl WorkWindow {
    /// Window opening time (06:00).
    pub const fn start() -> ClockTime {
        ClockTime::from_hm(6, 0)
    }

    /// Window closing time on the clock face (03:00 next day).
    pub const fn end() -> ClockTime {
        ClockTime::from_hm(3, 0)
    }

    /// Normalized minute offset of the window opening.
    pub const fn start_minutes() -> u32 {
        Self::start().minutes()
    }

    /// Normalized minute offset of the window close (03:00 + 24h).
    pub const fn end_minutes() -> u32 {
        Self::end().minutes() + MINUTES_PER_DAY
    }

    /// Whether a normalized interval end still fits inside the window.
    pub fn fits(end_minutes: u32) -> bool {
        end_minutes <= Self::end_minutes()
    }
}
