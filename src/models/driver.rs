//! Driver roster model.
//!
//! Drivers are supplied by the caller; the scheduling core never creates
//! or destroys them, it only reads identity and category. Category A
//! drivers carry an 8-hour shift cap and do not work weekends; category B
//! drivers carry a 12-hour cap and work every day.

use serde::{Deserialize, Serialize};

/// Driver classification, governing shift cap and weekend availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverCategory {
    /// 8-hour cap, weekdays only.
    A,
    /// 12-hour cap, works every day.
    B,
}

impl DriverCategory {
    /// Whether drivers of this category are available on weekend days.
    pub const fn works_weekends(self) -> bool {
        matches!(self, DriverCategory::B)
    }

    /// Default shift length in hours (8 for A, 12 for B).
    pub const fn default_shift_hours(self) -> u32 {
        match self {
            DriverCategory::A => 8,
            DriverCategory::B => 12,
        }
    }
}

/// A rostered driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver identifier within a scheduling run.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Driver classification.
    pub category: DriverCategory,
}

impl Driver {
    /// Creates a driver with the given ID and category.
    pub fn new(id: impl Into<String>, category: DriverCategory) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            category,
        }
    }

    /// Creates a category-A driver.
    pub fn category_a(id: impl Into<String>) -> Self {
        Self::new(id, DriverCategory::A)
    }

    /// Creates a category-B driver.
    pub fn category_b(id: impl Into<String>) -> Self {
        Self::new(id, DriverCategory::B)
    }

    /// Sets the driver name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether this driver may take routes on the given day.
    pub fn available_on(&self, day: Weekday) -> bool {
        !day.is_weekend() || self.category.works_weekends()
    }
}

/// Day of the week selected for a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Whether this is a weekend day (Saturday or Sunday).
    pub const fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}
