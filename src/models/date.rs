//! Display dates

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A day/month/year triple rendered as `d/m/y`.
///
/// No calendar validation happens here: `Date::new(40, 13, -1)` is kept and
/// printed as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Current local calendar date
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day() as i32,
            month: date.month() as i32,
            year: date.year(),
        }
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}
