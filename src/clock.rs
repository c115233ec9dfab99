//!
//! Source for the current date.
//!

use chrono::{Local, NaiveDate};
use std::fmt::Debug;

/// Supplies today's date for "go to today" and for the initial
/// state of a picker.
pub trait Clock: Debug {
    /// Today at midnight.
    fn today(&self) -> NaiveDate;
}

/// Uses the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
