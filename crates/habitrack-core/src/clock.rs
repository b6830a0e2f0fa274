//! Time source used by habits and the store.
//!
//! Everything that depends on "today" or "now" goes through a [`Clock`] so
//! that streak and staleness behavior can be exercised for any calendar date.

use std::sync::Mutex;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Supplies the current local timestamp and calendar date.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant until moved with [`FixedClock::set`].
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Frozen at noon on `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(
            date.and_hms_opt(12, 0, 0)
                .unwrap_or_else(|| date.and_time(NaiveTime::MIN)),
        )
    }

    pub fn set(&self, now: NaiveDateTime) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard = now;
    }

    /// Move the clock forward by whole days.
    pub fn advance_days(&self, days: i64) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard += chrono::Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
