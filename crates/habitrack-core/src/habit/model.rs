use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::format;
use super::periodicity::Periodicity;
use super::streak::consecutive_periods;
use crate::clock::Clock;

/// A recurring habit and its completion history.
///
/// Field order here is the field order of the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    name: String,
    description: String,
    periodicity: Periodicity,
    #[serde(with = "format::date")]
    created_date: NaiveDate,
    #[serde(with = "format::timestamps")]
    completions: Vec<NaiveDateTime>,
}

impl Habit {
    /// Create a habit dated today with no completions.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        periodicity: Periodicity,
        clock: &dyn Clock,
    ) -> Self {
        Self::from_parts(name, description, periodicity, clock.today(), Vec::new())
    }

    /// Rebuild a habit from stored values. Completions are kept in the given order.
    pub fn from_parts(
        name: impl Into<String>,
        description: impl Into<String>,
        periodicity: Periodicity,
        created_date: NaiveDate,
        completions: Vec<NaiveDateTime>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            periodicity,
            created_date,
            completions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    pub fn completions(&self) -> &[NaiveDateTime] {
        &self.completions
    }

    /// Most recently stored completion, which is the last entry rather than the latest timestamp.
    pub fn last_completion(&self) -> Option<NaiveDateTime> {
        self.completions.last().copied()
    }

    /// Replace the whole completion history.
    pub fn set_completions(&mut self, completions: Vec<NaiveDateTime>) {
        self.completions = completions;
    }

    /// Record a completion for now.
    ///
    /// Returns `false` without touching the history when the last completion
    /// already falls on today. Only the last entry is consulted, so a history
    /// stored out of order can make this accept or reject incorrectly.
    pub fn complete_task(&mut self, clock: &dyn Clock) -> bool {
        let now = clock.now().trunc_subsecs(0);
        if self
            .last_completion()
            .is_some_and(|last| last.date() == now.date())
        {
            return false;
        }
        self.completions.push(now);
        true
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completions.iter().any(|c| c.date() == date)
    }

    /// Number of consecutive periods ending at the most recent completion.
    ///
    /// Whether that completion is still current is not checked here; see
    /// [`Habit::reset_if_stale`].
    pub fn streak(&self) -> u32 {
        consecutive_periods(
            self.completions.iter().rev().map(NaiveDateTime::date),
            self.periodicity.interval(),
        )
    }

    /// Clear the history when the last completion is dated before `today`.
    ///
    /// Returns whether the history was cleared.
    pub fn reset_if_stale(&mut self, today: NaiveDate) -> bool {
        match self.last_completion() {
            Some(last) if last.date() < today => {
                self.completions.clear();
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let streak = self.streak();
        write!(
            f,
            "{} ({}): {} | created {} | {} completion(s) | streak {} {}",
            self.name,
            self.periodicity,
            self.description,
            self.created_date.format(format::DATE_FORMAT),
            self.completions.len(),
            streak,
            self.periodicity.unit(streak),
        )
    }
}
