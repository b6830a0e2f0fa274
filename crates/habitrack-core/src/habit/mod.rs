//! Habits, their periodicity, and streak calculation.

pub(crate) mod format;
mod model;
mod periodicity;
mod streak;

pub use model::Habit;
pub use periodicity::Periodicity;
pub use streak::consecutive_periods;
