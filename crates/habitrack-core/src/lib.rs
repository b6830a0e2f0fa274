//! # Habitrack Core Library
//!
//! This library provides the core logic for Habitrack, a tracker for daily and
//! weekly habits. All operations are available through the `habitrack` CLI,
//! which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Habits**: a habit carries its periodicity and completion history and
//!   computes its streak from that history
//! - **Storage**: a JSON store file rewritten as a whole on every save, plus
//!   TOML-based configuration
//! - **Clock**: every "today" and "now" comes from an injected [`Clock`]
//!
//! ## Key Components
//!
//! - [`Habit`]: habit entity and streak calculation
//! - [`HabitStore`]: habit collection, persistence and the stale-streak rule
//! - [`Config`]: Application configuration management

pub mod clock;
pub mod error;
pub mod habit;
pub mod seed;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, ValidationError};
pub use habit::{Habit, Periodicity};
pub use storage::{Config, HabitStore};
