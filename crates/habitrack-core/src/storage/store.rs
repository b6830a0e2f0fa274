//! JSON-file-backed habit collection.
//!
//! The whole collection is rewritten on every save. The store assumes it is
//! the only writer of its file; there is no locking and the last save wins.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::Result;
use crate::habit::{Habit, Periodicity};

/// The habit collection and its canonical store file.
pub struct HabitStore {
    path: PathBuf,
    habits: Vec<Habit>,
    clock: Arc<dyn Clock>,
}

impl HabitStore {
    /// Empty store bound to `path`. Nothing is read until [`HabitStore::load`].
    pub fn new(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            path: path.into(),
            habits: Vec::new(),
            clock,
        }
    }

    /// Store bound to `path` with its current file contents loaded.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut store = Self::new(path, clock);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// In-memory habits, without touching the file.
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Append a habit and immediately rewrite the store file.
    ///
    /// Names are not checked for uniqueness.
    pub fn add(&mut self, habit: Habit) -> Result<()> {
        debug!(name = habit.name(), periodicity = %habit.periodicity(), "adding habit");
        self.habits.push(habit);
        self.save()
    }

    /// Remove every habit named `name`. Returns how many were removed.
    ///
    /// The file is not rewritten; call [`HabitStore::save`] to persist.
    pub fn delete(&mut self, name: &str) -> usize {
        let before = self.habits.len();
        self.habits.retain(|h| h.name() != name);
        let removed = before - self.habits.len();
        debug!(name, removed, "deleted habits");
        removed
    }

    /// First habit named `name`.
    pub fn get(&self, name: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.name() == name)
    }

    /// Complete today's task for `name`.
    ///
    /// `None` when no such habit exists, otherwise the result of
    /// [`Habit::complete_task`]. Not persisted.
    pub fn complete(&mut self, name: &str) -> Option<bool> {
        let clock = Arc::clone(&self.clock);
        self.get_mut(name).map(|h| h.complete_task(clock.as_ref()))
    }

    /// Reload from the store file, discarding unsaved changes.
    ///
    /// Returns whether the file existed.
    pub fn refresh(&mut self) -> Result<bool> {
        self.load()
    }

    /// Reload from the store file, then return every habit.
    ///
    /// Unsaved deletions and completions are lost, and stale histories
    /// are cleared by the reload.
    pub fn list_all(&mut self) -> Result<&[Habit]> {
        self.refresh()?;
        Ok(self.habits())
    }

    /// In-memory habits with the given periodicity.
    pub fn list_by_periodicity(&self, periodicity: Periodicity) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|h| h.periodicity() == periodicity)
            .collect()
    }

    /// Longest streak among in-memory habits, 0 when there are none.
    pub fn longest_streak(&self) -> u32 {
        self.habits.iter().map(Habit::streak).max().unwrap_or(0)
    }

    /// Streak of the habit named `name`, 0 when there is no such habit.
    pub fn longest_streak_for(&self, name: &str) -> u32 {
        self.get(name).map(Habit::streak).unwrap_or(0)
    }

    /// Rewrite the store file with the whole collection.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// Write the whole collection to `path`, replacing its contents.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.habits)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), habits = self.habits.len(), "saved habits");
        Ok(())
    }

    /// Replace the collection with the store file's contents.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.path.clone();
        self.load_from(&path)
    }

    /// Replace the collection with the contents of `path`.
    ///
    /// A missing file leaves the collection untouched and returns `false`.
    /// Every loaded habit whose last completion is before today has its
    /// history cleared. A malformed file fails the whole load and leaves the
    /// collection untouched.
    pub fn load_from(&mut self, path: &Path) -> Result<bool> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no store file, keeping current habits");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        let mut habits: Vec<Habit> = serde_json::from_str(&content)?;
        let today = self.clock.today();
        for habit in &mut habits {
            let streak = habit.streak();
            if habit.reset_if_stale(today) {
                info!(name = habit.name(), streak, %today, "streak lapsed, completions cleared");
            }
        }

        debug!(path = %path.display(), habits = habits.len(), "loaded habits");
        self.habits = habits;
        Ok(true)
    }
}
