pub mod completions;
pub mod config;
pub mod habit;
pub mod streak;

use std::sync::Arc;

use habitrack_core::{seed, Config, HabitStore, SystemClock};

/// Open the configured store, seeding the sample habits on first run.
pub fn open_store(config: &Config) -> Result<HabitStore, Box<dyn std::error::Error>> {
    let path = config.store_path()?;
    tracing::debug!(path = %path.display(), "opening habit store");
    let mut store = HabitStore::open(path, Arc::new(SystemClock))?;
    if config.store.seed_predefined {
        seed::seed_if_missing(&mut store)?;
    }
    Ok(store)
}
