mod config;
mod store;

pub use config::{Config, LoggingConfig, StoreConfig};
pub use store::HabitStore;

use std::path::PathBuf;

use crate::error::Result;

/// Returns the Habitrack data directory, creating it if needed.
///
/// `HABITRACK_HOME` overrides the location. Otherwise this is
/// `~/.config/habitrack/`, or `~/.config/habitrack-dev/` when
/// `HABITRACK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("HABITRACK_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITRACK_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habitrack-dev")
            } else {
                base_dir.join("habitrack")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
