//! Sample habits written on first run.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::error::{CoreError, Result};
use crate::habit::format::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::habit::{Habit, Periodicity};
use crate::storage::HabitStore;

struct Sample {
    name: &'static str,
    description: &'static str,
    periodicity: Periodicity,
    created_date: &'static str,
    completions: [&'static str; 3],
}

const SAMPLES: [Sample; 5] = [
    Sample {
        name: "Drink Water",
        description: "Drink 8 glasses of water daily.",
        periodicity: Periodicity::Daily,
        created_date: "2023-01-01",
        completions: ["2023-01-01 08:00:00", "2023-01-02 09:30:00", "2023-01-03 07:45:00"],
    },
    Sample {
        name: "Exercise",
        description: "Exercise for 30 minutes daily.",
        periodicity: Periodicity::Daily,
        created_date: "2023-01-01",
        completions: ["2023-01-01 10:00:00", "2023-01-02 09:30:00", "2023-01-03 10:30:00"],
    },
    Sample {
        name: "Reading",
        description: "Read for 1 hour daily.",
        periodicity: Periodicity::Daily,
        created_date: "2023-01-01",
        completions: ["2023-01-01 18:00:00", "2023-01-02 19:30:00", "2023-01-03 17:45:00"],
    },
    Sample {
        name: "Learn a new Language",
        description: "Spend 2 hours weekly on learning a new language",
        periodicity: Periodicity::Weekly,
        created_date: "2023-01-01",
        completions: ["2023-01-08 07:00:00", "2023-01-15 08:30:00", "2023-01-22 09:45:00"],
    },
    Sample {
        name: "Gratitude Journaling",
        description: "Write in your gratitude journal for 15 minutes daily.",
        periodicity: Periodicity::Daily,
        created_date: "2023-01-01",
        completions: ["2023-01-01 06:00:00", "2023-01-02 06:30:00", "2023-01-03 07:00:00"],
    },
];

fn parse_sample(sample: &Sample) -> Result<Habit> {
    let bad = |value: &str| CoreError::Custom(format!("bad sample value '{value}' for {}", sample.name));

    let created_date = NaiveDate::parse_from_str(sample.created_date, DATE_FORMAT)
        .map_err(|_| bad(sample.created_date))?;
    let completions = sample
        .completions
        .iter()
        .map(|&raw| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(|_| bad(raw)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Habit::from_parts(
        sample.name,
        sample.description,
        sample.periodicity,
        created_date,
        completions,
    ))
}

/// The five sample habits with their example history.
pub fn predefined_habits() -> Result<Vec<Habit>> {
    SAMPLES.iter().map(parse_sample).collect()
}

/// Populate the store with the sample habits when its file does not exist yet.
///
/// Returns whether anything was written.
pub fn seed_if_missing(store: &mut HabitStore) -> Result<bool> {
    if store.path().exists() {
        return Ok(false);
    }

    for habit in predefined_habits()? {
        store.add(habit)?;
    }
    store.save()?;
    info!(path = %store.path().display(), habits = store.len(), "seeded sample habits");
    Ok(true)
}
