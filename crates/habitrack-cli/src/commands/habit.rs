//! Habit commands for CLI.

use std::path::Path;

use clap::Args;
use habitrack_core::{Habit, HabitStore, Periodicity, ValidationError};

#[derive(Args)]
pub struct AddArgs {
    /// Habit name
    name: String,
    /// Habit description
    #[arg(long, default_value = "")]
    description: String,
    /// Periodicity: daily or weekly (default: daily)
    #[arg(long, default_value = "daily")]
    periodicity: String,
}

pub fn add(store: &mut HabitStore, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    let periodicity: Periodicity = args.periodicity.parse()?;

    let habit = Habit::new(name, args.description, periodicity, store.clock());
    store.add(habit)?;
    println!("{name} habit added and saved to the file.");
    Ok(())
}

pub fn delete(store: &mut HabitStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if store.delete(name) == 0 {
        println!("{name} habit not found.");
        return Ok(());
    }
    store.save()?;
    println!("{name} habit deleted.");
    Ok(())
}

pub fn complete(store: &mut HabitStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    match store.complete(name) {
        Some(true) => {
            store.save()?;
            println!("Task for {name} habit completed.");
        }
        Some(false) => {
            println!(
                "You have already completed the task for {}.",
                store.clock().today()
            );
        }
        None => {
            eprintln!("{name} habit not found.");
            std::process::exit(1);
        }
    }
    Ok(())
}

pub fn list(
    store: &mut HabitStore,
    periodicity: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let habits: Vec<&Habit> = match periodicity {
        Some(raw) => store.list_by_periodicity(raw.parse()?),
        None => store.list_all()?.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&habits)?);
        return Ok(());
    }

    match periodicity {
        Some(raw) => println!("Habits with {} periodicity:", raw.trim().to_ascii_lowercase()),
        None => println!("All Habits:"),
    }
    for habit in habits {
        println!("{habit}");
    }
    Ok(())
}

pub fn save(store: &HabitStore, to: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match to {
        Some(path) => {
            store.save_to(path)?;
            println!("Data saved to {}.", path.display());
        }
        None => {
            store.save()?;
            println!("Data saved to file.");
        }
    }
    Ok(())
}
