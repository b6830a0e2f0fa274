use habitrack_core::HabitStore;

pub fn run(store: &HabitStore, name: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match name {
        Some(name) => {
            // Unknown habits report 0 like habits with no streak.
            let streak = store.longest_streak_for(name);
            let unit = store
                .get(name)
                .map(|h| h.periodicity().unit(streak))
                .unwrap_or("days");
            println!("Longest streak for {name}: {streak} {unit}");
        }
        None => {
            let streak = store.longest_streak();
            println!("Longest streak: {streak} days");
        }
    }
    Ok(())
}
