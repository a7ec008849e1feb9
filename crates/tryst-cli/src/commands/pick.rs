use tryst_core::route::results_path;
use tryst_core::{Category, ScheduleSlot};

use crate::cli::{Cli, PickArgs};
use crate::errors::CliError;
use crate::output::categories_text;
use crate::store::{JsonFileStore, SelectionStore};

pub fn handle_pick(cli: &Cli, args: &PickArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::open(cli)?;

    if args.reset {
        store.clear()?;
        if !cli.quiet {
            println!("Cleared saved selections.");
        }
        return Ok(());
    }

    if args.categories.is_empty() && args.schedule.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to pick. Pass categories, --schedule, or --reset.",
        )
        .into());
    }

    let mut selection = store.load().unwrap_or_default();

    for token in &args.categories {
        let category = Category::from_token(token).ok_or_else(|| {
            CliError::invalid_input(format!(
                "Unknown category: {} (use hiking, movie, coffee, or dinner)",
                token
            ))
        })?;
        // Picking an already-picked category unpicks it.
        let existing = selection
            .categories
            .iter()
            .position(|name| Category::from_token(name) == Some(category));
        match existing {
            Some(index) => {
                selection.categories.remove(index);
            }
            None => selection
                .categories
                .push(category.display_name().to_string()),
        }
    }

    if let Some(value) = &args.schedule {
        let slot = ScheduleSlot::from_display(value)
            .or_else(|| ScheduleSlot::from_slug(value))
            .ok_or_else(|| {
                CliError::invalid_input(format!(
                    "Unknown schedule: {} (e.g. \"Friday 7:00 PM\" or friday-7pm)",
                    value
                ))
            })?;
        selection.schedule = slot.display_text().to_string();
    }

    store.save(&selection)?;

    if !cli.quiet {
        if selection.schedule.is_empty() {
            println!("Saved: {} (no schedule yet)", categories_text(&selection));
        } else {
            println!(
                "Saved: {} on {}",
                categories_text(&selection),
                selection.schedule
            );
            println!(
                "Link: {}",
                results_path(&selection.categories, &selection.schedule)
            );
        }
    }

    Ok(())
}
