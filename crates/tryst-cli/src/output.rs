//! Output formatting for selections.

use tryst_core::Selection;

/// Convert a selection to JSON for output.
pub fn selection_json(selection: &Selection) -> serde_json::Value {
    serde_json::json!({
        "categories": selection.categories,
        "schedule": selection.schedule,
    })
}

/// Joined category text, with the surprise fallback for an empty list.
pub fn categories_text(selection: &Selection) -> String {
    if selection.categories.is_empty() {
        "surprise".to_string()
    } else {
        selection.categories.join(" + ")
    }
}

/// Render the confirmation view for a selection.
pub fn print_selection(selection: &Selection, quiet: bool) {
    if quiet {
        println!("{} | {}", categories_text(selection), selection.schedule);
    } else {
        println!("Date: {}", categories_text(selection));
        println!("When: {}", selection.schedule);
    }
}

/// Render the no-saved-selections fallback state.
pub fn print_empty_state(quiet: bool) {
    if quiet {
        return;
    }
    println!("No saved selections yet.");
    println!("Pick your date preferences first: `tryst pick <CATEGORY>... --schedule <SLOT>`");
}
