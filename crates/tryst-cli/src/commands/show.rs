use tryst_core::route::{parse_results_path, parse_results_query};
use tryst_core::Selection;

use crate::cli::{Cli, ShowArgs};
use crate::output::{print_empty_state, print_selection, selection_json};
use crate::store::{JsonFileStore, SelectionStore};

pub fn handle_show(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::open(cli)?;
    let selection = effective_selection(&store, args);

    if args.json {
        let value = match &selection {
            Some(selection) => selection_json(selection),
            None => serde_json::Value::Null,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match selection {
        Some(selection) => print_selection(&selection, cli.quiet),
        None => print_empty_state(cli.quiet),
    }
    Ok(())
}

/// Resolve what the results view should display.
///
/// An explicit path replaces saved state entirely; an unparseable path
/// degrades to the empty state, never an error. Query parameters beat
/// saved state field by field. A selection missing categories or a
/// schedule counts as no data.
fn effective_selection(store: &dyn SelectionStore, args: &ShowArgs) -> Option<Selection> {
    if let Some(path) = &args.path {
        return parse_results_path(path).ok().filter(Selection::has_data);
    }

    let mut selection = store.load().unwrap_or_default();
    if let Some(query) = &args.query {
        let parsed = parse_results_query(query);
        if let Some(categories) = parsed.categories {
            selection.categories = categories;
        }
        if let Some(schedule) = parsed.schedule {
            selection.schedule = schedule;
        }
    }
    Some(selection).filter(Selection::has_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStore(Option<Selection>);

    impl SelectionStore for FixedStore {
        fn load(&self) -> Option<Selection> {
            self.0.clone()
        }
        fn save(&self, _selection: &Selection) -> anyhow::Result<()> {
            Ok(())
        }
        fn clear(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn args(path: Option<&str>, query: Option<&str>) -> ShowArgs {
        ShowArgs {
            path: path.map(String::from),
            query: query.map(String::from),
            json: false,
        }
    }

    fn saved() -> Option<Selection> {
        Some(Selection {
            categories: vec!["Movie".to_string()],
            schedule: "Sunday 3:00 PM".to_string(),
        })
    }

    #[test]
    fn test_saved_state_is_the_default() {
        let selection = effective_selection(&FixedStore(saved()), &args(None, None));
        assert_eq!(selection, saved());
    }

    #[test]
    fn test_query_beats_saved_state_per_field() {
        let selection = effective_selection(
            &FixedStore(saved()),
            &args(None, Some("?t=hiking,coffee")),
        )
        .expect("selection should resolve");
        assert_eq!(selection.categories, vec!["hiking", "coffee"]);
        // Schedule was absent from the query, so the saved one stands.
        assert_eq!(selection.schedule, "Sunday 3:00 PM");
    }

    #[test]
    fn test_path_replaces_saved_state() {
        let selection = effective_selection(
            &FixedStore(saved()),
            &args(Some("/r/dinner_sat-6-30pm"), None),
        )
        .expect("selection should resolve");
        assert_eq!(selection.categories, vec!["dinner"]);
        assert_eq!(selection.schedule, "Saturday 6:30 PM");
    }

    #[test]
    fn test_bad_path_degrades_to_empty_state() {
        let selection =
            effective_selection(&FixedStore(saved()), &args(Some("/results_movie_whenever"), None));
        assert_eq!(selection, None);
    }

    #[test]
    fn test_incomplete_selection_is_empty_state() {
        let store = FixedStore(Some(Selection {
            categories: vec!["Movie".to_string()],
            schedule: String::new(),
        }));
        assert_eq!(effective_selection(&store, &args(None, None)), None);
    }
}
