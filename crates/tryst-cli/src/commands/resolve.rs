use tryst_core::route::{parse_results_path, parse_results_query};
use tryst_core::Selection;

use crate::cli::{Cli, ResolveArgs};
use crate::output::{print_empty_state, print_selection, selection_json};

pub fn handle_resolve(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<()> {
    let selection = resolve_target(&args.target);

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

/// Resolve a friendly path or query string.
///
/// The friendly path wins when it parses; otherwise any query portion is
/// consulted. Failures degrade to None (the empty state), never an
/// error, matching how unrecognized routes behave in the results view.
fn resolve_target(target: &str) -> Option<Selection> {
    let (path_part, query_part) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };

    if let Ok(selection) = parse_results_path(path_part) {
        return Some(selection).filter(Selection::has_data);
    }

    // Fall back to query parameters: the portion after '?', or the whole
    // target when it was a bare query string.
    let parsed = parse_results_query(query_part.unwrap_or(target));
    let selection = Selection {
        categories: parsed.categories.unwrap_or_default(),
        schedule: parsed.schedule.unwrap_or_default(),
    };
    Some(selection).filter(Selection::has_data)
}
