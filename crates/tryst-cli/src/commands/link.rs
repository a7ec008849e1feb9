use tryst_core::route::{results_path, results_query_path};

use crate::cli::{Cli, LinkArgs};
use crate::store::{JsonFileStore, SelectionStore};

pub fn handle_link(cli: &Cli, args: &LinkArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::open(cli)?;
    let selection = store.load().unwrap_or_default();

    // An incomplete selection still yields a link; the friendly form
    // falls back to /results when the schedule is unrecognized.
    let link = if args.query {
        results_query_path(&selection.categories, &selection.schedule)
    } else {
        results_path(&selection.categories, &selection.schedule)
    };
    println!("{}", link);
    Ok(())
}
