use tryst_core::crypto::seal;
use tryst_core::payload::encode_payload;

use crate::cli::{Cli, ShareArgs};
use crate::errors::CliError;
use crate::helpers::prompt_share_passphrase;
use crate::store::{JsonFileStore, SelectionStore};

pub fn handle_share(cli: &Cli, args: &ShareArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::open(cli)?;
    let selection = store
        .load()
        .filter(|selection| selection.has_data())
        .ok_or_else(|| {
            CliError::not_found(
                "No complete selection to share.",
                "Hint: Run `tryst pick <CATEGORY>... --schedule <SLOT>` first.",
            )
        })?;

    let passphrase = prompt_share_passphrase()?;

    let payload = encode_payload(&selection)?;
    let code = seal(&payload, &passphrase)?;

    if cli.quiet || args.code_only {
        println!("{}", code);
    } else {
        println!("Share this code + your passphrase:");
        println!("{}", code);
    }
    Ok(())
}
