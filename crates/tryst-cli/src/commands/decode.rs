use tryst_core::crypto::open;
use tryst_core::payload::decode_payload;
use tryst_core::Selection;

use crate::cli::{Cli, DecodeArgs};
use crate::errors::CliError;
use crate::helpers::prompt_passphrase;
use crate::output::{print_selection, selection_json};

/// The one message every decode failure collapses to. Format errors,
/// authentication failures, and malformed payloads are indistinguishable
/// out here so the command cannot be used as a passphrase oracle.
const DECODE_FAILED: &str = "Could not decrypt. Check code or passphrase.";

pub fn handle_decode(cli: &Cli, args: &DecodeArgs) -> anyhow::Result<()> {
    let passphrase = prompt_passphrase()?;

    let selection = decode_code(args.code.trim(), &passphrase)
        .map_err(|_| CliError::auth_failed(DECODE_FAILED))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&selection_json(&selection))?
        );
        return Ok(());
    }
    print_selection(&selection, cli.quiet);
    Ok(())
}

fn decode_code(code: &str, passphrase: &str) -> tryst_core::Result<Selection> {
    let payload = open(code, passphrase)?;
    decode_payload(&payload)
}
