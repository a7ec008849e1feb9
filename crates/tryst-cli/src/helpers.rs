//! Input helpers for passphrase reading.

use dialoguer::Password;
use zeroize::Zeroizing;

/// Prompt for a passphrase, or read it from the TRYST_PASSPHRASE env var.
///
/// Empty passphrases are rejected here; the core derivation function
/// assumes its caller already did so.
pub fn prompt_passphrase() -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("TRYST_PASSPHRASE") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }
    let value = Password::new()
        .with_prompt("Passphrase")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    if value.is_empty() {
        return Err(anyhow::anyhow!("Passphrase cannot be empty"));
    }
    Ok(Zeroizing::new(value))
}

/// Prompt for a passphrase with confirmation (for share), or read it
/// from the TRYST_PASSPHRASE env var.
pub fn prompt_share_passphrase() -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("TRYST_PASSPHRASE") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }
    loop {
        let value = Password::new()
            .with_prompt("Enter passphrase")
            .with_confirmation("Confirm passphrase", "Passphrases do not match")
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
        if value.is_empty() {
            eprintln!("Passphrase cannot be empty");
            continue;
        }
        return Ok(Zeroizing::new(value));
    }
}
