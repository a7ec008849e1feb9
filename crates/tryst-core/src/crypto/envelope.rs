//! Versioned text envelope for passphrase-protected payloads.
//!
//! Format: `v1.<base64 salt>.<base64 nonce>.<base64 ciphertext||tag>`,
//! exactly four dot-delimited fields with standard (padded) base64. The
//! envelope is self-describing: it embeds everything except the
//! passphrase needed to reverse it. Any bit flip in the ciphertext makes
//! decryption fail rather than silently corrupt.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::RngCore;

use crate::crypto::kdf::{derive_key, SALT_LEN};
use crate::error::{Result, TrystError};

/// The only accepted version literal.
pub const VERSION_TAG: &str = "v1";

/// Nonce length in bytes (96 bits, AES-GCM).
pub const NONCE_LEN: usize = 12;

/// Authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// Encrypt payload bytes under a passphrase, producing an envelope string.
///
/// Every call generates a fresh random salt and nonce, so two calls on
/// identical inputs yield different envelopes that both decrypt back to
/// the same payload. Nonce reuse under one key cannot happen: the key is
/// re-derived from the fresh salt on every call.
pub fn seal(payload: &[u8], passphrase: &str) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let key = derive_key(passphrase, &salt)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
    let ciphertext = cipher
        .encrypt(&nonce, payload)
        .map_err(|e| TrystError::Crypto(format!("Encryption failed: {}", e)))?;

    Ok(format!(
        "{}.{}.{}.{}",
        VERSION_TAG,
        STANDARD.encode(salt),
        STANDARD.encode(nonce),
        STANDARD.encode(&ciphertext)
    ))
}

/// Decrypt an envelope string back to the exact original payload bytes.
///
/// Structural problems (wrong field count, unknown version, bad base64,
/// implausible field lengths) surface as `TrystError::Format`. A failed
/// authentication check surfaces as `TrystError::Authentication`, which
/// covers both a wrong passphrase and tampered ciphertext; callers must
/// not try to tell those apart.
pub fn open(envelope: &str, passphrase: &str) -> Result<Vec<u8>> {
    let fields: Vec<&str> = envelope.split('.').collect();
    if fields.len() != 4 {
        return Err(TrystError::Format(format!(
            "Expected 4 envelope fields, found {}",
            fields.len()
        )));
    }
    if fields[0] != VERSION_TAG {
        return Err(TrystError::Format(format!(
            "Unsupported envelope version: {}",
            fields[0]
        )));
    }

    let salt = decode_fixed::<SALT_LEN>(fields[1], "salt")?;
    let nonce = decode_fixed::<NONCE_LEN>(fields[2], "nonce")?;
    let ciphertext = STANDARD
        .decode(fields[3])
        .map_err(|e| TrystError::Format(format!("Invalid ciphertext encoding: {}", e)))?;
    if ciphertext.len() < TAG_LEN {
        return Err(TrystError::Format(
            "Ciphertext shorter than authentication tag".to_string(),
        ));
    }

    let key = derive_key(passphrase, &salt)?;
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
    cipher
        .decrypt(Nonce::from_slice(&nonce), ciphertext.as_slice())
        .map_err(|_| TrystError::Authentication)
}

/// Base64-decode a field that must be exactly `N` bytes long.
fn decode_fixed<const N: usize>(field: &str, name: &str) -> Result<[u8; N]> {
    let bytes = STANDARD
        .decode(field)
        .map_err(|e| TrystError::Format(format!("Invalid {} encoding: {}", name, e)))?;
    bytes.as_slice().try_into().map_err(|_| {
        TrystError::Format(format!(
            "Expected {} bytes of {}, found {}",
            N,
            name,
            bytes.len()
        ))
    })
}
