//! Passphrase key derivation.
//!
//! Argon2id with fixed parameters and a 256-bit output, restricted to
//! authenticated-encryption key use. Deterministic per (passphrase, salt):
//! a later decrypt call with the extracted salt re-derives the same key.
//! Empty-passphrase rejection is the caller's job, not this module's.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::error::{Result, TrystError};

/// Argon2id parameters. Fixed: the `v1` envelope version pins them.
/// - m_cost: 64 MiB memory
/// - t_cost: 3 iterations
/// - p_cost: 4 parallel lanes
const ARGON2_M_COST: u32 = 65536;
const ARGON2_T_COST: u32 = 3;
const ARGON2_P_COST: u32 = 4;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes (256 bits, for AES-256-GCM).
pub const KEY_LEN: usize = 32;

/// Derive a symmetric key from a passphrase and salt.
///
/// Identical inputs always yield the same key; different salts yield
/// unrelated keys for the same passphrase. The returned buffer is wiped
/// when dropped.
pub fn derive_key(passphrase: &str, salt: &[u8; SALT_LEN]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    let params = Params::new(ARGON2_M_COST, ARGON2_T_COST, ARGON2_P_COST, Some(KEY_LEN))
        .map_err(|e| TrystError::Crypto(format!("Invalid KDF parameters: {}", e)))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(passphrase.as_bytes(), salt, &mut key[..])
        .map_err(|e| TrystError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(key)
}
