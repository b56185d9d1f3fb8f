//! Key derivation using PBKDF2-SHA-256
//!
//! Stretches a user password into a 256-bit AES key. The iteration count
//! matches what the PsstBin web client uses, so a paste encrypted in the
//! browser decrypts here with the same password and vice versa.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{PsstError, PsstResult};

/// PBKDF2 iteration count (minimum mandated by the envelope scheme)
pub const KDF_ITERATIONS: u32 = 100_000;

/// Size of the derived key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// A derived encryption key
///
/// Single-purpose: only the AEAD layer can read the raw bytes, and the
/// key material is zeroed when the value is dropped. Deliberately not
/// serializable and not cloneable.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive an encryption key from a password and salt
///
/// Deterministic: the same (password, salt) pair always yields the same
/// key, which is what lets decryption rebuild the key from the envelope's
/// stored salt.
///
/// # Errors
///
/// Returns `PsstError::KeyDerivation` if the password or salt is empty.
pub fn derive_key(password: &str, salt: &[u8]) -> PsstResult<DerivedKey> {
    if password.is_empty() {
        return Err(PsstError::KeyDerivation("Password must not be empty".into()));
    }
    if salt.is_empty() {
        return Err(PsstError::KeyDerivation("Salt must not be empty".into()));
    }

    let mut key = [0u8; KEY_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ITERATIONS, &mut key);

    Ok(DerivedKey { key })
}
