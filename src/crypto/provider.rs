//! Crypto capability provider
//!
//! The envelope logic never touches the RNG, KDF, or cipher directly; it
//! goes through [`CryptoProvider`] so the primitives can be swapped out in
//! tests and the envelope code stays portable across runtimes.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::error::{PsstError, PsstResult};

use super::envelope::NONCE_SIZE;
use super::key_derivation::{self, DerivedKey};

/// Access to the cryptographic primitives the envelope needs
pub trait CryptoProvider {
    /// Fill `buf` with cryptographically secure random bytes
    fn fill_random(&self, buf: &mut [u8]) -> PsstResult<()>;

    /// Stretch a password and salt into an AES-256 key
    fn derive_key(&self, password: &str, salt: &[u8]) -> PsstResult<DerivedKey>;

    /// Authenticated encryption; the returned ciphertext carries the GCM tag
    fn aead_seal(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> PsstResult<Vec<u8>>;

    /// Authenticated decryption; fails on any tag mismatch
    fn aead_open(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_SIZE],
        ciphertext: &[u8],
    ) -> PsstResult<Vec<u8>>;
}

/// Default provider backed by the OS RNG and the RustCrypto primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCrypto;

impl CryptoProvider for OsCrypto {
    fn fill_random(&self, buf: &mut [u8]) -> PsstResult<()> {
        OsRng.fill_bytes(buf);
        Ok(())
    }

    fn derive_key(&self, password: &str, salt: &[u8]) -> PsstResult<DerivedKey> {
        key_derivation::derive_key(password, salt)
    }

    fn aead_seal(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> PsstResult<Vec<u8>> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        cipher
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|_| PsstError::Validation("Content too large to encrypt".to_string()))
    }

    fn aead_open(
        &self,
        key: &DerivedKey,
        nonce: &[u8; NONCE_SIZE],
        ciphertext: &[u8],
    ) -> PsstResult<Vec<u8>> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| PsstError::DecryptionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_random_varies() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsCrypto.fill_random(&mut a).unwrap();
        OsCrypto.fill_random(&mut b).unwrap();
        // 2^-128 false-failure odds
        assert_ne!(a, b);
    }

    #[test]
    fn test_seal_open_round_trip() {
        let key = OsCrypto.derive_key("password", &[9u8; 16]).unwrap();
        let nonce = [3u8; NONCE_SIZE];
        let sealed = OsCrypto.aead_seal(&key, &nonce, b"payload").unwrap();
        // GCM appends a 16-byte tag
        assert_eq!(sealed.len(), b"payload".len() + 16);
        let opened = OsCrypto.aead_open(&key, &nonce, &sealed).unwrap();
        assert_eq!(opened, b"payload");
    }

    #[test]
    fn test_open_with_wrong_nonce_fails() {
        let key = OsCrypto.derive_key("password", &[9u8; 16]).unwrap();
        let sealed = OsCrypto.aead_seal(&key, &[3u8; NONCE_SIZE], b"payload").unwrap();
        let err = OsCrypto
            .aead_open(&key, &[4u8; NONCE_SIZE], &sealed)
            .unwrap_err();
        assert!(matches!(err, PsstError::DecryptionFailed));
    }
}
