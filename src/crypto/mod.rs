//! Cryptographic functions for the PsstBin client
//!
//! Provides the client-side paste envelope: AES-256-GCM encryption with
//! PBKDF2-SHA-256 key derivation. Content is encrypted before it leaves
//! the machine; the server only ever stores opaque ciphertext plus the
//! salt and nonce needed to decrypt it with the right password.

pub mod envelope;
pub mod key_derivation;
pub mod provider;
pub mod secure_memory;

pub use envelope::{decrypt, encrypt, Envelope, TransportEnvelope, NONCE_SIZE, SALT_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KDF_ITERATIONS};
pub use provider::{CryptoProvider, OsCrypto};
pub use secure_memory::SecureString;
