//! The paste envelope
//!
//! An [`Envelope`] is the self-contained unit a paste travels as when
//! client-side encryption is on: ciphertext (with GCM tag), the salt the
//! key was stretched with, and the nonce the cipher ran under. All three
//! are drawn fresh per encryption and must travel together; without any
//! one of them (or the password) the paste is unrecoverable.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{PsstError, PsstResult};

use super::provider::CryptoProvider;

/// Size of the key derivation salt in bytes (128 bits)
pub const SALT_SIZE: usize = 16;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// An encrypted paste: ciphertext plus the metadata needed to decrypt it
///
/// Created once at encryption time and never mutated. The auth tag is
/// part of the ciphertext, so any bit-flip or truncation anywhere in the
/// envelope surfaces as `DecryptionFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// AES-256-GCM output: ciphertext with the 16-byte tag appended
    pub ciphertext: Vec<u8>,
    /// PBKDF2 salt, random per encryption
    pub salt: [u8; SALT_SIZE],
    /// GCM nonce, random per encryption
    pub nonce: [u8; NONCE_SIZE],
}

/// An envelope framed for the API: each field as standard base64 text
///
/// Field names mirror the service's wire contract (`content`, `salt`,
/// `iv`), where the three blobs are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportEnvelope {
    /// base64 ciphertext (the API's `content` field)
    pub content: String,
    /// base64 salt
    pub salt: String,
    /// base64 nonce (the API calls it `iv`)
    pub iv: String,
}

impl Envelope {
    /// Encode all three fields as transport-safe base64 text
    pub fn to_transport(&self) -> TransportEnvelope {
        TransportEnvelope {
            content: STANDARD.encode(&self.ciphertext),
            salt: STANDARD.encode(self.salt),
            iv: STANDARD.encode(self.nonce),
        }
    }

    /// Decode a transport envelope back into raw bytes
    ///
    /// Rejects blobs that are not valid base64 and salt/nonce fields of
    /// the wrong length. Tampering *within* a valid-length field is not
    /// detected here; that is the auth tag's job at decryption.
    pub fn from_transport(transport: &TransportEnvelope) -> PsstResult<Self> {
        let ciphertext = decode_field(&transport.content, "ciphertext")?;
        let salt_bytes = decode_field(&transport.salt, "salt")?;
        let nonce_bytes = decode_field(&transport.iv, "nonce")?;

        let salt: [u8; SALT_SIZE] = salt_bytes.try_into().map_err(|v: Vec<u8>| {
            PsstError::Validation(format!(
                "Invalid salt size: expected {}, got {}",
                SALT_SIZE,
                v.len()
            ))
        })?;
        let nonce: [u8; NONCE_SIZE] = nonce_bytes.try_into().map_err(|v: Vec<u8>| {
            PsstError::Validation(format!(
                "Invalid nonce size: expected {}, got {}",
                NONCE_SIZE,
                v.len()
            ))
        })?;

        Ok(Self {
            ciphertext,
            salt,
            nonce,
        })
    }
}

fn decode_field(value: &str, field: &str) -> PsstResult<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| PsstError::Validation(format!("Invalid {} encoding: {}", field, e)))
}

/// Encrypt plaintext under a password, producing a fresh envelope
///
/// Salt and nonce are drawn independently from the provider's CSPRNG on
/// every call, so encrypting the same content twice never reuses a
/// (key, nonce) pair.
pub fn encrypt<C: CryptoProvider>(
    plaintext: &str,
    password: &str,
    crypto: &C,
) -> PsstResult<Envelope> {
    let mut salt = [0u8; SALT_SIZE];
    crypto.fill_random(&mut salt)?;
    let mut nonce = [0u8; NONCE_SIZE];
    crypto.fill_random(&mut nonce)?;

    let key = crypto.derive_key(password, &salt)?;
    let ciphertext = crypto.aead_seal(&key, &nonce, plaintext.as_bytes())?;

    Ok(Envelope {
        ciphertext,
        salt,
        nonce,
    })
}

/// Decrypt an envelope with the password it was created under
///
/// Fails with `PsstError::DecryptionFailed` on any authentication
/// mismatch: wrong password, tampered ciphertext, or a salt/nonce that
/// does not belong to this envelope. The two causes are deliberately
/// indistinguishable; nothing partially decrypted is ever returned.
pub fn decrypt<C: CryptoProvider>(
    envelope: &Envelope,
    password: &str,
    crypto: &C,
) -> PsstResult<String> {
    let key = crypto.derive_key(password, &envelope.salt)?;
    let plaintext = crypto.aead_open(&key, &envelope.nonce, &envelope.ciphertext)?;
    String::from_utf8(plaintext).map_err(|_| PsstError::DecryptionFailed)
}
