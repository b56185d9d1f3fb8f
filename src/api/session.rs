//! Retrieval session: one fetched paste, possibly awaiting a password
//!
//! Pastes are one-time reads; once `POST /paste` succeeds, the server has
//! destroyed its copy. A [`RetrievalSession`] pins the fetched payload in
//! memory so the user can attempt decryption as many times as they need
//! without another fetch. Each attempt is independent: a failed password
//! leaves the session untouched and a different password can be tried.

use crate::crypto::{self, CryptoProvider, Envelope, OsCrypto, TransportEnvelope};
use crate::error::{PsstError, PsstResult};

use super::types::PasteResponse;

/// The content of a fetched paste
#[derive(Debug, Clone)]
pub enum PastePayload {
    /// Stored as-is; no password involved
    Plaintext(String),
    /// A client-encrypted envelope still in transport encoding
    Encrypted(TransportEnvelope),
}

/// A single paste-retrieval interaction, from fetch to decryption
#[derive(Debug, Clone)]
pub struct RetrievalSession {
    paste_id: String,
    payload: PastePayload,
}

impl RetrievalSession {
    /// Build a session from a retrieval response
    ///
    /// An encrypted paste must carry its salt and nonce; a response with
    /// the `encrypted` flag but missing either is rejected here rather
    /// than producing a doomed decrypt attempt later.
    pub fn from_response(response: PasteResponse) -> PsstResult<Self> {
        let payload = if response.encrypted {
            let salt = response.salt.ok_or_else(|| {
                PsstError::Validation("Encrypted paste is missing its salt".into())
            })?;
            let iv = response
                .iv
                .ok_or_else(|| PsstError::Validation("Encrypted paste is missing its nonce".into()))?;

            PastePayload::Encrypted(TransportEnvelope {
                content: response.content,
                salt,
                iv,
            })
        } else {
            PastePayload::Plaintext(response.content)
        };

        Ok(Self {
            paste_id: response.paste_id,
            payload,
        })
    }

    /// Get the paste id this session was fetched for
    pub fn paste_id(&self) -> &str {
        &self.paste_id
    }

    /// Whether a password is needed to read the content
    pub fn needs_password(&self) -> bool {
        matches!(self.payload, PastePayload::Encrypted(_))
    }

    /// Get the content if it was stored as plaintext
    pub fn plaintext(&self) -> Option<&str> {
        match &self.payload {
            PastePayload::Plaintext(content) => Some(content),
            PastePayload::Encrypted(_) => None,
        }
    }

    /// Attempt to recover the plaintext with the given password
    ///
    /// For a plaintext paste the password is ignored. For an encrypted
    /// paste, a wrong password yields `PsstError::DecryptionFailed` and
    /// the session can be retried with another one.
    pub fn unlock(&self, password: &str) -> PsstResult<String> {
        self.unlock_with(password, &OsCrypto)
    }

    /// `unlock` with an explicit crypto provider
    pub fn unlock_with<C: CryptoProvider>(&self, password: &str, provider: &C) -> PsstResult<String> {
        match &self.payload {
            PastePayload::Plaintext(content) => Ok(content.clone()),
            PastePayload::Encrypted(transport) => {
                let envelope = Envelope::from_transport(transport)?;
                crypto::decrypt(&envelope, password, provider)
            }
        }
    }
}
