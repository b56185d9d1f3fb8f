//! PsstBin client - encrypted, ephemeral, one-time pastes
//!
//! This library provides the core functionality for the PsstBin
//! command-line client. Pastes are created against a remote API and read
//! back exactly once; content can be encrypted client-side so the server
//! only ever holds opaque ciphertext.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `crypto`: The paste envelope (PBKDF2-SHA-256 + AES-256-GCM)
//! - `api`: HTTP client, wire types, and the retrieval session
//! - `validate`: Paste id validation
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use psstbin_cli::crypto::{self, OsCrypto};
//!
//! let envelope = crypto::encrypt("hello world", "correct-password", &OsCrypto)?;
//! let plaintext = crypto::decrypt(&envelope, "correct-password", &OsCrypto)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod validate;

pub use error::{PsstError, PsstResult};
