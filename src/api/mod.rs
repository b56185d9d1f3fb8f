//! PsstBin API client
//!
//! The service owns the wire contract; this module mirrors it: JSON over
//! HTTPS, `POST /create` to store a paste, `POST /paste` to consume one.
//! Retrieval is one-time, so a fetched paste is held in a
//! [`RetrievalSession`] while the user works out the password.

pub mod client;
pub mod session;
pub mod types;

pub use client::ApiClient;
pub use session::{PastePayload, RetrievalSession};
pub use types::{CreateRequest, CreateResponse, PasteResponse};
