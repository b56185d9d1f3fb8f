//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the API client and the
//! envelope cipher.

pub mod create;
pub mod get;
pub mod status;

pub use create::{handle_create, CreateArgs};
pub use get::{handle_get, GetArgs};
pub use status::{handle_status, StatusArgs};

use crate::crypto::SecureString;
use crate::error::{PsstError, PsstResult};

/// Minimum password length for client-side encryption
///
/// Enforced here at the CLI boundary; the cipher itself only rejects
/// empty passwords.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Prompt for a password (hidden input)
pub(crate) fn prompt_password(prompt: &str) -> PsstResult<SecureString> {
    rpassword::prompt_password(prompt)
        .map(SecureString::new)
        .map_err(|e| PsstError::Io(format!("Failed to read password: {}", e)))
}

/// Prompt for a new password with confirmation
pub(crate) fn prompt_new_password() -> PsstResult<SecureString> {
    loop {
        let pass1 = prompt_password("Enter encryption password: ")?;

        if pass1.len() < MIN_PASSWORD_LEN {
            println!(
                "Password must be at least {} characters. Please try again.",
                MIN_PASSWORD_LEN
            );
            continue;
        }

        let pass2 = prompt_password("Confirm password: ")?;

        if pass1.as_str() != pass2.as_str() {
            println!("Passwords do not match. Please try again.");
            continue;
        }

        return Ok(pass1);
    }
}

/// Apply the minimum-length policy to a password supplied via flag
pub(crate) fn check_password_policy(password: &str) -> PsstResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(PsstError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}
