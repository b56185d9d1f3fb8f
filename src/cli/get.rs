//! `psstbin get`: retrieve (and consume) a paste
//!
//! Retrieval is one-time, so the fetched paste is held in a
//! `RetrievalSession` while the password is worked out; a wrong password
//! never costs a re-fetch (which would find the paste already consumed).

use std::path::PathBuf;

use clap::Args;

use crate::api::{ApiClient, RetrievalSession};
use crate::error::{PsstError, PsstResult};
use crate::validate::validate_paste_id;

use super::prompt_password;

/// Arguments for `psstbin get`
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Paste id to retrieve
    pub id: String,

    /// Save the content to a file instead of printing it
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the full JSON response instead of the content
    #[arg(long)]
    pub json: bool,

    /// Decryption password (prompted when omitted and the paste is encrypted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Handle the get command
pub fn handle_get(client: &ApiClient, args: GetArgs) -> PsstResult<()> {
    validate_paste_id(&args.id)?;

    let response = client.get_paste(&args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let session = RetrievalSession::from_response(response)?;
    let content = resolve_content(&session, args.password.as_deref())?;

    if let Some(path) = &args.output {
        std::fs::write(path, &content)
            .map_err(|e| PsstError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
        println!("[Saved to {}]", path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// Recover the plaintext, prompting and retrying on a wrong password
///
/// With `--password` the single attempt is final: a wrong password fails
/// the command. Interactively, the session is retried until the password
/// is right or the user gives up with an empty input.
fn resolve_content(session: &RetrievalSession, password: Option<&str>) -> PsstResult<String> {
    if !session.needs_password() {
        return session.unlock("");
    }

    if let Some(password) = password {
        return session.unlock(password);
    }

    println!("This paste is encrypted.");
    loop {
        let password = prompt_password("Enter password (empty to give up): ")?;
        if password.is_empty() {
            return Err(PsstError::DecryptionFailed);
        }

        match session.unlock(password.as_str()) {
            Ok(content) => return Ok(content),
            Err(PsstError::DecryptionFailed) => {
                println!("Decryption failed: wrong password or corrupted data.");
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PasteResponse;
    use crate::crypto::{self, OsCrypto};

    #[test]
    fn test_resolve_plaintext_content() {
        let response = PasteResponse {
            paste_id: "my-paste-01".into(),
            encrypted: false,
            content: "hello world".into(),
            salt: None,
            iv: None,
            message: String::new(),
            secret_types: None,
        };
        let session = RetrievalSession::from_response(response).unwrap();
        assert_eq!(resolve_content(&session, None).unwrap(), "hello world");
    }

    #[test]
    fn test_resolve_encrypted_with_flag_password() {
        let envelope = crypto::encrypt("the note", "correct-password", &OsCrypto).unwrap();
        let transport = envelope.to_transport();
        let response = PasteResponse {
            paste_id: "my-paste-01".into(),
            encrypted: true,
            content: transport.content,
            salt: Some(transport.salt),
            iv: Some(transport.iv),
            message: String::new(),
            secret_types: None,
        };
        let session = RetrievalSession::from_response(response).unwrap();

        assert_eq!(
            resolve_content(&session, Some("correct-password")).unwrap(),
            "the note"
        );
        let err = resolve_content(&session, Some("wrong-password")).unwrap_err();
        assert!(matches!(err, PsstError::DecryptionFailed));
    }
}
