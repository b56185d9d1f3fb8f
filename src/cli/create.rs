//! `psstbin create`: upload a new paste
//!
//! Content comes from `--file` or `--text`. With `--encrypt`, the content
//! is sealed into an envelope locally and only ciphertext, salt, and
//! nonce leave the machine; the password never does.

use std::path::PathBuf;

use chrono::{Duration as ChronoDuration, Local};
use clap::Args;
use uuid::Uuid;

use crate::api::{ApiClient, CreateRequest};
use crate::config::Settings;
use crate::crypto::{self, OsCrypto, SecureString};
use crate::error::{PsstError, PsstResult};
use crate::validate::validate_paste_id;

use super::{check_password_policy, prompt_new_password};

/// Arguments for `psstbin create`
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Paste id (generated when omitted)
    #[arg(long)]
    pub id: Option<String>,

    /// Read the paste content from a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Paste content as a literal argument
    #[arg(long)]
    pub text: Option<String>,

    /// Paste expiry in seconds (default from config)
    #[arg(long)]
    pub expiry: Option<u64>,

    /// Encrypt the content client-side before upload
    #[arg(long)]
    pub encrypt: bool,

    /// Encryption password (prompted when omitted; requires --encrypt)
    #[arg(long, requires = "encrypt")]
    pub password: Option<String>,
}

/// Handle the create command
pub fn handle_create(client: &ApiClient, settings: &Settings, args: CreateArgs) -> PsstResult<()> {
    let content = read_content(&args)?;

    let paste_id = match args.id {
        Some(id) => {
            validate_paste_id(&id)?;
            id
        }
        None => Uuid::new_v4().to_string(),
    };

    let expiry_seconds = args.expiry.unwrap_or(settings.default_expiry_seconds);

    let request = if args.encrypt {
        let password = match args.password {
            Some(p) => {
                check_password_policy(&p)?;
                SecureString::new(p)
            }
            None => prompt_new_password()?,
        };

        let envelope = crypto::encrypt(&content, password.as_str(), &OsCrypto)?;
        let transport = envelope.to_transport();

        CreateRequest {
            paste_id: Some(paste_id.clone()),
            content: transport.content,
            expiry_seconds,
            content_encrypted: true,
            salt: Some(transport.salt),
            iv: Some(transport.iv),
        }
    } else {
        CreateRequest {
            paste_id: Some(paste_id.clone()),
            content,
            expiry_seconds,
            content_encrypted: false,
            salt: None,
            iv: None,
        }
    };

    let response = client.create_paste(&request)?;

    println!("Paste '{}' created.", paste_id);

    let expires_at = Local::now() + ChronoDuration::seconds(expiry_seconds as i64);
    println!(
        "Expires: {} ({} seconds)",
        expires_at.format("%Y-%m-%d %H:%M:%S"),
        expiry_seconds
    );

    if args.encrypt {
        println!("Content was encrypted locally. Share the password out of band;");
        println!("without it the paste cannot be recovered.");
    }

    if response.secrets_detected {
        println!();
        println!(
            "WARNING: the server flagged possible secrets in this paste: {}",
            response.secret_types.join(", ")
        );
        println!("Retrieval of flagged pastes may be blocked.");
    }

    Ok(())
}

/// Resolve the paste content from --file or --text
fn read_content(args: &CreateArgs) -> PsstResult<String> {
    let content = if let Some(path) = &args.file {
        std::fs::read_to_string(path)
            .map_err(|e| PsstError::Io(format!("Failed to read {}: {}", path.display(), e)))?
    } else if let Some(text) = &args.text {
        text.clone()
    } else {
        return Err(PsstError::Validation(
            "Provide content via --file or --text".into(),
        ));
    };

    if content.is_empty() {
        return Err(PsstError::Validation("Paste content is empty".into()));
    }

    Ok(content)
}
