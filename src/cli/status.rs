//! `psstbin status`: fetch paste metadata
//!
//! The API has no metadata-only endpoint; the retrieval endpoint is the
//! only way to learn anything about a paste, and calling it consumes the
//! one-time read. The command therefore refuses to run without
//! `--consume` so nobody destroys a paste by "just checking" it.

use clap::Args;

use crate::api::ApiClient;
use crate::error::PsstResult;
use crate::validate::validate_paste_id;

/// Arguments for `psstbin status`
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Paste id to inspect
    pub id: String,

    /// Acknowledge that fetching metadata consumes the one-time paste
    #[arg(long)]
    pub consume: bool,
}

/// Handle the status command
pub fn handle_status(client: &ApiClient, args: StatusArgs) -> PsstResult<()> {
    validate_paste_id(&args.id)?;

    if !args.consume {
        println!("The API has no metadata-only endpoint: checking status reads the");
        println!("paste, and pastes are one-time reads. This would destroy '{}'.", args.id);
        println!();
        println!("Re-run with --consume to proceed anyway.");
        return Ok(());
    }

    let response = client.get_paste(&args.id)?;

    let metadata = serde_json::json!({
        "paste_id": response.paste_id,
        "encrypted": response.encrypted,
        "secret_types": response.secret_types,
    });
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
