//! Input validation for paste ids
//!
//! Matches the service's rule: letters, digits, dashes, and underscores,
//! 3 to 50 characters. Validating client-side keeps URLs predictable and
//! avoids a round trip for obviously malformed ids.

use crate::error::{PsstError, PsstResult};

/// Minimum paste id length
pub const PASTE_ID_MIN_LEN: usize = 3;

/// Maximum paste id length
pub const PASTE_ID_MAX_LEN: usize = 50;

/// Check that a paste id is well-formed
pub fn validate_paste_id(paste_id: &str) -> PsstResult<()> {
    let len = paste_id.chars().count();
    if len < PASTE_ID_MIN_LEN || len > PASTE_ID_MAX_LEN {
        return Err(PsstError::Validation(format!(
            "Paste id must be {} to {} characters, got {}",
            PASTE_ID_MIN_LEN, PASTE_ID_MAX_LEN, len
        )));
    }

    if !paste_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(PsstError::Validation(
            "Paste id may only contain letters, numbers, dashes, and underscores".into(),
        ));
    }

    Ok(())
}
