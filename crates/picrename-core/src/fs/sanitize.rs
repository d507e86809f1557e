//! User-supplied name sanitisation.

use crate::error::{CoreError, CoreResult};

/// Returns `true` for characters that may not appear in a file name.
///
/// Uses the Windows-reserved set plus ASCII control characters on every
/// platform, so sanitised output is identical regardless of host OS.
fn is_invalid_name_char(c: char) -> bool {
    matches!(c, '"' | '*' | '/' | ':' | '<' | '>' | '?' | '\\' | '|') || (c as u32) < 0x20
}

/// Sanitises raw user text into a usable file or folder base name.
///
/// Trims the input, splits it on invalid filename characters, joins the
/// remaining non-empty fragments with a single `_`, and trims again.
/// Idempotent: sanitising an already-sanitised name returns it unchanged.
///
/// # Errors
///
/// - [`CoreError::EmptyName`] if the input is empty or whitespace-only.
/// - [`CoreError::InvalidName`] if nothing usable remains after stripping
///   invalid characters.
pub fn sanitize_name(raw: &str) -> CoreResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyName);
    }

    let joined = trimmed
        .split(is_invalid_name_char)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let safe = joined.trim();
    if safe.is_empty() {
        return Err(CoreError::InvalidName(trimmed.to_string()));
    }

    Ok(safe.to_string())
}
