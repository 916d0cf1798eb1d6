//! ICD code normalization.

use medcodes_model::{ComorbidityError, IcdVersion, Result};

/// Normalize a raw ICD code: remove `.` separators and trim surrounding
/// whitespace, then enforce the exact length for the coding version
/// (5 characters for ICD-9, 4 for ICD-10).
///
/// Codes of the wrong length are rejected, never truncated or padded.
/// Pure and idempotent: normalizing an already-normalized code is a no-op.
pub fn normalize_code(code: &str, version: IcdVersion) -> Result<String> {
    let normalized = code.replace('.', "").trim().to_string();
    let expected = version.expected_len();
    if normalized.len() != expected {
        return Err(ComorbidityError::CodeLength {
            code: code.to_string(),
            version: version.as_u8(),
            expected,
            actual: normalized.len(),
        });
    }
    Ok(normalized)
}
