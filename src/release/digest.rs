//! Conversion of hex SHA-256 digests into SRI integrity strings

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::SRI_PREFIX;
use crate::release::error::DigestError;

/// Decode a hex digest and re-encode it as padded standard base64.
///
/// Accepts upper and lower case digits. Odd lengths and non-hex characters
/// are rejected instead of being read as zero.
pub fn hex_to_base64(hex_digest: &str) -> Result<String, DigestError> {
    let bytes = hex::decode(hex_digest)?;
    Ok(STANDARD.encode(bytes))
}

/// Format an already encoded base64 digest as `sha256-<base64>`
pub fn format_sri(base64_digest: &str) -> String {
    format!("{}-{}", SRI_PREFIX, base64_digest)
}
