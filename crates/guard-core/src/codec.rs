//! Printable transcoding of binary payloads
//!
//! Standard base64 alphabet with `=` padding. This is the external form of
//! every sealed payload, so the engine must not change.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{GuardError, Result};

/// Encode arbitrary bytes as padded standard base64
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64 back into bytes
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| GuardError::Base64Decode(e.to_string()))
}

/// Decode base64 and interpret the result as UTF-8 text
pub fn decode_string(encoded: &str) -> Result<String> {
    let bytes = decode(encoded)?;
    String::from_utf8(bytes).map_err(|e| GuardError::Base64Decode(e.to_string()))
}
