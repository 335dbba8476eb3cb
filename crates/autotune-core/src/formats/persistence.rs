//! Binary persistence format.
//!
//! Layout: `MAGIC` (4 bytes) | `FORMAT_VERSION` (1 byte) | postcard body.

use super::FormatError;
use crate::RecommendationSettings;

/// Magic bytes at the start of every binary settings document.
pub const MAGIC: [u8; 4] = *b"ATRS";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Header length in bytes (magic + version).
pub const HEADER_LEN: usize = MAGIC.len() + 1;

/// Encode settings with header.
pub fn to_binary(settings: &RecommendationSettings) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::with_capacity(HEADER_LEN + 16);
    out.extend_from_slice(&MAGIC);
    out.push(FORMAT_VERSION);
    Ok(postcard::to_extend(settings, out)?)
}

/// Decode settings, checking the header first.
pub fn from_binary(bytes: &[u8]) -> Result<RecommendationSettings, FormatError> {
    if bytes.len() < HEADER_LEN {
        return Err(FormatError::Truncated { len: bytes.len() });
    }

    let (header, body) = bytes.split_at(HEADER_LEN);
    if header[..MAGIC.len()] != MAGIC {
        return Err(FormatError::BadMagic);
    }

    let version = header[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }

    let (settings, rest) = postcard::take_from_bytes(body)?;
    if !rest.is_empty() {
        return Err(FormatError::TrailingBytes { len: rest.len() });
    }

    Ok(settings)
}

// =============================================================================
// TESTS
// =============================================================================
