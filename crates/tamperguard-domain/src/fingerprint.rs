//! Signer certificate fingerprints.
//!
//! Fingerprints are uppercase hex byte pairs joined by `:`, the format `keytool -list -v`
//! prints, e.g. `CC:0C:FB:83:8C:88:A9:66:BB:0D:C9:C8:EB:A6:4F:32`.

use sha2::{Digest, Sha256};

/// Byte lengths of the digests a fingerprint may carry (MD5, SHA-256).
pub const FINGERPRINT_LENGTHS: [usize; 2] = [16, 32];

/// MD5 fingerprint of raw certificate bytes.
pub fn md5_fingerprint(certificate: &[u8]) -> String {
    let digest = md5::compute(certificate);
    colon_separated(&hex::encode_upper(digest.0))
}

/// SHA-256 fingerprint of raw certificate bytes.
pub fn sha256_fingerprint(certificate: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(certificate);
    let digest = hasher.finalize();
    colon_separated(&hex::encode_upper(digest))
}

/// Canonical form used for comparisons: trimmed, uppercase, colon-separated.
///
/// Bare hex strings (`cc0cfb...`) gain colons; anything else is only trimmed and uppercased.
pub fn normalize_fingerprint(value: &str) -> String {
    let upper = value.trim().to_ascii_uppercase();
    if !upper.contains(':')
        && upper.len() % 2 == 0
        && !upper.is_empty()
        && upper.chars().all(|c| c.is_ascii_hexdigit())
    {
        return colon_separated(&upper);
    }
    upper
}

/// True when `value` normalizes to a colon-separated MD5 or SHA-256 digest.
pub fn is_valid_fingerprint(value: &str) -> bool {
    let normalized = normalize_fingerprint(value);
    let pairs: Vec<&str> = normalized.split(':').collect();
    FINGERPRINT_LENGTHS.contains(&pairs.len())
        && pairs
            .iter()
            .all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Case-insensitive fingerprint comparison that tolerates missing colons.
pub fn fingerprints_match(a: &str, b: &str) -> bool {
    normalize_fingerprint(a) == normalize_fingerprint(b)
}

fn colon_separated(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len() + hex.len() / 2);
    for (idx, ch) in hex.chars().enumerate() {
        if idx > 0 && idx % 2 == 0 {
            out.push(':');
        }
        out.push(ch);
    }
    out
}
