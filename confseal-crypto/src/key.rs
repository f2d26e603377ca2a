//! Cipher key material derived from caller-supplied key strings.

use rand::distr::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Size of the derived cipher key in bytes.
pub const KEY_SIZE: usize = 32;

/// Hashes an arbitrary key string into a 256-bit cipher key.
///
/// The derived key is wiped from memory when dropped.
pub(crate) fn derive_key(key: &str) -> Zeroizing<[u8; KEY_SIZE]> {
    let digest = Sha256::digest(key.as_bytes());
    Zeroizing::new(digest.into())
}

/// Generates a random 64-character alphanumeric key string.
///
/// Convenience for callers that need fresh key material, e.g. to seed the
/// environment variable the decoder reads its key from.
pub fn generate_random_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
