//! ChaCha20-Poly1305 encryption of byte payloads to portable ciphertext text.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

use crate::error::{CryptoError, CryptoResult};
use crate::key::derive_key;

/// ChaCha20-Poly1305 nonce size in bytes, prepended to the ciphertext.
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Encrypts `plaintext` under `key` and returns base64 ciphertext text.
///
/// A fresh random nonce is drawn per call, so encrypting the same plaintext
/// twice yields different ciphertexts. The output layout before encoding is
/// `nonce || ciphertext || tag`.
pub fn encrypt(plaintext: &[u8], key: &str) -> CryptoResult<String> {
    let key_bytes = derive_key(key);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key_bytes.as_ref()));
    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

    let sealed = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut payload = Vec::with_capacity(NONCE_SIZE + sealed.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&sealed);
    Ok(BASE64.encode(payload))
}

/// Decrypts ciphertext text produced by [`encrypt`] under the same `key`.
///
/// Fails on malformed base64, truncated payloads, a wrong key, or tampered
/// data. The Poly1305 tag is verified before any plaintext is returned.
pub fn decrypt(ciphertext: &str, key: &str) -> CryptoResult<Vec<u8>> {
    let payload = BASE64
        .decode(ciphertext)
        .map_err(|e| CryptoError::InvalidCiphertext(format!("invalid base64: {e}")))?;

    if payload.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::InvalidCiphertext(format!(
            "payload too short: {} bytes",
            payload.len()
        )));
    }

    let (nonce, sealed) = payload.split_at(NONCE_SIZE);
    let key_bytes = derive_key(key);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key_bytes.as_ref()));

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| CryptoError::Decryption("wrong key or tampered data".to_string()))
}
