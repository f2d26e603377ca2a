//! Symmetric cipher backend for confseal.
//!
//! Turns caller-supplied key strings and plaintext bytes into portable
//! ciphertext text and back:
//!
//! 1. **Key derivation**: the key string is hashed with SHA-256 into a
//!    256-bit cipher key. Any non-empty string works as a key; no salt is
//!    involved, so the same key string always yields the same cipher key.
//!
//! 2. **Encryption**: ChaCha20-Poly1305 under a fresh random 12-byte nonce
//!    per call. The nonce is prepended to the ciphertext and the whole
//!    payload is base64-encoded, so a ciphertext is a single printable
//!    string that can be pasted into any text-based configuration format.
//!
//! Decryption authenticates before returning: a wrong key or tampered
//! ciphertext yields an error, never garbled plaintext.

mod cipher;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{generate_random_key, KEY_SIZE};
