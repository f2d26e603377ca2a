//! Cipher error types.

use thiserror::Error;

/// Result type for cipher operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while encrypting or decrypting.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),
}
