//! Decoder error types.

use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a configuration value.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The key material resolved to an empty string. Reported before any
    /// decryption is attempted.
    #[error("empty key")]
    EmptyKey,

    /// The cipher rejected a marked field (wrong key, corrupted or
    /// truncated ciphertext).
    #[error("cipher error: {0}")]
    Crypto(#[from] confseal_crypto::CryptoError),

    /// A marked field decrypted to bytes that are not valid UTF-8, so the
    /// plaintext cannot be stored back into a string field.
    #[error("decrypted value is not valid UTF-8: {0}")]
    NonUtf8Plaintext(#[from] std::string::FromUtf8Error),

    /// The value's shape cannot be traversed faithfully (e.g. a map whose
    /// keys are not strings or integers). This is an integration error in
    /// the target type, not a data error.
    #[error("unsupported value shape: {0}")]
    UnsupportedShape(#[from] serde_json::Error),
}
