//! Depth-first rewrite of marked string leaves inside arbitrary values.
//!
//! The transformer does not inspect host types directly. It serializes the
//! value into a `serde_json::Value` tree, rewrites marked strings in that
//! tree, and deserializes the tree back into the original static type:
//!
//! - structs and maps become objects (every field visited, keys untouched),
//! - vectors and tuples become arrays (order and length preserved),
//! - `Option::None` becomes null and stays null,
//! - enums keep their serde tag, so the concrete variant survives,
//! - non-string scalars pass through the tree unchanged.
//!
//! The result is a freshly allocated value sharing no storage with the
//! source. A single cipher failure aborts the walk; the partially rewritten
//! tree is dropped internally and never observable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

/// Prefix identifying a string field's content as ciphertext.
pub const MARKER: &str = "ENC~";

/// Returns a copy of `value` with every `ENC~`-marked string field
/// decrypted under `key`.
///
/// The source is never mutated. Fails on the first field the cipher
/// rejects, on an empty key, or on a shape serde cannot round-trip.
pub fn decode<T>(value: &T, key: &str) -> DecodeResult<T>
where
    T: Serialize + DeserializeOwned,
{
    if key.is_empty() {
        return Err(DecodeError::EmptyKey);
    }

    let mut tree = serde_json::to_value(value)?;
    rewrite(&mut tree, key)?;
    Ok(serde_json::from_value(tree)?)
}

/// Like [`decode`], but overwrites `value` with the result.
///
/// On error the target is left exactly as it was; the overwrite only
/// happens after the whole walk has succeeded.
pub fn decode_inplace<T>(value: &mut T, key: &str) -> DecodeResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let decoded = decode(&*value, key)?;
    *value = decoded;
    Ok(())
}

/// Encrypts `plaintext` under `key` and prefixes the ciphertext with
/// [`MARKER`], producing text ready to paste into a configuration field.
pub fn encrypt_string(plaintext: &str, key: &str) -> DecodeResult<String> {
    if key.is_empty() {
        return Err(DecodeError::EmptyKey);
    }

    let ciphertext = confseal_crypto::encrypt(plaintext.as_bytes(), key)?;
    Ok(format!("{MARKER}{ciphertext}"))
}

fn rewrite(node: &mut Value, key: &str) -> DecodeResult<()> {
    match node {
        Value::String(content) => {
            if let Some(ciphertext) = content.strip_prefix(MARKER) {
                let plaintext = confseal_crypto::decrypt(ciphertext, key)?;
                *content = String::from_utf8(plaintext)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite(item, key)?;
            }
        }
        Value::Object(fields) => {
            // Values only. Keys stay verbatim even when marked.
            for value in fields.values_mut() {
                rewrite(value, key)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
    Ok(())
}
