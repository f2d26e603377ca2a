//! Key acquisition from the process environment.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::decoder::decode_inplace;
use crate::error::{DecodeError, DecodeResult};

/// Environment variable [`decode_by_env`] reads the key from by default.
pub const DEFAULT_KEY_ENV: &str = "CONFIG_KEY";

/// Options record for [`decode_by_env`].
pub struct DecodeOptions {
    env: String,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            env: DEFAULT_KEY_ENV.to_string(),
        }
    }
}

/// A single option applied over [`DecodeOptions`] before the key lookup.
pub struct DecodeOption(Box<dyn FnOnce(&mut DecodeOptions)>);

/// Overrides the environment variable the key is read from.
pub fn with_env(name: impl Into<String>) -> DecodeOption {
    let name = name.into();
    DecodeOption(Box::new(move |options| options.env = name))
}

/// Decodes `value` in place using a key read from the environment.
///
/// Options are applied in order over the default [`DecodeOptions`]. The
/// variable is read once per call, with no caching. An unset or empty
/// variable yields [`DecodeError::EmptyKey`] and leaves `value` untouched.
pub fn decode_by_env<T>(
    value: &mut T,
    opts: impl IntoIterator<Item = DecodeOption>,
) -> DecodeResult<()>
where
    T: Serialize + DeserializeOwned,
{
    let mut options = DecodeOptions::default();
    for DecodeOption(apply) in opts {
        apply(&mut options);
    }

    let key = std::env::var(&options.env).unwrap_or_default();
    if key.is_empty() {
        return Err(DecodeError::EmptyKey);
    }
    decode_inplace(value, &key)
}
