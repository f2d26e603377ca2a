//! Decrypts marked string fields embedded in configuration values.
//!
//! Configuration files often need a handful of secrets (passwords, API
//! tokens) next to plain settings. confseal lets those secrets be stored
//! encrypted: any string field whose content starts with the [`MARKER`]
//! prefix `ENC~` holds ciphertext, and [`decode`] walks the whole
//! configuration value, decrypting exactly those fields and leaving
//! everything else untouched.
//!
//! The walk works on any type implementing `Serialize + DeserializeOwned`,
//! however deeply nested: structs, maps, vectors, options, enums, and
//! dynamically typed `serde_json::Value` slots all keep their exact shape.
//! Map keys are never decrypted, only values.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct DbConfig {
//!     host: String,
//!     password: String,
//! }
//!
//! let key = "my secret key";
//! let config = DbConfig {
//!     host: "localhost".to_string(),
//!     password: confseal::encrypt_string("hunter2", key)?,
//! };
//!
//! let decoded: DbConfig = confseal::decode(&config, key)?;
//! assert_eq!(decoded.host, "localhost");
//! assert_eq!(decoded.password, "hunter2");
//! # Ok::<(), confseal::DecodeError>(())
//! ```
//!
//! For the common "key lives in an environment variable" setup, use
//! [`decode_by_env`], which reads `CONFIG_KEY` (or a variable named via
//! [`with_env`]) and decodes in place.

mod decoder;
mod env;
mod error;

pub use confseal_crypto::{decrypt, encrypt, generate_random_key, CryptoError, CryptoResult};
pub use decoder::{decode, decode_inplace, encrypt_string, MARKER};
pub use env::{decode_by_env, with_env, DecodeOption, DecodeOptions, DEFAULT_KEY_ENV};
pub use error::{DecodeError, DecodeResult};
