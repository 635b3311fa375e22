//! Global address key decoder.
//!
//! A global address key is an Experian QAS address token: a base64url
//! string whose decoded payload is a `~`-delimited list of `name=value`
//! fields. The main entry points are [`GlobalAddressKey::decode`] for
//! decoding once and querying many times, [`iterate_fields`] for scanning a
//! payload you already hold, and [`get_alt_key`] for the common alternate
//! identifier lookup.
//!
//! ```
//! use global_address_key::{GlobalAddressKey, get_alt_key};
//!
//! let key = GlobalAddressKey::decode("YT0xfmFsdF9rZXk9Mn5iPQ").unwrap();
//! let names: Vec<&str> = key.fields().map(|f| f.name).collect();
//! assert_eq!(names, ["a", "alt_key", "b"]);
//! assert_eq!(get_alt_key("YT0xfmFsdF9rZXk9Mn5iPQ").as_deref(), Some("2"));
//! ```

#![warn(missing_docs)]

/// Base64url codec with Latin-1 payload text.
pub mod codec;
/// Codec error types.
pub mod error;
/// `name=value` field scanning.
pub mod fields;
/// Owned decoded keys and token-level lookup.
pub mod key;
/// Built-in sample keys.
pub mod samples;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Codec
pub use codec::{decode, decode_bytes, encode, encode_bytes};

// Errors
pub use error::{DecodeError, EncodeError};

// Fields
pub use fields::{Field, Fields, find_field, iterate_fields};

// Keys
pub use key::{ALT_KEY, GlobalAddressKey, get_alt_key, get_field_by_name, try_get_field_by_name};

// Samples
pub use samples::{SAMPLES, Sample, sample};
