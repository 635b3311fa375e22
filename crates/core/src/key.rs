//! Decoded keys and field lookup.

use std::fmt;
use std::str::FromStr;

use crate::codec;
use crate::error::{DecodeError, EncodeError};
use crate::fields::{Field, Fields, find_field, iterate_fields};

/// Name of the field holding the alternate external identifier
/// (for Australian keys, the GNAF persistent identifier or PAF id).
pub const ALT_KEY: &str = "alt_key";

/// A decoded global address key.
///
/// Owns the decoded payload so it can be iterated and queried repeatedly
/// without decoding the token again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalAddressKey {
    payload: String,
}

impl GlobalAddressKey {
    /// Decode a token.
    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        let payload = codec::decode(token)?;
        let key = Self { payload };
        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut fields = key.fields();
            for _ in fields.by_ref() {}
            let remainder = fields.remainder();
            if !remainder.is_empty() {
                tracing::debug!(
                    ignored_len = remainder.chars().count(),
                    "global address key has trailing content that is not a field"
                );
            }
        }
        Ok(key)
    }

    /// Wrap an already decoded payload.
    pub fn from_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The decoded payload text.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Consume the key, returning the payload text.
    pub fn into_payload(self) -> String {
        self.payload
    }

    /// Iterate the fields in payload order.
    pub fn fields(&self) -> Fields<'_> {
        iterate_fields(&self.payload)
    }

    /// Collect every field in payload order.
    pub fn to_fields(&self) -> Vec<Field<'_>> {
        self.fields().collect()
    }

    /// Value of the first field named `name`, if present and non-empty.
    pub fn get(&self, name: &str) -> Option<&str> {
        find_field(&self.payload, name)
    }

    /// Value of the `alt_key` field, if present and non-empty.
    pub fn alt_key(&self) -> Option<&str> {
        self.get(ALT_KEY)
    }

    /// Re-encode the payload as a token.
    pub fn encode(&self) -> Result<String, EncodeError> {
        codec::encode(&self.payload)
    }
}

impl FromStr for GlobalAddressKey {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for GlobalAddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.payload)
    }
}

/// Look up a field in a token, propagating decode failures.
///
/// `Ok(None)` when the first field named `name` is missing or empty.
pub fn try_get_field_by_name(token: &str, name: &str) -> Result<Option<String>, DecodeError> {
    let payload = codec::decode(token)?;
    Ok(find_field(&payload, name).map(str::to_owned))
}

/// Look up a field in a token.
///
/// Returns `None` when the field is missing or empty, and also when the
/// token does not decode. Use [`try_get_field_by_name`] to tell those apart.
pub fn get_field_by_name(token: &str, name: &str) -> Option<String> {
    try_get_field_by_name(token, name).ok().flatten()
}

/// The `alt_key` field of a token, if the token decodes and carries one.
pub fn get_alt_key(token: &str) -> Option<String> {
    get_field_by_name(token, ALT_KEY)
}
