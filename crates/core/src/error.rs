//! Typed errors for the key codec.

/// A global address key could not be decoded.
///
/// Each variant carries enough context to point at the offending part of the
/// token. Positions are character indices into the token as supplied.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The token contains a character outside the base64url alphabet.
    #[error("invalid character {ch:?} at position {position} in global address key")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Character index of `ch` within the token.
        position: usize,
    },

    /// The unpadded token length leaves a single dangling base64 character.
    #[error(
        "invalid global address key length {len} (base64url data cannot be {len} characters long)"
    )]
    InvalidLength {
        /// Length of the token with trailing padding removed.
        len: usize,
    },

    /// The base64 engine rejected the normalized token.
    ///
    /// Not produced for tokens that pass normalization.
    #[error("malformed global address key: {0}")]
    Malformed(#[from] base64::DecodeError),
}

impl DecodeError {
    /// Character index of the offending input, when the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidCharacter { position, .. } => Some(*position),
            DecodeError::InvalidLength { len } => Some(len.saturating_sub(1)),
            DecodeError::Malformed(_) => None,
        }
    }
}

/// Payload text could not be turned back into a key.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// A character does not fit in a single byte.
    #[error("character {ch:?} at position {position} cannot be encoded (above U+00FF)")]
    UnrepresentableChar {
        /// The rejected character.
        ch: char,
        /// Character index of `ch` within the payload.
        position: usize,
    },
}
