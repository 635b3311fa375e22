//! Base64url codec for global address keys.
//!
//! Keys travel in the URL-safe base64 alphabet (`-` and `_` in place of `+`
//! and `/`), usually without padding. Decoding accepts either alphabet and
//! any amount of trailing `=` padding, then re-pads the token before handing
//! it to a standard base64 engine.
//!
//! The decoded payload is treated as Latin-1: every byte becomes exactly one
//! `char` in the range U+0000..=U+00FF. Bytes are never reassembled into
//! UTF-8 sequences.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::{DecodeError, EncodeError};

/// Padding character accepted (and ignored) at the end of a token.
pub const PAD: char = '=';

// `normalize` always re-pads, so canonical padding is required here.
// Non-zero trailing bits are accepted.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Rewrite a token into padded standard base64.
///
/// Translates `-`→`+` and `_`→`/`, drops any trailing `=` and pads back to a
/// multiple of four. Fails on characters outside the alphabet and on lengths
/// that leave a single dangling character.
pub fn normalize(token: &str) -> Result<String, DecodeError> {
    let unpadded = token.trim_end_matches(PAD);
    let mut out = String::with_capacity(unpadded.len() + 3);

    for (position, ch) in unpadded.chars().enumerate() {
        let mapped = match ch {
            '-' => '+',
            '_' => '/',
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => ch,
            _ => return Err(DecodeError::InvalidCharacter { ch, position }),
        };
        out.push(mapped);
    }

    match out.len() % 4 {
        0 => {}
        2 => out.push_str("=="),
        3 => out.push(PAD),
        _ => return Err(DecodeError::InvalidLength { len: out.len() }),
    }

    Ok(out)
}

/// Decode a token into raw payload bytes.
pub fn decode_bytes(token: &str) -> Result<Vec<u8>, DecodeError> {
    let normalized = normalize(token)?;
    Ok(STANDARD_LENIENT.decode(normalized)?)
}

/// Decode a token into payload text, one `char` per decoded byte.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let bytes = decode_bytes(token).inspect_err(|e| {
        tracing::debug!(error = %e, token_len = token.len(), "global address key failed to decode");
    })?;
    Ok(latin1_to_string(&bytes))
}

/// Encode raw bytes as an unpadded base64url token.
pub fn encode_bytes(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Encode payload text as an unpadded base64url token.
///
/// This is the inverse of [`decode`]: each `char` must fit in one byte.
pub fn encode(text: &str) -> Result<String, EncodeError> {
    let bytes = string_to_latin1(text)?;
    Ok(encode_bytes(&bytes))
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn string_to_latin1(text: &str) -> Result<Vec<u8>, EncodeError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch).map_err(|_| EncodeError::UnrepresentableChar { ch, position })
        })
        .collect()
}
