//! WASM bindings for the global address key decoder.
//!
//! Exposes decode, lookup, encode, and the sample keys to JavaScript via
//! `wasm-bindgen`. Field lists come back as arrays of `[name, value]`
//! tuples using `serde-wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use global_address_key as gak;

// ── Public API ──────────────────────────────────────────────────────────

/// Decode a key and return its fields as `[name, value][]`, in order.
///
/// Throws with a human-readable message when the key is malformed.
#[wasm_bindgen]
pub fn decode(token: &str) -> Result<JsValue, JsError> {
    let key = decode_key(token)?;
    let pairs: Vec<(&str, &str)> = key.fields().map(|f| (f.name, f.value)).collect();
    to_js(&pairs)
}

/// Decode a key and return the raw payload text.
#[wasm_bindgen(js_name = "decodePayload")]
pub fn decode_payload(token: &str) -> Result<String, JsError> {
    Ok(decode_key(token)?.into_payload())
}

/// Value of the first field named `name`, or `null` when it is missing,
/// empty, or the key does not decode.
#[wasm_bindgen(js_name = "getFieldByName")]
pub fn get_field_by_name(token: &str, name: &str) -> Option<String> {
    gak::get_field_by_name(token, name)
}

/// The `alt_key` field, or `null`.
#[wasm_bindgen(js_name = "getAltKey")]
pub fn get_alt_key(token: &str) -> Option<String> {
    gak::get_alt_key(token)
}

/// Encode payload text as a key.
#[wasm_bindgen]
pub fn encode(text: &str) -> Result<String, JsError> {
    gak::encode(text).map_err(|e| JsError::new(&e.to_string()))
}

/// Built-in sample keys as `{ label, key }[]`.
#[wasm_bindgen]
pub fn samples() -> Result<JsValue, JsError> {
    let items: Vec<SampleJs> = gak::SAMPLES
        .iter()
        .map(|s| SampleJs {
            label: s.label,
            key: s.token,
        })
        .collect();
    to_js(&items)
}

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SampleJs {
    label: &'static str,
    key: &'static str,
}

fn decode_key(token: &str) -> Result<gak::GlobalAddressKey, JsError> {
    gak::GlobalAddressKey::decode(token).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}
