//! Conversions between JavaScript values and core types.
//!
//! Plain JS objects are mapped onto the core's serde types with
//! `serde_wasm_bindgen`. Field names follow the core's camelCase renames, so
//! `{ naturalWidth, naturalHeight }` deserializes into a `MediaMeasurement`.

use easycrop_core::PointerKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Deserialize a JS value, naming the argument in the error message.
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Serialize a value into a plain JS object.
pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse the pointer kind passed from JavaScript.
///
/// Accepts `"mouse"` and `"touch"`, plus `"pen"`, which is handled like a mouse.
pub(crate) fn parse_pointer_kind(kind: &str) -> Result<PointerKind, String> {
    match kind {
        "mouse" | "pen" => Ok(PointerKind::Mouse),
        "touch" => Ok(PointerKind::Touch),
        other => Err(format!("Unknown pointer kind: {}", other)),
    }
}
