//! WASM bindings for dynjson-core.
//!
//! Exposes `format`, `format_pretty` and `validate` as `#[wasm_bindgen]`
//! functions callable from JavaScript/TypeScript. Built with
//! `wasm-bindgen-cli`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p dynjson-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/dynjson-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/dynjson_wasm.wasm
//! ```

use dynjson_core::{Style, Value};
use wasm_bindgen::prelude::*;

/// Parse a JSON string and re-serialize it compactly.
///
/// Throws a JS error carrying the line and column if the input is not valid JSON.
#[wasm_bindgen]
pub fn format(json: &str) -> std::result::Result<String, JsValue> {
    Value::parse(json)
        .map(|v| v.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a JSON string and re-serialize it with `indent` spaces per level.
#[wasm_bindgen(js_name = formatPretty)]
pub fn format_pretty(json: &str, indent: usize) -> std::result::Result<String, JsValue> {
    Value::parse(json)
        .map(|v| v.to_string_with(Style::Pretty { indent }))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check that a string is valid JSON without returning it.
#[wasm_bindgen]
pub fn validate(json: &str) -> std::result::Result<(), JsValue> {
    Value::parse(json)
        .map(drop)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
