//! Shared helpers for WASM API operations
//!
//! Serialization and error conversion used by every exported function.
//! Errors are logged here, once, before they cross into JavaScript.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::PitchError;
use crate::models::PitchSpelling;

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Conversion Helpers
// ============================================================================

/// Convert a pitch error to a JsValue carrying its message
pub fn pitch_error(err: PitchError) -> JsValue {
    let msg = err.to_string();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Parse a note name, converting failures for JavaScript
pub fn parse_note(name: &str) -> Result<PitchSpelling, JsValue> {
    PitchSpelling::parse(name).map_err(pitch_error)
}
