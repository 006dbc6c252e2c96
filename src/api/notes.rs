//! Note name operations exposed to JavaScript
//!
//! The UI hands over note names and interval names as strings and gets
//! back note names, staff heights and serialized placement records.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::helpers::{parse_note, pitch_error, serialize};
use crate::models::{Accidental, Letter, PitchSpelling};
use crate::transposition::interval_names as table_interval_names;

/// Parsed note as seen from JavaScript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub name: String,
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: i32,
    pub chromatic_index: i32,
}

impl From<&PitchSpelling> for NoteInfo {
    fn from(pitch: &PitchSpelling) -> Self {
        Self {
            name: pitch.to_string(),
            letter: pitch.letter,
            accidental: pitch.accidental,
            octave: pitch.octave,
            chromatic_index: pitch.chromatic_index(),
        }
    }
}

/// Parse a note name such as "F#4"
///
/// Returns `{ name, letter, accidental, octave, chromaticIndex }`.
#[wasm_bindgen(js_name = parseNote)]
pub fn parse_note_js(name: &str) -> Result<JsValue, JsValue> {
    let pitch = parse_note(name)?;
    serialize(&NoteInfo::from(&pitch), "Failed to serialize note")
}

/// Transpose a note name upward by an interval name, returning the new note name
#[wasm_bindgen(js_name = transposeUp)]
pub fn transpose_up_js(name: &str, interval: &str) -> Result<String, JsValue> {
    let pitch = parse_note(name)?;
    let transposed = pitch.transpose_up(interval).map_err(pitch_error)?;
    Ok(transposed.to_string())
}

/// Staff line/space index of a note, given the index assigned to middle C
#[wasm_bindgen(js_name = staffHeight)]
pub fn staff_height_js(name: &str, middle_c_position: i32) -> Result<i32, JsValue> {
    parse_note(name)?.staff_height(middle_c_position).map_err(pitch_error)
}

/// Full staff placement for a note
///
/// Returns `{ position, height, accidental, accidentalXOffset }`.
#[wasm_bindgen(js_name = notePosition)]
pub fn note_position_js(
    name: &str,
    position: i32,
    middle_c_position: i32,
    accidental_x_offset: i32,
) -> Result<JsValue, JsValue> {
    let pitch = parse_note(name)?;
    let placement = pitch
        .staff_position(position, middle_c_position, accidental_x_offset)
        .map_err(pitch_error)?;
    serialize(&placement, "Failed to serialize staff position")
}

/// All simple interval names accepted by `transposeUp`, in table order
#[wasm_bindgen(js_name = intervalNames)]
pub fn interval_names_js() -> js_sys::Array {
    table_interval_names()
        .into_iter()
        .map(|name| JsValue::from_str(&name))
        .collect()
}
