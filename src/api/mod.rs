//! Pitch Transposer WASM API
//!
//! JavaScript-facing functions. The UI passes note and interval names as
//! strings; failures come back as rejected values carrying the error message.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error conversion
//! - `notes`: parse, transpose and staff placement operations

pub mod helpers;
pub mod notes;

pub use notes::{interval_names_js, note_position_js, parse_note_js, staff_height_js, transpose_up_js, NoteInfo};
