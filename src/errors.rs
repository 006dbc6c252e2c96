//! Error types for pitch parsing and transposition
//!
//! Every failure is local and deterministic: the same input always fails
//! the same way, so callers surface these as validation errors rather
//! than retrying.

use thiserror::Error;

use crate::models::Letter;

/// Failures raised by note parsing, interval parsing and spelling resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// Note name does not match `<A-G><accidental><octave>`
    #[error("Malformed note name: '{0}'")]
    MalformedNoteName(String),

    /// Interval specifier is not a known (quality, size) pair
    #[error("Unknown interval: '{0}'")]
    UnknownInterval(String),

    /// No accidental in the double-flat..double-sharp range reaches the target
    #[error("No accidental spells chromatic index {target} on {letter}{octave}")]
    UnresolvableSpelling {
        letter: Letter,
        octave: i32,
        target: i32,
    },

    /// Staff height of the note does not fit in an `i32` for this reference
    #[error("Staff height of {note} is out of range for reference position {reference}")]
    StaffHeightOutOfRange { note: String, reference: i32 },
}
