//! Accidentals recognized in note names
//!
//! The set is closed: double-flat through double-sharp. Spellings that would
//! need anything further (triple sharps and so on) are reported as errors by
//! the transposer instead of being represented here.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Accidental, serialized as its signed semitone offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Accidental {
    /// Double flat (bb)
    DoubleFlat = -2,

    /// Flat (b)
    Flat = -1,

    /// No accidental
    Natural = 0,

    /// Sharp (#)
    Sharp = 1,

    /// Double sharp (x)
    DoubleSharp = 2,
}

impl Accidental {
    /// Fixed order in which the transposer tries accidentals
    pub const SEARCH_ORDER: [Accidental; 5] = [
        Accidental::DoubleFlat,
        Accidental::Flat,
        Accidental::Natural,
        Accidental::Sharp,
        Accidental::DoubleSharp,
    ];

    /// Get the symbol used in note names
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Get the semitone offset for this accidental
    pub fn semitone_offset(&self) -> i32 {
        *self as i8 as i32
    }

    /// Split a leading accidental off `text`, returning it with the remainder
    ///
    /// The two-character spelling is tried before the one-character ones, so
    /// "bb4" is a double flat and "b4" a flat. Anything else is natural and
    /// leaves `text` untouched.
    pub fn split_prefix(text: &str) -> (Accidental, &str) {
        if let Some(rest) = text.strip_prefix("bb") {
            return (Accidental::DoubleFlat, rest);
        }

        match text.chars().next() {
            Some('b') => (Accidental::Flat, &text[1..]),
            Some('#') => (Accidental::Sharp, &text[1..]),
            Some('x') => (Accidental::DoubleSharp, &text[1..]),
            _ => (Accidental::Natural, text),
        }
    }
}

impl Default for Accidental {
    fn default() -> Self {
        Accidental::Natural
    }
}
