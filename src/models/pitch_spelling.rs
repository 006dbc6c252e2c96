//! Parsed note names
//!
//! A `PitchSpelling` is the letter, accidental and octave of a note name such
//! as "F#4". The chromatic index (MIDI numbering, C4 = 60) is always derived
//! from those three fields and never stored on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::accidental::Accidental;
use super::letter::Letter;
use super::staff_position::StaffPosition;
use crate::errors::PitchError;

/// Staff line offset from C, indexed by pitch class mod 12
///
/// Black-key slots are filled but never read: an accidental does not move a
/// note to a different line, so lookups always use the natural letter's class.
const LINE_MAP: [i32; 12] = [0, -1, 1, -1, 2, 3, -3, 4, -4, 5, -5, 6];

/// Octave whose C sits on the caller's reference position
const REFERENCE_OCTAVE: i32 = 4;

/// Largest octave magnitude whose chromatic index still fits in an `i32`
pub const MAX_OCTAVE: i32 = i32::MAX / 12 - 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchSpelling {
    pub letter: Letter,
    pub accidental: Accidental,
    /// Scientific pitch notation octave (octave numbers change at C)
    pub octave: i32,
}

impl PitchSpelling {
    pub fn new(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    /// Parse a note name of the form `<A-G><accidental><octave>`
    ///
    /// Examples:
    ///   "C4"   → C natural, octave 4
    ///   "Cb4"  → C flat, octave 4
    ///   "Bbb3" → B double-flat, octave 3
    ///   "F#x5" → error (only one accidental is allowed)
    ///   "C-1"  → C natural, octave -1
    pub fn parse(name: &str) -> Result<PitchSpelling, PitchError> {
        let malformed = || PitchError::MalformedNoteName(name.to_string());

        let mut chars = name.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(malformed)?;

        let (accidental, octave_text) = Accidental::split_prefix(chars.as_str());
        let octave = octave_text.parse::<i32>().map_err(|_| malformed())?;
        if !(-MAX_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(malformed());
        }

        Ok(PitchSpelling::new(letter, accidental, octave))
    }

    /// Absolute semitone number: `12 * (octave + 1) + pitch class + accidental`
    ///
    /// Parsed pitches always fit. Use `checked_chromatic_index` for pitches
    /// built by arithmetic on octaves.
    pub fn chromatic_index(&self) -> i32 {
        12 * (self.octave + 1) + self.letter.pitch_class() + self.accidental.semitone_offset()
    }

    /// Chromatic index, or `None` if it does not fit in an `i32`
    pub fn checked_chromatic_index(&self) -> Option<i32> {
        self.octave
            .checked_add(1)
            .and_then(|octave| octave.checked_mul(12))
            .and_then(|index| index.checked_add(self.letter.pitch_class()))
            .and_then(|index| index.checked_add(self.accidental.semitone_offset()))
    }

    /// Line/space index of this note on a staff where C4 sits at `reference_position`
    ///
    /// Indices grow downward: each diatonic step up subtracts one, each octave
    /// up subtracts seven. The accidental does not affect the result.
    ///
    /// Fails with `StaffHeightOutOfRange` if the height does not fit in an `i32`.
    pub fn staff_height(&self, reference_position: i32) -> Result<i32, PitchError> {
        let line = LINE_MAP[(self.letter.pitch_class() % 12) as usize];
        self.octave
            .checked_sub(REFERENCE_OCTAVE)
            .and_then(|octaves| octaves.checked_mul(7))
            .and_then(|steps| reference_position.checked_sub(line)?.checked_sub(steps))
            .ok_or_else(|| PitchError::StaffHeightOutOfRange {
                note: self.to_string(),
                reference: reference_position,
            })
    }

    /// Full placement record for the renderer
    ///
    /// `position` and `accidental_x_offset` are layout data owned by the
    /// caller and are carried through unchanged.
    pub fn staff_position(
        &self,
        position: i32,
        reference_position: i32,
        accidental_x_offset: i32,
    ) -> Result<StaffPosition, PitchError> {
        Ok(StaffPosition {
            position,
            height: self.staff_height(reference_position)?,
            accidental: self.accidental,
            accidental_x_offset,
        })
    }

    /// Transpose upward by an interval such as "M3", "P5" or "m10"
    pub fn transpose_up(&self, interval: &str) -> Result<PitchSpelling, PitchError> {
        crate::transposition::transpose_up(self, interval)
    }
}

impl fmt::Display for PitchSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}

impl FromStr for PitchSpelling {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchSpelling::parse(s)
    }
}
