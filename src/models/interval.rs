//! Interval specifiers such as "M3", "P5" or "m10"
//!
//! An `Interval` is the parsed quality and numeral size. Sizes above 8 are
//! compound; `reduce` folds them down to a simple interval plus a count of
//! whole octaves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PitchError;

/// Largest simple interval size (the octave)
pub const MAX_SIMPLE_SIZE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "d")]
    Diminished,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "M")]
    Major,
    #[serde(rename = "P")]
    Perfect,
    #[serde(rename = "A")]
    Augmented,
}

impl Quality {
    pub fn from_char(c: char) -> Option<Quality> {
        match c {
            'd' => Some(Quality::Diminished),
            'm' => Some(Quality::Minor),
            'M' => Some(Quality::Major),
            'P' => Some(Quality::Perfect),
            'A' => Some(Quality::Augmented),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Quality::Diminished => 'd',
            Quality::Minor => 'm',
            Quality::Major => 'M',
            Quality::Perfect => 'P',
            Quality::Augmented => 'A',
        }
    }
}

/// Parsed interval specifier; the size may be compound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub quality: Quality,
    pub size: u32,
}

/// Interval folded into a single octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleInterval {
    pub quality: Quality,
    /// Always in `1..=8`
    pub size: u32,
    pub compound_octaves: i32,
}

impl Interval {
    pub fn new(quality: Quality, size: u32) -> Self {
        Self { quality, size }
    }

    /// Parse `<d|m|M|P|A><positive integer>`
    ///
    /// Only the shape is checked here. Whether the (quality, size) pair
    /// exists is decided by the semitone table when it is looked up.
    pub fn parse(spec: &str) -> Result<Interval, PitchError> {
        let unknown = || PitchError::UnknownInterval(spec.to_string());

        let mut chars = spec.chars();
        let quality = chars.next().and_then(Quality::from_char).ok_or_else(unknown)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(unknown());
        }
        let size = digits.parse::<u32>().map_err(|_| unknown())?;
        if size == 0 {
            return Err(unknown());
        }

        Ok(Interval::new(quality, size))
    }

    /// Subtract octaves until the size fits in `1..=8`
    ///
    /// A ninth becomes a second plus one octave, a fifteenth an octave plus
    /// one octave. Reduction stops at 8, so "P15" is "P8" + 1 rather than
    /// "P1" + 2.
    pub fn reduce(&self) -> SimpleInterval {
        if self.size <= MAX_SIMPLE_SIZE {
            return SimpleInterval {
                quality: self.quality,
                size: self.size,
                compound_octaves: 0,
            };
        }

        // Same result as repeatedly subtracting 7 while size > 8
        let octaves = (self.size - 2) / 7;
        SimpleInterval {
            quality: self.quality,
            size: self.size - 7 * octaves,
            compound_octaves: octaves as i32,
        }
    }

    /// Total upward distance in semitones, including compound octaves
    pub fn total_semitones(&self) -> Result<i32, PitchError> {
        let simple = self.reduce();
        let semitones = crate::transposition::simple_semitones(simple.quality, simple.size)
            .ok_or_else(|| PitchError::UnknownInterval(self.to_string()))?;
        12i32
            .checked_mul(simple.compound_octaves)
            .and_then(|octaves| octaves.checked_add(semitones))
            .ok_or_else(|| PitchError::UnknownInterval(self.to_string()))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality.as_char(), self.size)
    }
}

impl FromStr for Interval {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}
