//! The seven natural letter names, in cyclic staff order starting from C
//!
//! Each letter knows its position in the C..B cycle (used for diatonic
//! stepping) and its natural pitch class (used for chromatic arithmetic).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in diatonic order, C first
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Parse a letter from its uppercase character
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Position in the C..B cycle (C=0, B=6)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Natural pitch class of the letter (C=0, D=2, E=4, F=5, G=7, A=9, B=11)
    pub fn pitch_class(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Step `steps` letters upward, returning the new letter and the number
    /// of times the cycle wrapped past B (one octave per wrap)
    pub fn step_up(&self, steps: usize) -> (Letter, i32) {
        let raw = self.index() + steps;
        (Letter::ALL[raw % 7], (raw / 7) as i32)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
