//! Upward transposition by a named interval
//!
//! The target is fixed twice over: the interval's semitone count gives the
//! chromatic index, and its numeral gives the letter. The accidental is
//! whatever makes that letter land on that index.
//!
//! Example: F#4 + M3
//!   chromatic: 66 + 4 = 70
//!   letter:    F + 2 steps = A, octave 4, natural index 69
//!   accidental: 70 - 69 = +1 → A#4 (not Bb4)

use crate::errors::PitchError;
use crate::models::pitch_spelling::MAX_OCTAVE;
use crate::models::{Accidental, Interval, PitchSpelling};

use super::interval_table::simple_semitones;

/// Transpose `source` up by `interval` (e.g. "M3", "P5", "m10")
///
/// Fails with `UnknownInterval` if the specifier is not in the interval
/// table, and with `UnresolvableSpelling` if the target letter would need
/// more than a double sharp or double flat. `source` is never modified.
pub fn transpose_up(source: &PitchSpelling, interval: &str) -> Result<PitchSpelling, PitchError> {
    let unknown = || PitchError::UnknownInterval(interval.to_string());

    let simple = Interval::parse(interval)?.reduce();
    let semitones = simple_semitones(simple.quality, simple.size).ok_or_else(unknown)?;

    let target_index = 12i32
        .checked_mul(simple.compound_octaves)
        .zip(source.checked_chromatic_index())
        .and_then(|(octaves, index)| index.checked_add(octaves))
        .and_then(|index| index.checked_add(semitones))
        .ok_or_else(unknown)?;

    // Letter carry first, then whole compound octaves
    let (target_letter, letter_carry) = source.letter.step_up((simple.size - 1) as usize);
    let target_octave = source
        .octave
        .checked_add(letter_carry)
        .and_then(|octave| octave.checked_add(simple.compound_octaves))
        .filter(|octave| *octave <= MAX_OCTAVE)
        .ok_or_else(unknown)?;

    let natural_index = PitchSpelling::new(target_letter, Accidental::Natural, target_octave)
        .checked_chromatic_index()
        .ok_or_else(unknown)?;
    let accidental = resolve_accidental(natural_index, target_index).ok_or_else(|| {
        log::warn!(
            "cannot spell {} + {}: {}{} has no accidental reaching {}",
            source,
            interval,
            target_letter,
            target_octave,
            target_index
        );
        PitchError::UnresolvableSpelling {
            letter: target_letter,
            octave: target_octave,
            target: target_index,
        }
    })?;

    let spelled = format!("{}{}{}", target_letter, accidental.symbol(), target_octave);
    let result = PitchSpelling::parse(&spelled)?;

    log::debug!("transposed {} up {} → {}", source, interval, result);
    Ok(result)
}

/// First accidental, in `Accidental::SEARCH_ORDER`, that moves `natural_index` onto `target_index`
fn resolve_accidental(natural_index: i32, target_index: i32) -> Option<Accidental> {
    Accidental::SEARCH_ORDER
        .iter()
        .copied()
        .find(|accidental| natural_index.checked_add(accidental.semitone_offset()) == Some(target_index))
}
