//! Transposition properties over every letter, accidental and interval
//!
//! Complements the per-module unit tests with checks that must hold for any
//! (pitch, interval) pair: chromatic distance, letter distance, determinism.

use pitch_transposer_wasm::transposition::interval_names;
use pitch_transposer_wasm::{Accidental, Interval, Letter, PitchError, PitchSpelling};

fn all_pitches() -> Vec<PitchSpelling> {
    let mut pitches = Vec::new();
    for octave in 1..=6 {
        for letter in Letter::ALL {
            for accidental in Accidental::SEARCH_ORDER {
                pitches.push(PitchSpelling::new(letter, accidental, octave));
            }
        }
    }
    pitches
}

/// Every simple interval plus its first two compound forms ("M3", "M10", "M17")
fn all_intervals() -> Vec<String> {
    let mut intervals = Vec::new();
    for name in interval_names() {
        let interval: Interval = name.parse().unwrap();
        for octaves in 0..3 {
            let compound = Interval::new(interval.quality, interval.size + 7 * octaves);
            intervals.push(compound.to_string());
        }
    }
    intervals
}

fn diatonic_number(pitch: &PitchSpelling) -> i32 {
    pitch.octave * 7 + pitch.letter.index() as i32
}

#[test]
fn test_spec_scenarios() {
    let c4 = PitchSpelling::parse("C4").unwrap();
    assert_eq!(c4.letter, Letter::C);
    assert_eq!(c4.accidental, Accidental::Natural);
    assert_eq!(c4.octave, 4);
    assert_eq!(c4.chromatic_index(), 60);

    let cases = [
        ("C4", "M3", "E4", 64),
        ("C4", "P5", "G4", 67),
        ("B4", "m2", "C5", 72),
        ("C4", "P8", "C5", 72),
        ("F#4", "M3", "A#4", 70),
    ];
    for (note, interval, expected, index) in cases {
        let result = PitchSpelling::parse(note).unwrap().transpose_up(interval).unwrap();
        assert_eq!(result.to_string(), expected, "{} + {}", note, interval);
        assert_eq!(result.chromatic_index(), index, "{} + {}", note, interval);
    }
}

#[test]
fn test_chromatic_and_diatonic_correctness() {
    for pitch in all_pitches() {
        for name in all_intervals() {
            let interval: Interval = name.parse().unwrap();
            match pitch.transpose_up(&name) {
                Ok(result) => {
                    assert_eq!(
                        result.chromatic_index(),
                        pitch.chromatic_index() + interval.total_semitones().unwrap(),
                        "chromatic distance of {} + {}",
                        pitch,
                        name
                    );
                    assert_eq!(
                        diatonic_number(&result) - diatonic_number(&pitch),
                        interval.size as i32 - 1,
                        "letter distance of {} + {}",
                        pitch,
                        name
                    );
                }
                Err(err) => assert!(
                    matches!(err, PitchError::UnresolvableSpelling { .. }),
                    "{} + {} failed with {:?}",
                    pitch,
                    name,
                    err
                ),
            }
        }
    }
}

#[test]
fn test_natural_sources_always_resolve() {
    for pitch in all_pitches().into_iter().filter(|p| p.accidental == Accidental::Natural) {
        for name in all_intervals() {
            assert!(pitch.transpose_up(&name).is_ok(), "{} + {}", pitch, name);
        }
    }
}

#[test]
fn test_octave_keeps_letter_and_accidental() {
    for pitch in all_pitches() {
        let result = pitch.transpose_up("P8").unwrap();
        assert_eq!(result.letter, pitch.letter);
        assert_eq!(result.accidental, pitch.accidental);
        assert_eq!(result.octave, pitch.octave + 1);
    }
}

#[test]
fn test_transposition_is_deterministic() {
    for pitch in all_pitches() {
        for name in ["m2", "A4", "d7", "M13"] {
            assert_eq!(pitch.transpose_up(name), pitch.transpose_up(name));
        }
    }
}

#[test]
fn test_parse_display_roundtrip() {
    for pitch in all_pitches() {
        let reparsed = PitchSpelling::parse(&pitch.to_string()).unwrap();
        assert_eq!(reparsed, pitch);
        assert_eq!(reparsed.chromatic_index(), pitch.chromatic_index());
    }
}

#[test]
fn test_unknown_intervals_are_rejected() {
    let c4 = PitchSpelling::parse("C4").unwrap();
    for bad in ["m1", "M1", "P2", "P3", "M4", "m5", "P6", "P7", "M8", "m15", "Q3", "", "M"] {
        assert_eq!(
            c4.transpose_up(bad),
            Err(PitchError::UnknownInterval(bad.to_string())),
            "{}",
            bad
        );
    }
}
