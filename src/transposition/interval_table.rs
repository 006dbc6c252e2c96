//! Semitone distances for every simple interval
//!
//! Format: (quality, size 1-8) → semitones above the lower note
//!
//! Example:
//!   (P, 1) → 0     (unison)
//!   (M, 3) → 4     (major third)
//!   (A, 4) → 6     (tritone)
//!   (d, 1) → -1    (diminished unison lowers by a semitone)
//!
//! Pairs missing from the table (m1, M4, P3 ...) do not exist.

use crate::models::interval::Quality;

const INTERVAL_TABLE: [(Quality, u32, i32); 28] = {
    use Quality::*;
    [
        (Diminished, 1, -1),
        (Perfect, 1, 0),
        (Augmented, 1, 1),
        (Diminished, 2, 0),
        (Minor, 2, 1),
        (Major, 2, 2),
        (Augmented, 2, 3),
        (Diminished, 3, 2),
        (Minor, 3, 3),
        (Major, 3, 4),
        (Augmented, 3, 5),
        (Diminished, 4, 4),
        (Perfect, 4, 5),
        (Augmented, 4, 6),
        (Diminished, 5, 6),
        (Perfect, 5, 7),
        (Augmented, 5, 8),
        (Diminished, 6, 7),
        (Minor, 6, 8),
        (Major, 6, 9),
        (Augmented, 6, 10),
        (Diminished, 7, 9),
        (Minor, 7, 10),
        (Major, 7, 11),
        (Augmented, 7, 12),
        (Diminished, 8, 11),
        (Perfect, 8, 12),
        (Augmented, 8, 13),
    ]
};

/// Look up the semitone distance of a simple interval
pub fn simple_semitones(quality: Quality, size: u32) -> Option<i32> {
    INTERVAL_TABLE
        .iter()
        .find(|(q, s, _)| *q == quality && *s == size)
        .map(|&(_, _, semitones)| semitones)
}

/// Names of all simple intervals, in table order ("d1", "P1", "A1", "d2", ...)
pub fn interval_names() -> Vec<String> {
    INTERVAL_TABLE
        .iter()
        .map(|(quality, size, _)| format!("{}{}", quality.as_char(), size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_intervals() {
        assert_eq!(simple_semitones(Quality::Perfect, 1), Some(0));
        assert_eq!(simple_semitones(Quality::Perfect, 4), Some(5));
        assert_eq!(simple_semitones(Quality::Perfect, 5), Some(7));
        assert_eq!(simple_semitones(Quality::Perfect, 8), Some(12));
    }

    #[test]
    fn test_major_minor_intervals() {
        assert_eq!(simple_semitones(Quality::Minor, 2), Some(1));
        assert_eq!(simple_semitones(Quality::Major, 3), Some(4));
        assert_eq!(simple_semitones(Quality::Minor, 6), Some(8));
        assert_eq!(simple_semitones(Quality::Major, 7), Some(11));
    }

    #[test]
    fn test_altered_intervals() {
        assert_eq!(simple_semitones(Quality::Diminished, 1), Some(-1));
        assert_eq!(simple_semitones(Quality::Augmented, 4), Some(6));
        assert_eq!(simple_semitones(Quality::Diminished, 5), Some(6));
        assert_eq!(simple_semitones(Quality::Augmented, 8), Some(13));
    }

    #[test]
    fn test_missing_pairs() {
        assert_eq!(simple_semitones(Quality::Minor, 1), None);
        assert_eq!(simple_semitones(Quality::Major, 4), None);
        assert_eq!(simple_semitones(Quality::Perfect, 3), None);
        assert_eq!(simple_semitones(Quality::Major, 8), None);
        assert_eq!(simple_semitones(Quality::Perfect, 9), None);
    }

    #[test]
    fn test_augmented_is_one_above_major_or_perfect() {
        for size in 1..=8 {
            let upper = simple_semitones(Quality::Major, size)
                .or_else(|| simple_semitones(Quality::Perfect, size))
                .unwrap();
            assert_eq!(simple_semitones(Quality::Augmented, size), Some(upper + 1));
        }
    }

    #[test]
    fn test_interval_names() {
        let names = interval_names();
        assert_eq!(names.len(), 28);
        assert_eq!(&names[..4], &["d1", "P1", "A1", "d2"]);
        assert_eq!(names.last().map(String::as_str), Some("A8"));
    }
}
