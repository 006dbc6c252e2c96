//! Models module for the pitch transposer
//!
//! Note names, accidentals, intervals and staff placement. All of them are
//! small immutable value types.

pub mod accidental;
pub mod interval;
pub mod letter;
pub mod pitch_spelling;
pub mod staff_position;

// Re-export commonly used types
pub use accidental::Accidental;
pub use interval::{Interval, Quality, SimpleInterval};
pub use letter::Letter;
pub use pitch_spelling::PitchSpelling;
pub use staff_position::StaffPosition;
