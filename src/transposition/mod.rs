pub mod interval_table;
pub mod transpose_up;

pub use interval_table::{interval_names, simple_semitones};
pub use transpose_up::transpose_up;
