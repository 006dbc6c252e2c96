//! Pitch Transposer WASM Module
//!
//! Parses note names, places them on a staff relative to a clef anchor, and
//! transposes them upward by named intervals with correct spelling.

pub mod errors;
pub mod models;
pub mod transposition;
pub mod api;

// Re-export commonly used types
pub use errors::PitchError;
pub use models::{Accidental, Interval, Letter, PitchSpelling, Quality, StaffPosition};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Pitch transposer WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {}", err);
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
