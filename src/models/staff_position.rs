//! Staff placement handed to the notation renderer

use serde::{Deserialize, Serialize};

use super::accidental::Accidental;

/// Where a note sits on the staff, plus the layout data the renderer needs
///
/// Only `height` and `accidental` come from the pitch itself. `position` (the
/// horizontal slot) and `accidental_x_offset` (the shift that keeps an
/// accidental glyph clear of the notehead) are supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPosition {
    pub position: i32,
    pub height: i32,
    pub accidental: Accidental,
    pub accidental_x_offset: i32,
}
