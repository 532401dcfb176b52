// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carver.
//!
//! Everything except `TraceInconsistency` is a rejection of the
//! caller's input, reported before any work begins.  A trace
//! inconsistency means the cost recurrence and the traceback disagree,
//! which is a bug in this crate and not a property of the image.

use failure::Fail;

#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum CarveError {
    #[fail(
        display = "image is {}x{}; both dimensions must be at least 2 to carve",
        width, height
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[fail(
        display = "cannot carve {} seams from an image {} pixels wide (at most {})",
        seams, width, limit
    )]
    ExcessiveSeamCount { seams: u32, width: u32, limit: u32 },

    #[fail(
        display = "protection mask is {}x{} but the image is {}x{}",
        mask_width, mask_height, width, height
    )]
    MaskMismatch {
        mask_width: u32,
        mask_height: u32,
        width: u32,
        height: u32,
    },

    #[fail(display = "greyscale weights must not all be zero")]
    InvalidWeights,

    #[fail(display = "could not read greyscale weights from {:?}; expected R,G,B", _0)]
    MalformedWeights(String),

    #[fail(
        display = "seam trace found no predecessor reproducing the cost at row {}, column {}",
        row, column
    )]
    TraceInconsistency { row: u32, column: u32 },
}

pub type Result<T> = std::result::Result<T, CarveError>;
