// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between the carver's grids and viewable images.

use crate::energy::EnergyField;
use crate::twodmap::Mask;
use image::{GrayImage, ImageBuffer, Luma};

/// Render the live energies of a field, scaled so the highest energy
/// is white.  A field with no energy at all renders black.
pub fn energy_to_image(field: &EnergyField) -> GrayImage {
    let (width, height) = (field.width(), field.height());
    let factor = (0..height)
        .flat_map(|y| field.live().row(y).iter().map(|p| p.energy))
        .max()
        .unwrap_or(0)
        .max(1);
    ImageBuffer::from_fn(width, height, |x, y| {
        let scaled = u64::from(field.energy_at(y, x)) * 255 / u64::from(factor);
        Luma([scaled as u8])
    })
}

/// Read a protection mask: any pixel brighter than mid-grey is
/// protected.
pub fn mask_from_image(image: &GrayImage) -> Mask {
    let (width, height) = image.dimensions();
    Mask::from_fn(width, height, |x, y| image.get_pixel(x, y)[0] > 127)
}

/// Protected pixels white, everything else black.
pub fn mask_to_image(mask: &Mask) -> GrayImage {
    let (width, height) = mask.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        Luma([if mask[(x, y)] { 255 } else { 0 }])
    })
}
