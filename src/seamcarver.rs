// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main engine
//!
//! A `SeamCarver` does all of its searching up front: given an image,
//! a target width and a protection mask, it finds every seam it will
//! need before handing anything back.  The seams are found on the
//! input image whether the image is to shrink or to grow; shrinking
//! drops the seam pixels, growing doubles them.

use crate::config::RgbWeights;
use crate::cost::build_cost_matrix;
use crate::energy::EnergyField;
use crate::error::{CarveError, Result};
use crate::greyscale::greyscale;
use crate::registry::SeamRegistry;
use crate::tracer::trace_seam;
use crate::twodmap::Mask;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use log::{debug, info};
use std::iter;

/// What the terminal pass does with the seam pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resize {
    Shrink,
    Grow,
    Identity,
}

impl Resize {
    pub fn between(in_width: u32, out_width: u32) -> Self {
        if out_width < in_width {
            Resize::Shrink
        } else if out_width > in_width {
            Resize::Grow
        } else {
            Resize::Identity
        }
    }

    /// How many output cells a source pixel occupies.
    fn copies(self, on_seam: bool) -> usize {
        match (self, on_seam) {
            (Resize::Shrink, true) => 0,
            (Resize::Grow, true) => 2,
            _ => 1,
        }
    }
}

/// A struct for holding the image to be carved and the seams found in
/// it.
pub struct SeamCarver<'a, I> {
    image: &'a I,
    mask: Mask,
    out_width: u32,
    mode: Resize,
    registry: SeamRegistry,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Prepare to carve `image` to `out_width` with no protected pixels
    /// and equal channel weights.
    pub fn new(image: &'a I, out_width: u32) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::with_mask(image, out_width, Mask::new(width, height), RgbWeights::default())
    }

    /// Prepare to carve `image` to `out_width`.  Pixels set in `mask`
    /// are consumed by seams ahead of everything else.  All of the
    /// seams are found here; any input problem is reported before
    /// the search starts.
    pub fn with_mask(
        image: &'a I,
        out_width: u32,
        mask: Mask,
        weights: RgbWeights,
    ) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width < 2 || height < 2 {
            return Err(CarveError::InvalidDimensions { width, height });
        }
        if mask.dimensions() != (width, height) {
            return Err(CarveError::MaskMismatch {
                mask_width: mask.width(),
                mask_height: mask.height(),
                width,
                height,
            });
        }
        let seams = width.max(out_width) - width.min(out_width);
        let limit = width / 2;
        if seams > limit {
            return Err(CarveError::ExcessiveSeamCount {
                seams,
                width,
                limit,
            });
        }
        weights.validate()?;

        let mode = Resize::between(width, out_width);
        info!(
            "carving {}x{} to width {}: {:?}, {} seams",
            width, height, out_width, mode, seams
        );

        let mut registry = SeamRegistry::new(width, height);
        if seams > 0 {
            let mut field = EnergyField::new(greyscale(image, &weights));
            for i in 0..seams {
                let cost = build_cost_matrix(&field, &mask);
                let seam = trace_seam(&cost, &field, &mask)?;
                debug_assert!(seam.is_connected());
                let columns = registry.record(&field, &seam);
                debug!("seam {} of {}: {:?}", i + 1, seams, columns);
                field.remove_seam(&seam);
            }
        }

        Ok(SeamCarver {
            image,
            mask,
            out_width,
            mode,
            registry,
        })
    }

    pub fn resize_mode(&self) -> Resize {
        self.mode
    }

    pub fn seam_count(&self) -> usize {
        self.registry.seam_count()
    }

    pub fn registry(&self) -> &SeamRegistry {
        &self.registry
    }

    /// The input columns that make up output row `y`, left to right.
    fn source_columns(&self, y: u32) -> Vec<u32> {
        let mode = self.mode;
        let removed = self.registry.removed();
        (0..self.image.width())
            .flat_map(|x| iter::repeat(x).take(mode.copies(removed[(x, y)])))
            .collect()
    }

    /// The carved image: `out_width` wide, as tall as the input.
    pub fn resize(&self) -> ImageBuffer<P, Vec<S>> {
        let height = self.image.height();
        let mut imgbuf = ImageBuffer::new(self.out_width, height);
        for y in 0..height {
            for (out_x, x) in self.source_columns(y).into_iter().enumerate() {
                imgbuf.put_pixel(out_x as u32, y, self.image.get_pixel(x, y));
            }
        }
        imgbuf
    }

    /// The protection mask, carried through the same removals or
    /// duplications as the image.
    pub fn mask_after_carving(&self) -> Mask {
        let height = self.image.height();
        let mut mask = Mask::new(self.out_width, height);
        for y in 0..height {
            for (out_x, x) in self.source_columns(y).into_iter().enumerate() {
                mask[(out_x as u32, y)] = self.mask[(x, y)];
            }
        }
        mask
    }

    /// A copy of the input with every seam pixel painted `color`.
    pub fn show_seams(&self, color: P) -> ImageBuffer<P, Vec<S>> {
        let (width, height) = self.image.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| {
            if self.registry.is_removed(x, y) {
                color
            } else {
                self.image.get_pixel(x, y)
            }
        })
    }
}

/// Carve `image` to `out_width` with no protection mask.
pub fn seamcarve<I, P, S>(image: &I, out_width: u32) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    Ok(SeamCarver::new(image, out_width)?.resize())
}
