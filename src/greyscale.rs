// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image -> intensity grid

use crate::config::RgbWeights;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;

/// Single-channel intensities of the image being carved.
pub type GreyscaleGrid = TwoDimensionalMap<u32>;

/// Fold every pixel of `image` down to its weighted intensity.  This
/// is generic on the image type; any pixel that can be viewed as RGB
/// will do.
pub fn greyscale<I, P, S>(image: &I, weights: &RgbWeights) -> GreyscaleGrid
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut grey = GreyscaleGrid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        grey[(x, y)] = weights.intensity(&image.get_pixel(x, y).to_rgb());
    }
    grey
}
