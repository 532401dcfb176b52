// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Addressable two-dimensional grids.
//!
//! Every intermediate product of the carver is one of these: the
//! greyscale intensities, the protection and removal masks, and the
//! cumulative cost matrix rebuilt for each seam.

use std::ops::{Index, IndexMut};

/// A `width × height` field of values addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

/// One flag per pixel.  Used both for the caller's protection mask
/// and for the record of which pixels the seams consumed.
pub type Mask = TwoDimensionalMap<bool>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Build a map by asking `f` for the value at every `(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut map = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                map[(x, y)] = f(x, y);
            }
        }
        map
    }

    /// Wrap a row-major buffer.  Returns `None` if the buffer does not
    /// hold exactly `width × height` values.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The cells of a single row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[P] {
        &self.data
    }
}

impl Mask {
    /// Number of set cells in row `y`.
    pub fn count_row(&self, y: u32) -> usize {
        self.row(y).iter().filter(|cell| **cell).count()
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
