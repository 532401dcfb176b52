// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate and maintain the energy of an image
//!
//! The energy of a pixel is a two-term gradient magnitude over the
//! greyscale grid: the absolute difference against its right live
//! neighbour (left, at the last live column) plus the absolute
//! difference against the pixel below it (above, on the last row).
//!
//! The vertical term is always taken at the same *original* column.
//! That keeps it fixed for the life of the carve, so when a seam is
//! removed only the two live pixels on either side of the hole in each
//! row see a new horizontal neighbour.  Those are the only energies
//! that get recomputed.

use crate::greyscale::GreyscaleGrid;
use crate::live::LivePixels;
use crate::rows::for_each_row;
use crate::tracer::SeamPath;

// Every neighbour lookup has an edge case, and one line per choice
// reads better than `cargo fmt`'s five-line `if`.
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

/// Energy of the pixel at original column `x` of row `y`, whose
/// horizontal neighbour is at original column `x_side`.
pub fn pixel_energy(grey: &GreyscaleGrid, y: u32, x: u32, x_side: u32) -> u32 {
    let here = grey[(x, y)];
    let y_vert = cq!(y + 1 < grey.height(), y + 1, y.saturating_sub(1));
    here.abs_diff(grey[(x_side, y)]) + here.abs_diff(grey[(x, y_vert)])
}

/// The live pixels of a carve together with the intensities they are
/// measured against.
#[derive(Debug, Clone)]
pub struct EnergyField {
    grey: GreyscaleGrid,
    live: LivePixels,
}

impl EnergyField {
    /// Compute the energy of every pixel of the greyscale grid.
    pub fn new(grey: GreyscaleGrid) -> Self {
        let (width, height) = grey.dimensions();
        let mut live = LivePixels::new(width, height);
        {
            let grey = &grey;
            let (slots, stride) = live.slots_mut();
            for_each_row(slots, stride, |y, row| {
                for slot in row.iter_mut() {
                    let x = slot.x;
                    let side = cq!(x + 1 < width, x + 1, x.saturating_sub(1));
                    slot.energy = pixel_energy(grey, y, x, side);
                }
            });
        }
        EnergyField { grey, live }
    }

    /// Current live width.
    pub fn width(&self) -> u32 {
        self.live.width()
    }

    pub fn height(&self) -> u32 {
        self.live.height()
    }

    pub fn energy_at(&self, y: u32, c: u32) -> u32 {
        self.live.get(y, c).energy
    }

    /// Original column of live slot `c` in row `y`.
    pub fn column_at(&self, y: u32, c: u32) -> u32 {
        self.live.get(y, c).x
    }

    /// Greyscale intensity of live slot `c` in row `y`.
    pub fn intensity_at(&self, y: u32, c: u32) -> u32 {
        self.grey[(self.column_at(y, c), y)]
    }

    pub fn live(&self) -> &LivePixels {
        &self.live
    }

    /// Remove one seam from the live pixels and re-energize the
    /// neighbours it leaves behind.
    pub fn remove_seam(&mut self, seam: &SeamPath) {
        self.live.remove_seam(seam.columns());
        let width = self.live.width();
        for (y, &c) in seam.columns().iter().enumerate() {
            let y = y as u32;
            if c > 0 {
                self.refresh(y, c - 1);
            }
            if c < width {
                self.refresh(y, c);
            }
        }
    }

    /// Energy of live slot `c` as it would be computed from scratch.
    fn fresh_energy(&self, y: u32, c: u32) -> u32 {
        let width = self.live.width();
        let side = cq!(c + 1 < width, c + 1, c.saturating_sub(1));
        pixel_energy(&self.grey, y, self.column_at(y, c), self.column_at(y, side))
    }

    fn refresh(&mut self, y: u32, c: u32) {
        let energy = self.fresh_energy(y, c);
        self.live.get_mut(y, c).energy = energy;
    }
}
