// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seams found so far, in original image coordinates.

use crate::energy::EnergyField;
use crate::tracer::SeamPath;
use crate::twodmap::Mask;

#[derive(Debug, Clone)]
pub struct SeamRegistry {
    removed: Mask,
    seams: Vec<Vec<u32>>,
}

impl SeamRegistry {
    /// An empty registry for an image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        SeamRegistry {
            removed: Mask::new(width, height),
            seams: Vec::new(),
        }
    }

    /// Map a freshly traced seam back to original columns and mark it.
    /// Must be called before the seam is removed from `field`.
    pub fn record(&mut self, field: &EnergyField, seam: &SeamPath) -> &[u32] {
        let columns: Vec<u32> = seam
            .columns()
            .iter()
            .enumerate()
            .map(|(y, &c)| field.column_at(y as u32, c))
            .collect();
        for (y, &x) in columns.iter().enumerate() {
            let cell = &mut self.removed[(x, y as u32)];
            debug_assert!(!*cell, "seam revisits removed pixel ({}, {})", x, y);
            *cell = true;
        }
        self.seams.push(columns);
        &self.seams[self.seams.len() - 1]
    }

    /// Every pixel consumed by a seam, in input coordinates.
    pub fn removed(&self) -> &Mask {
        &self.removed
    }

    pub fn is_removed(&self, x: u32, y: u32) -> bool {
        self.removed[(x, y)]
    }

    /// The original column of each row's pixel, per seam, in the order
    /// the seams were found.
    pub fn seams(&self) -> &[Vec<u32>] {
        &self.seams
    }

    pub fn seam_count(&self) -> usize {
        self.seams.len()
    }
}
