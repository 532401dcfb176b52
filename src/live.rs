// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The live pixels of a carve in progress.
//!
//! Each row is a fixed-capacity slab sized to the original width.  The
//! first `width` slots of every row are live, in left-to-right order,
//! and each remembers the original column it came from.  Removing a
//! seam shifts the tail of each row one slot left and shrinks the
//! shared live width; nothing is ever reallocated.

use itertools::iproduct;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct LivePixel {
    /// Column in the original image.
    pub x: u32,
    pub energy: u32,
}

#[derive(Debug, Clone)]
pub struct LivePixels {
    stride: usize,
    width: u32,
    height: u32,
    slots: Vec<LivePixel>,
}

impl LivePixels {
    /// Every column live, energies zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        LivePixels {
            stride: width as usize,
            width,
            height,
            slots: iproduct!(0..height, 0..width)
                .map(|(_, x)| LivePixel { x, energy: 0 })
                .collect(),
        }
    }

    /// The current live width, identical for every row.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn get_index(&self, y: u32, c: u32) -> usize {
        debug_assert!(c < self.width, "live column {} past width {}", c, self.width);
        (y as usize) * self.stride + (c as usize)
    }

    pub fn get(&self, y: u32, c: u32) -> LivePixel {
        self.slots[self.get_index(y, c)]
    }

    pub fn get_mut(&mut self, y: u32, c: u32) -> &mut LivePixel {
        let index = self.get_index(y, c);
        &mut self.slots[index]
    }

    /// The live slots of row `y`.
    pub fn row(&self, y: u32) -> &[LivePixel] {
        let start = (y as usize) * self.stride;
        &self.slots[start..start + self.width as usize]
    }

    /// The whole slab, `stride` slots per row.  Only meaningful before
    /// the first removal, when every slot is live.
    pub(crate) fn slots_mut(&mut self) -> (&mut [LivePixel], usize) {
        (&mut self.slots, self.stride)
    }

    /// Drop the slot at `columns[y]` from each row `y`.
    pub fn remove_seam(&mut self, columns: &[u32]) {
        debug_assert_eq!(columns.len(), self.height as usize);
        let width = self.width as usize;
        for (y, &c) in columns.iter().enumerate() {
            let start = y * self.stride;
            let c = c as usize;
            self.slots.copy_within(start + c + 1..start + width, start + c);
        }
        self.width -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(live: &LivePixels, y: u32) -> Vec<u32> {
        live.row(y).iter().map(|p| p.x).collect()
    }

    #[test]
    fn starts_with_every_column() {
        let live = LivePixels::new(4, 2);
        assert_eq!(columns(&live, 0), vec![0, 1, 2, 3]);
        assert_eq!(columns(&live, 1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn removal_keeps_order_and_original_columns() {
        let mut live = LivePixels::new(5, 3);
        live.remove_seam(&[0, 2, 4]);
        assert_eq!(live.width(), 4);
        assert_eq!(columns(&live, 0), vec![1, 2, 3, 4]);
        assert_eq!(columns(&live, 1), vec![0, 1, 3, 4]);
        assert_eq!(columns(&live, 2), vec![0, 1, 2, 3]);

        live.remove_seam(&[1, 1, 2]);
        assert_eq!(columns(&live, 0), vec![1, 3, 4]);
        assert_eq!(columns(&live, 1), vec![0, 3, 4]);
        assert_eq!(columns(&live, 2), vec![0, 1, 3]);
    }

    #[test]
    fn removal_moves_energies_with_their_pixels() {
        let mut live = LivePixels::new(3, 1);
        live.get_mut(0, 2).energy = 9;
        live.remove_seam(&[1]);
        assert_eq!(live.get(0, 1), LivePixel { x: 2, energy: 9 });
    }
}
