// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build the cumulative cost matrix using the Avidan & Shamir
//! "Forward Energy" recurrence.
//!
//! Removing a seam makes pixels that used to be two apart into
//! neighbours.  Forward energy charges each step of a seam for the
//! gradients it would create, not just for the pixel it removes:
//!
//! ```text
//!  CU(x,y) = D[(x−1,y),(x+1,y)]
//!  CL(x,y) = CU(x,y) + D[(x,y−1),(x−1,y)]
//!  CR(x,y) = CU(x,y) + D[(x,y−1),(x+1,y)]
//!
//!                  ⎧ M(x−1,y−1)+CL(x,y)
//!  M(x,y)=e(x,y)+min⎨ M(x,y−1)+CU(x,y)
//!                  ⎩ M(x+1,y−1)+CR(x,y)
//! ```
//!
//! All coordinates are live columns.  At either edge the missing
//! neighbour is simply left out: CU drops to zero and the diagonal
//! that would leave the image is not a candidate.
//!
//! Protection never enters the sums.  Each cell carries the number of
//! unprotected pixels on its best path alongside the energy, and the
//! two are compared in that order.

use crate::energy::EnergyField;
use crate::twodmap::{Mask, TwoDimensionalMap};
use std::ops::Add;

/// Cumulative cost of a partial seam.  The derived ordering compares
/// `unprotected` first, so a path through more protected pixels always
/// wins, however much energy it has gathered.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PathCost {
    pub unprotected: u32,
    pub energy: u64,
}

impl PathCost {
    /// Cost of a single pixel.
    pub fn step(energy: u32, protected: bool) -> Self {
        PathCost {
            unprotected: u32::from(!protected),
            energy: u64::from(energy),
        }
    }

    pub fn with_penalty(self, penalty: u64) -> Self {
        PathCost {
            unprotected: self.unprotected,
            energy: self.energy + penalty,
        }
    }
}

impl Add for PathCost {
    type Output = PathCost;

    fn add(self, other: PathCost) -> PathCost {
        PathCost {
            unprotected: self.unprotected + other.unprotected,
            energy: self.energy + other.energy,
        }
    }
}

pub type CostMatrix = TwoDimensionalMap<PathCost>;

/// One legal way to reach a cell from the row above.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Transition {
    pub parent: u32,
    pub penalty: u64,
}

/// The left-diagonal, straight-up and right-diagonal transitions into
/// live cell `(c, y)`, in that order.  `y` must not be the top row.
pub(crate) fn transitions(field: &EnergyField, y: u32, c: u32) -> [Option<Transition>; 3] {
    let width = field.width();
    let left = if c > 0 {
        Some(field.intensity_at(y, c - 1))
    } else {
        None
    };
    let right = if c + 1 < width {
        Some(field.intensity_at(y, c + 1))
    } else {
        None
    };
    let above = field.intensity_at(y - 1, c);

    let cost_up = match (left, right) {
        (Some(l), Some(r)) => u64::from(l.abs_diff(r)),
        _ => 0,
    };

    [
        left.map(|l| Transition {
            parent: c - 1,
            penalty: cost_up + u64::from(above.abs_diff(l)),
        }),
        Some(Transition {
            parent: c,
            penalty: cost_up,
        }),
        right.map(|r| Transition {
            parent: c + 1,
            penalty: cost_up + u64::from(above.abs_diff(r)),
        }),
    ]
}

/// Cost contributed by live cell `(c, y)` itself.
pub(crate) fn step_cost(field: &EnergyField, protection: &Mask, y: u32, c: u32) -> PathCost {
    PathCost::step(
        field.energy_at(y, c),
        protection[(field.column_at(y, c), y)],
    )
}

/// Fill a `live width × height` cost matrix for the field's current
/// state.  Rows depend only on the row above; ties between transitions
/// go to the first of left, up, right.
pub fn build_cost_matrix(field: &EnergyField, protection: &Mask) -> CostMatrix {
    let (width, height) = (field.width(), field.height());
    let mut cost = CostMatrix::new(width, height);

    // Populate the first row with their native costs.
    for c in 0..width {
        cost[(c, 0)] = step_cost(field, protection, 0, c);
    }

    for y in 1..height {
        for c in 0..width {
            let best = transitions(field, y, c)
                .iter()
                .flatten()
                .map(|t| cost[(t.parent, y - 1)].with_penalty(t.penalty))
                .min()
                .unwrap_or_default();
            cost[(c, y)] = step_cost(field, protection, y, c) + best;
        }
    }
    cost
}
