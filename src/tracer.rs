// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Trace a seam back up through a cost matrix.
//!
//! The matrix stores costs, not back pointers.  Walking upward, each
//! candidate parent is tested against the recurrence that built the
//! cell; the first one that reproduces the stored cost exactly is on a
//! minimal path.

use crate::cost::{step_cost, transitions, CostMatrix};
use crate::energy::EnergyField;
use crate::error::{CarveError, Result};
use crate::twodmap::Mask;
use log::error;

/// One live column per row, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeamPath(Vec<u32>);

impl SeamPath {
    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if no two consecutive rows are more than one column apart.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].abs_diff(pair[1]) <= 1)
    }
}

impl From<Vec<u32>> for SeamPath {
    fn from(columns: Vec<u32>) -> Self {
        SeamPath(columns)
    }
}

/// Find the minimal seam in a filled cost matrix.  The matrix must have
/// been built from `field` and `protection` as they stand now.
pub fn trace_seam(cost: &CostMatrix, field: &EnergyField, protection: &Mask) -> Result<SeamPath> {
    let (width, height) = cost.dimensions();
    let empty = CarveError::TraceInconsistency { row: 0, column: 0 };
    let last = height.checked_sub(1).ok_or_else(|| empty.clone())?;

    // Find the x coordinate of the bottommost seam with the least cost.
    let mut column = (0..width).min_by_key(|c| cost[(*c, last)]).ok_or(empty)?;

    let mut seam = Vec::with_capacity(height as usize);
    seam.push(column);
    for y in (1..height).rev() {
        let stored = cost[(column, y)];
        let step = step_cost(field, protection, y, column);
        let parent = transitions(field, y, column)
            .iter()
            .flatten()
            .find(|t| step + cost[(t.parent, y - 1)].with_penalty(t.penalty) == stored)
            .map(|t| t.parent);
        column = match parent {
            Some(parent) => parent,
            None => {
                error!(
                    "no predecessor reproduces cost {:?} at row {}, live column {}",
                    stored, y, column
                );
                return Err(CarveError::TraceInconsistency { row: y, column });
            }
        };
        seam.push(column);
    }
    seam.reverse();
    Ok(SeamPath(seam))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::build_cost_matrix;
    use crate::greyscale::GreyscaleGrid;

    const GREY_DATA: [u32; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    fn field(width: u32, height: u32, data: &[u32]) -> EnergyField {
        EnergyField::new(GreyscaleGrid::from_vec(width, height, data.to_vec()).unwrap())
    }

    #[test]
    fn uniform_field_takes_the_leftmost_seam() {
        let field = field(4, 4, &[7; 16]);
        let mask = Mask::new(4, 4);
        let cost = build_cost_matrix(&field, &mask);
        let seam = trace_seam(&cost, &field, &mask).unwrap();
        assert_eq!(seam.columns(), &[0, 0, 0, 0]);
    }

    #[test]
    fn protected_column_is_followed() {
        let field = field(5, 4, &GREY_DATA);
        let mask = Mask::from_fn(5, 4, |x, _| x == 3);
        let cost = build_cost_matrix(&field, &mask);
        let seam = trace_seam(&cost, &field, &mask).unwrap();
        assert_eq!(seam.columns(), &[3, 3, 3, 3]);
    }

    #[test]
    fn seam_reproduces_the_minimal_cost() {
        let field = field(5, 4, &GREY_DATA);
        let mask = Mask::new(5, 4);
        let cost = build_cost_matrix(&field, &mask);
        let seam = trace_seam(&cost, &field, &mask).unwrap();
        assert_eq!(seam.len(), 4);
        assert!(seam.is_connected());

        let minimum = cost.row(3).iter().min().copied().unwrap();
        assert_eq!(cost[(seam.columns()[3], 3)], minimum);
    }

    #[test]
    fn tampered_matrix_is_reported() {
        let field = field(4, 3, &[7; 12]);
        let mask = Mask::new(4, 3);
        let mut cost = build_cost_matrix(&field, &mask);
        for c in 0..4 {
            cost[(c, 1)].energy += 1_000;
        }
        assert_eq!(
            trace_seam(&cost, &field, &mask),
            Err(CarveError::TraceInconsistency { row: 2, column: 0 })
        );
    }

    #[test]
    fn empty_matrix_is_reported() {
        let grey = GreyscaleGrid::new(0, 0);
        let field = EnergyField::new(grey);
        let mask = Mask::new(0, 0);
        let cost = CostMatrix::new(3, 0);
        assert_eq!(
            trace_seam(&cost, &field, &mask),
            Err(CarveError::TraceInconsistency { row: 0, column: 0 })
        );
        let cost = CostMatrix::new(0, 3);
        assert_eq!(
            trace_seam(&cost, &field, &mask),
            Err(CarveError::TraceInconsistency { row: 0, column: 0 })
        );
    }

    #[test]
    fn connectivity_check() {
        assert!(SeamPath::from(vec![2, 3, 3, 2, 1]).is_connected());
        assert!(!SeamPath::from(vec![2, 4]).is_connected());
    }
}
