// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mask-aware seam carving.
//!
//! Narrow or widen an image by removing or doubling its least
//! important vertical seams.  Pixels flagged in a protection mask are
//! consumed by seams before anything else, which makes it possible to
//! carve an object out of a picture.
//!
//! ```no_run
//! use maskseam::{Mask, RgbWeights, SeamCarver};
//!
//! let image = image::open("input.png").unwrap().to_rgb8();
//! let (width, height) = image.dimensions();
//! let mask = Mask::new(width, height);
//! let carver = SeamCarver::with_mask(&image, width - 10, mask, RgbWeights::default()).unwrap();
//! carver.resize().save("output.png").unwrap();
//! ```

pub mod config;
pub mod cost;
pub mod dump;
pub mod energy;
pub mod error;
pub mod greyscale;
pub mod live;
pub mod registry;
mod rows;
pub mod seamcarver;
pub mod tracer;
pub mod twodmap;

pub use config::RgbWeights;
pub use cost::{build_cost_matrix, CostMatrix, PathCost};
pub use energy::{pixel_energy, EnergyField};
pub use error::{CarveError, Result};
pub use greyscale::{greyscale, GreyscaleGrid};
pub use registry::SeamRegistry;
pub use seamcarver::{seamcarve, Resize, SeamCarver};
pub use tracer::{trace_seam, SeamPath};
pub use twodmap::{Mask, TwoDimensionalMap};
