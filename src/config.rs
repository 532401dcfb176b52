// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Greyscale weighting.
//!
//! The energy calculation only looks at a single intensity channel.
//! How the three colour channels fold into that channel is the one
//! piece of the carve the caller gets to tune.

use crate::error::{CarveError, Result};
use image::{Primitive, Rgb};
use num_traits::ToPrimitive;
use std::str::FromStr;

const FLOAT_SCALE: f64 = 65535.0;

/// Relative weights of the red, green and blue channels.
///
/// The intensity of a pixel is `(r·R + g·G + b·B) / (R + G + B)`, so
/// only the ratios between the weights matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbWeights {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Default for RgbWeights {
    fn default() -> Self {
        Self {
            red: 1,
            green: 1,
            blue: 1,
        }
    }
}

impl RgbWeights {
    pub fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    pub fn set_red(mut self, weight: u32) -> Self {
        self.red = weight;
        self
    }

    pub fn set_green(mut self, weight: u32) -> Self {
        self.green = weight;
        self
    }

    pub fn set_blue(mut self, weight: u32) -> Self {
        self.blue = weight;
        self
    }

    /// The divisor of the weighted sum.
    pub fn weights_amount(&self) -> u32 {
        self.red + self.green + self.blue
    }

    /// Rejects weights that cannot produce an intensity.
    pub fn validate(&self) -> Result<()> {
        if self.weights_amount() == 0 {
            return Err(CarveError::InvalidWeights);
        }
        Ok(())
    }

    /// Weighted intensity of one pixel.  Integer subpixels are taken as
    /// they are.  Float subpixels are read on their nominal 0.0 to 1.0
    /// range and spread over 0 to 65535; anything outside that range
    /// (or NaN) is clamped.
    pub fn intensity<S: Primitive>(&self, pixel: &Rgb<S>) -> u32 {
        #[inline]
        fn channel<S: Primitive>(c: S) -> u64 {
            let max = S::DEFAULT_MAX_VALUE.to_f64().unwrap_or(1.0);
            if max <= 1.0 {
                let unit = c.to_f64().unwrap_or(0.0).max(0.0).min(1.0);
                (unit * FLOAT_SCALE) as u64
            } else {
                num_traits::cast::<S, u64>(c).unwrap_or(0)
            }
        }

        let [r, g, b] = pixel.0;
        let sum = channel(r) * u64::from(self.red)
            + channel(g) * u64::from(self.green)
            + channel(b) * u64::from(self.blue);
        let amount = u64::from(self.weights_amount()).max(1);
        (sum / amount) as u32
    }
}

impl FromStr for RgbWeights {
    type Err = CarveError;

    /// Parses `"R,G,B"`.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || CarveError::MalformedWeights(s.to_string());
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<u32>().map_err(|_| malformed()))
            .collect::<Result<Vec<u32>>>()?;
        match parts.as_slice() {
            [red, green, blue] => {
                let weights = RgbWeights::new(*red, *green, *blue);
                weights.validate()?;
                Ok(weights)
            }
            _ => Err(malformed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_weights_average_the_channels() {
        let weights = RgbWeights::default();
        assert_eq!(weights.intensity(&Rgb([10u8, 20, 30])), 20);
    }

    #[test]
    fn single_channel_weight_selects_it() {
        let weights = RgbWeights::new(0, 0, 0).set_red(3);
        assert_eq!(weights.intensity(&Rgb([10u8, 200, 250])), 10);
    }

    #[test]
    fn wide_subpixels_do_not_overflow() {
        let weights = RgbWeights::new(100, 100, 100);
        assert_eq!(weights.intensity(&Rgb([65535u16, 65535, 65535])), 65535);
    }

    #[test]
    fn integer_channels_keep_their_scale() {
        let weights = RgbWeights::new(1, 2, 1);
        assert_eq!(weights.intensity(&Rgb([40u8, 80, 120])), 80);
        assert_eq!(weights.intensity(&Rgb([4000u16, 8000, 12000])), 8000);
    }

    #[test]
    fn float_channels_are_spread_over_the_integer_range() {
        let weights = RgbWeights::default();
        assert_eq!(weights.intensity(&Rgb([1.0f32, 1.0, 1.0])), 65535);
        assert_eq!(weights.intensity(&Rgb([0.0f32, 0.0, 0.0])), 0);
        assert_eq!(weights.intensity(&Rgb([0.5f32, 0.5, 0.5])), 32767);
        assert_ne!(
            weights.intensity(&Rgb([0.2f32, 0.2, 0.2])),
            weights.intensity(&Rgb([0.8f32, 0.8, 0.8]))
        );
    }

    #[test]
    fn out_of_range_floats_are_clamped() {
        let weights = RgbWeights::default();
        assert_eq!(weights.intensity(&Rgb([-3.0f32, f32::NAN, 2.0])), 65535 / 3);
    }

    #[test]
    fn parses_comma_separated_weights() {
        assert_eq!("3, 6,1".parse::<RgbWeights>(), Ok(RgbWeights::new(3, 6, 1)));
        assert_eq!(
            "3,6".parse::<RgbWeights>(),
            Err(CarveError::MalformedWeights("3,6".to_string()))
        );
        assert_eq!("0,0,0".parse::<RgbWeights>(), Err(CarveError::InvalidWeights));
    }
}
