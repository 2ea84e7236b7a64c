use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::algorithm::ESCAPE_RADIUS_SQUARED;
use crate::core::fractals::mandelbrot::hue::{fract, hue_to_rgb, lerp_rgb};
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;
use crate::core::fractals::mandelbrot::params::ColourParams;

/// Renormalised escape value `1 - log2(ln(l) / ln(4))`.
///
/// Only defined for `l > 4`; anything else (including NaN) yields `None`.
#[must_use]
pub fn smoothed_value(magnitude_squared: f64) -> Option<f64> {
    if !(magnitude_squared > ESCAPE_RADIUS_SQUARED) {
        return None;
    }

    let ratio = magnitude_squared.ln() / ESCAPE_RADIUS_SQUARED.ln();
    Some(1.0 - ratio.ln() / std::f64::consts::LN_2)
}

/// Colours a result by blending two adjacent hues of a cyclic wheel.
///
/// Bounded points are black. Escaped points take hue bands `count + shift`
/// and `count + shift + 1` (mod `hue_cycle`) and mix them by the fractional
/// part of the smoothed value, so colour runs continuously across bands.
#[must_use]
pub fn colorize(result: &IterationResult, params: &ColourParams) -> Colour {
    if result.bounded {
        return Colour::BLACK;
    }

    let mix = smoothed_value(result.escaped_magnitude_squared)
        .map(fract)
        .unwrap_or(0.0);

    let cycle = params.hue_cycle().max(1);
    let band = result.count + params.shift_offset();
    let first = band.rem_euclid(cycle);
    let second = (band + 1).rem_euclid(cycle);

    let from = hue_to_rgb(f64::from(first) / f64::from(cycle));
    let to = hue_to_rgb(f64::from(second) / f64::from(cycle));

    Colour::from_unit_rgb(lerp_rgb(from, to, mix))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCycleColourMap {
    params: ColourParams,
}

impl HueCycleColourMap {
    #[must_use]
    pub fn new(params: ColourParams) -> Self {
        Self { params }
    }
}

impl ColourMap<IterationResult> for HueCycleColourMap {
    fn map(&self, value: &IterationResult) -> Colour {
        colorize(value, &self.params)
    }

    fn display_name(&self) -> &str {
        "Hue cycle"
    }
}
