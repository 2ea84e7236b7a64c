use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const MAX_ITERATIONS_RANGE: RangeInclusive<i32> = 1..=10_000;
pub const HUE_CYCLE_RANGE: RangeInclusive<i32> = 1..=200;
pub const HUE_SHIFT_PERCENT_RANGE: RangeInclusive<f64> = 0.0..=500.0;

pub const DEFAULT_MAX_ITERATIONS: i32 = 1000;
pub const DEFAULT_HUE_CYCLE: i32 = 40;
pub const DEFAULT_HUE_SHIFT_PERCENT: f64 = 0.0;

/// Iteration bound and hue-wheel settings shared by evaluation and colouring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourParams {
    max_iterations: i32,
    hue_cycle: i32,
    hue_shift_percent: f64,
}

impl Default for ColourParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            hue_cycle: DEFAULT_HUE_CYCLE,
            hue_shift_percent: DEFAULT_HUE_SHIFT_PERCENT,
        }
    }
}

impl ColourParams {
    /// Builds params with every value clamped into its range.
    #[must_use]
    pub fn new(max_iterations: i32, hue_cycle: i32, hue_shift_percent: f64) -> Self {
        let mut params = Self::default();
        params.set_max_iterations(max_iterations);
        params.set_hue_cycle(hue_cycle);
        params.set_hue_shift_percent(hue_shift_percent);
        params
    }

    #[must_use]
    pub fn max_iterations(&self) -> i32 {
        self.max_iterations
    }

    #[must_use]
    pub fn hue_cycle(&self) -> i32 {
        self.hue_cycle
    }

    #[must_use]
    pub fn hue_shift_percent(&self) -> f64 {
        self.hue_shift_percent
    }

    /// Hue index offset: `floor(hue_shift_percent / 100 * hue_cycle)`.
    #[must_use]
    pub fn shift_offset(&self) -> i32 {
        (self.hue_shift_percent / 100.0 * f64::from(self.hue_cycle)).floor() as i32
    }

    /// Returns true when the stored value changed.
    pub fn set_max_iterations(&mut self, max_iterations: i32) -> bool {
        let clamped = max_iterations.clamp(*MAX_ITERATIONS_RANGE.start(), *MAX_ITERATIONS_RANGE.end());
        replace(&mut self.max_iterations, clamped)
    }

    pub fn set_hue_cycle(&mut self, hue_cycle: i32) -> bool {
        let clamped = hue_cycle.clamp(*HUE_CYCLE_RANGE.start(), *HUE_CYCLE_RANGE.end());
        replace(&mut self.hue_cycle, clamped)
    }

    /// Stored as a whole percentage; fractions are truncated.
    pub fn set_hue_shift_percent(&mut self, hue_shift_percent: f64) -> bool {
        if hue_shift_percent.is_nan() {
            return false;
        }

        let clamped = hue_shift_percent.trunc().clamp(
            *HUE_SHIFT_PERCENT_RANGE.start(),
            *HUE_SHIFT_PERCENT_RANGE.end(),
        );
        replace(&mut self.hue_shift_percent, clamped)
    }

    /// Same values pulled into range; used after deserialising.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(self.max_iterations, self.hue_cycle, self.hue_shift_percent)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }

    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_explorer_startup_values() {
        let params = ColourParams::default();

        assert_eq!(params.max_iterations(), 1000);
        assert_eq!(params.hue_cycle(), 40);
        assert_eq!(params.hue_shift_percent(), 0.0);
    }

    #[test]
    fn setters_clamp_into_ranges() {
        let mut params = ColourParams::default();

        params.set_max_iterations(0);
        params.set_hue_cycle(999);
        params.set_hue_shift_percent(-20.0);
        assert_eq!(params.max_iterations(), 1);
        assert_eq!(params.hue_cycle(), 200);
        assert_eq!(params.hue_shift_percent(), 0.0);

        params.set_max_iterations(50_000);
        params.set_hue_cycle(-4);
        params.set_hue_shift_percent(900.0);
        assert_eq!(params.max_iterations(), 10_000);
        assert_eq!(params.hue_cycle(), 1);
        assert_eq!(params.hue_shift_percent(), 500.0);
    }

    #[test]
    fn setters_report_changes() {
        let mut params = ColourParams::default();

        assert!(params.set_hue_cycle(12));
        assert!(!params.set_hue_cycle(12));
        assert!(!params.set_hue_shift_percent(f64::NAN));
        assert!(!params.set_max_iterations(DEFAULT_MAX_ITERATIONS));
    }

    #[test]
    fn hue_shift_is_whole_percent() {
        let mut params = ColourParams::default();

        assert!(params.set_hue_shift_percent(37.9));
        assert_eq!(params.hue_shift_percent(), 37.0);
        assert!(!params.set_hue_shift_percent(37.2));
        assert_eq!(ColourParams::new(100, 40, 12.5).hue_shift_percent(), 12.0);
    }

    #[test]
    fn shift_offset_is_floored_fraction_of_cycle() {
        assert_eq!(ColourParams::new(100, 40, 0.0).shift_offset(), 0);
        assert_eq!(ColourParams::new(100, 40, 50.0).shift_offset(), 20);
        assert_eq!(ColourParams::new(100, 7, 50.0).shift_offset(), 3);
        assert_eq!(ColourParams::new(100, 10, 250.0).shift_offset(), 25);
    }

    #[test]
    fn deserialising_partial_json_fills_defaults() {
        let params: ColourParams = serde_json::from_str(r#"{ "hue_cycle": 12 }"#).unwrap();

        assert_eq!(params.hue_cycle(), 12);
        assert_eq!(params.max_iterations(), DEFAULT_MAX_ITERATIONS);
    }
}
