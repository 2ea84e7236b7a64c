use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::sample_grid::MAX_SUPERSAMPLING;
use crate::core::fractals::mandelbrot::params::{
    ColourParams, HUE_CYCLE_RANGE, HUE_SHIFT_PERCENT_RANGE, MAX_ITERATIONS_RANGE,
};
use crate::core::gestures::DEFAULT_ZOOM_STEP;
use crate::core::view::view_state::{DEFAULT_CENTER, DEFAULT_SCALE};
use crate::core::view::{ScaleLimits, ViewState};

pub const DEFAULT_SUPERSAMPLING: u32 = 4;
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: [f64; 2],
    pub scale: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: [DEFAULT_CENTER.real, DEFAULT_CENTER.imag],
            scale: DEFAULT_SCALE,
        }
    }
}

impl ViewConfig {
    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(self.center[0], self.center[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub supersampling: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            supersampling: DEFAULT_SUPERSAMPLING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub zoom_step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        let limits = ScaleLimits::default();

        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            min_scale: limits.min,
            max_scale: limits.max,
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        ScaleLimits {
            min: self.min_scale,
            max: self.max_scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Startup settings for the explorer. Every section falls back to its
/// defaults when missing from the file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub view: ViewConfig,
    pub colour: ColourParams,
    pub render: RenderConfig,
    pub gestures: GestureConfig,
    pub window: WindowConfig,
}

impl ExplorerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = self.gestures.scale_limits();
        if !limits.is_valid() {
            return Err(invalid(
                "gestures.min_scale",
                format!(
                    "scale limits must be finite with 0 < min <= max, got [{}, {}]",
                    limits.min, limits.max
                ),
            ));
        }

        if !(self.gestures.zoom_step.is_finite() && self.gestures.zoom_step > 1.0) {
            return Err(invalid(
                "gestures.zoom_step",
                format!("must be finite and greater than 1, got {}", self.gestures.zoom_step),
            ));
        }

        if !self.view.center().is_finite() {
            return Err(invalid("view.center", "must be finite".to_string()));
        }

        let scale = self.view.scale;
        if !(scale.is_finite() && scale >= limits.min && scale <= limits.max) {
            return Err(invalid(
                "view.scale",
                format!("must lie within [{}, {}], got {}", limits.min, limits.max, scale),
            ));
        }

        if !MAX_ITERATIONS_RANGE.contains(&self.colour.max_iterations()) {
            return Err(out_of_range(
                "colour.max_iterations",
                self.colour.max_iterations(),
                &MAX_ITERATIONS_RANGE,
            ));
        }

        if !HUE_CYCLE_RANGE.contains(&self.colour.hue_cycle()) {
            return Err(out_of_range(
                "colour.hue_cycle",
                self.colour.hue_cycle(),
                &HUE_CYCLE_RANGE,
            ));
        }

        if !HUE_SHIFT_PERCENT_RANGE.contains(&self.colour.hue_shift_percent()) {
            return Err(out_of_range(
                "colour.hue_shift_percent",
                self.colour.hue_shift_percent(),
                &HUE_SHIFT_PERCENT_RANGE,
            ));
        }

        if !(1..=MAX_SUPERSAMPLING).contains(&self.render.supersampling) {
            return Err(out_of_range(
                "render.supersampling",
                self.render.supersampling,
                &(1..=MAX_SUPERSAMPLING),
            ));
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(
                "window",
                format!("size must be positive, got {}x{}", self.window.width, self.window.height),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(
            self.view.center(),
            self.view.scale,
            self.gestures.scale_limits(),
        )
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn out_of_range<T: std::fmt::Display>(
    field: &'static str,
    value: T,
    range: &std::ops::RangeInclusive<T>,
) -> ConfigError {
    invalid(
        field,
        format!("must lie within [{}, {}], got {}", range.start(), range.end(), value),
    )
}
