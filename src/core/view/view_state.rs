use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CENTER: Complex = Complex::ZERO;
pub const DEFAULT_SCALE: f64 = 0.25;

/// Bounds every scale assignment is clamped into. `min` is kept strictly
/// positive so the coordinate mapper never divides by a non-positive scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self {
            min: 1e-3,
            max: 1e15,
        }
    }
}

impl ScaleLimits {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.max >= self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    Applied,
    /// Applied, but the requested scale was pulled back into the limits.
    Clamped,
    /// Nothing changed: the requested center or scale was not a number.
    Rejected,
}

/// The viewport's position in the complex plane.
///
/// `scale` is screen-units per plane-unit relative to the short side of the
/// surface: at scale 1 the short side spans one plane unit. Larger values
/// zoom in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    center: Complex,
    scale: f64,
    limits: ScaleLimits,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
            limits: ScaleLimits::default(),
        }
    }
}

impl ViewState {
    /// Builds a view, clamping `scale` into `limits`. Non-finite inputs fall
    /// back to the defaults.
    #[must_use]
    pub fn new(center: Complex, scale: f64, limits: ScaleLimits) -> Self {
        let limits = if limits.is_valid() {
            limits
        } else {
            ScaleLimits::default()
        };
        let mut view = Self {
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE.clamp(limits.min, limits.max),
            limits,
        };
        view.apply(center, scale);
        view
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    pub fn set_center(&mut self, center: Complex) -> ViewUpdate {
        self.apply(center, self.scale)
    }

    /// Replaces center and scale together; either both change or neither.
    pub fn apply(&mut self, center: Complex, scale: f64) -> ViewUpdate {
        if !center.is_finite() || scale.is_nan() {
            return ViewUpdate::Rejected;
        }

        let clamped = scale.clamp(self.limits.min, self.limits.max);
        self.center = center;
        self.scale = clamped;

        if clamped == scale {
            ViewUpdate::Applied
        } else {
            ViewUpdate::Clamped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_origin_at_quarter_scale() {
        let view = ViewState::default();

        assert_eq!(view.center(), Complex::ZERO);
        assert_eq!(view.scale(), 0.25);
    }

    #[test]
    fn apply_clamps_non_positive_scale() {
        let mut view = ViewState::default();

        assert_eq!(view.apply(Complex::new(1.0, 1.0), 0.0), ViewUpdate::Clamped);
        assert!(view.scale() > 0.0);
        assert_eq!(view.scale(), view.limits().min);

        assert_eq!(view.apply(Complex::ZERO, -4.0), ViewUpdate::Clamped);
        assert_eq!(view.scale(), view.limits().min);

        assert_eq!(view.apply(Complex::ZERO, f64::INFINITY), ViewUpdate::Clamped);
        assert_eq!(view.scale(), view.limits().max);
    }

    #[test]
    fn apply_rejects_non_finite_center_and_keeps_state() {
        let mut view = ViewState::default();
        let before = view;

        assert_eq!(
            view.apply(Complex::new(f64::NAN, 0.0), 2.0),
            ViewUpdate::Rejected
        );
        assert_eq!(view.apply(Complex::ZERO, f64::NAN), ViewUpdate::Rejected);
        assert_eq!(view, before);
    }

    #[test]
    fn set_center_keeps_scale() {
        let mut view = ViewState::default();

        assert_eq!(view.set_center(Complex::new(-0.5, 0.25)), ViewUpdate::Applied);
        assert_eq!(view.center(), Complex::new(-0.5, 0.25));
        assert_eq!(view.scale(), 0.25);
    }

    #[test]
    fn new_falls_back_on_invalid_limits() {
        let limits = ScaleLimits { min: 0.0, max: -1.0 };
        let view = ViewState::new(Complex::ZERO, 0.5, limits);

        assert_eq!(view.limits(), ScaleLimits::default());
        assert_eq!(view.scale(), 0.5);
    }
}
