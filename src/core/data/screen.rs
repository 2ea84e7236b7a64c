//! Screen-space positions and displacements.
//!
//! Origin is the top-left corner of the drawing surface and `y` grows
//! downward. Units are the surface's own pixels; the GUI passes physical
//! window pixels throughout.

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// A relative displacement, e.g. the cumulative delta of a drag gesture.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ScreenVector {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl ScreenVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
