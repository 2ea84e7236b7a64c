use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSnapshot {
    pub start_center: Complex,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSnapshot {
    pub start_center: Complex,
    pub start_scale: f64,
    /// Plane point under the pinch focal point when the gesture began.
    pub start_point: Complex,
}
