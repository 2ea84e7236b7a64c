/// Logical size of the drawing surface.
///
/// May be degenerate (zero width or height) during layout transitions or
/// while a window is minimised; consumers check [`ViewportGeometry::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    width: f64,
    height: f64,
    aspect: f64,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let aspect = if height > 0.0 { width / height } else { 0.0 };

        Self {
            width,
            height,
            aspect,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// The shorter side; plane distances are normalised against it.
    #[must_use]
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min_extent() <= 0.0
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_width_over_height() {
        let viewport = ViewportGeometry::new(800.0, 600.0);

        assert_eq!(viewport.aspect(), 800.0 / 600.0);
        assert_eq!(viewport.min_extent(), 600.0);
        assert!(!viewport.is_degenerate());
    }

    #[test]
    fn zero_or_invalid_extent_is_degenerate() {
        assert!(ViewportGeometry::new(0.0, 600.0).is_degenerate());
        assert!(ViewportGeometry::new(800.0, 0.0).is_degenerate());
        assert!(ViewportGeometry::new(-5.0, 100.0).is_degenerate());
        assert!(ViewportGeometry::new(f64::NAN, 100.0).is_degenerate());
        assert_eq!(ViewportGeometry::new(800.0, 0.0).aspect(), 0.0);
    }
}
