use crate::core::data::complex::Complex;
use crate::core::data::screen::{ScreenPoint, ScreenVector};
use crate::core::view::view_state::ViewState;
use crate::core::view::viewport::ViewportGeometry;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateMapperError {
    #[error("viewport {width}x{height} has no area to map")]
    DegenerateViewport { width: f64, height: f64 },
    #[error("view scale {scale} must be positive and finite")]
    InvalidScale { scale: f64 },
}

/// Screen-to-plane transform for one view/viewport pair.
///
/// Both axes are divided by `min(width, height) * scale`, so a circle in the
/// plane stays a circle on screen whatever the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    center: Complex,
    half_width: f64,
    half_height: f64,
    pixels_per_unit: f64,
}

impl CoordinateMapper {
    pub fn new(view: &ViewState, viewport: &ViewportGeometry) -> Result<Self, CoordinateMapperError> {
        if viewport.is_degenerate() {
            return Err(CoordinateMapperError::DegenerateViewport {
                width: viewport.width(),
                height: viewport.height(),
            });
        }

        let scale = view.scale();
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CoordinateMapperError::InvalidScale { scale });
        }

        Ok(Self {
            center: view.center(),
            half_width: viewport.width() * 0.5,
            half_height: viewport.height() * 0.5,
            pixels_per_unit: viewport.min_extent() * scale,
        })
    }

    #[must_use]
    pub fn point_to_plane(&self, point: ScreenPoint) -> Complex {
        let offset = Complex::new(point.x - self.half_width, self.half_height - point.y);

        offset / self.pixels_per_unit + self.center
    }

    #[must_use]
    pub fn vector_to_plane(&self, vector: ScreenVector) -> Complex {
        Complex::new(vector.x, -vector.y) / self.pixels_per_unit
    }
}

pub fn point_to_plane(
    point: ScreenPoint,
    view: &ViewState,
    viewport: &ViewportGeometry,
) -> Result<Complex, CoordinateMapperError> {
    Ok(CoordinateMapper::new(view, viewport)?.point_to_plane(point))
}

pub fn vector_to_plane(
    vector: ScreenVector,
    view: &ViewState,
    viewport: &ViewportGeometry,
) -> Result<Complex, CoordinateMapperError> {
    Ok(CoordinateMapper::new(view, viewport)?.vector_to_plane(vector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::view_state::ScaleLimits;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn view(center: Complex, scale: f64) -> ViewState {
        ViewState::new(center, scale, ScaleLimits::default())
    }

    #[test]
    fn test_viewport_center_maps_to_view_center() {
        let view = view(Complex::new(-0.75, 0.1), 3.0);
        let viewport = ViewportGeometry::new(800.0, 600.0);

        let plane = point_to_plane(ScreenPoint::new(400.0, 300.0), &view, &viewport).unwrap();

        assert_approx_eq(plane.real, -0.75);
        assert_approx_eq(plane.imag, 0.1);
    }

    #[test]
    fn test_y_axis_points_up_in_plane() {
        let view = ViewState::default();
        let viewport = ViewportGeometry::new(800.0, 600.0);

        let top = point_to_plane(ScreenPoint::new(400.0, 0.0), &view, &viewport).unwrap();
        let left = point_to_plane(ScreenPoint::new(100.0, 300.0), &view, &viewport).unwrap();

        // 300px / (600 * 0.25) = 2 units
        assert_approx_eq(top.real, 0.0);
        assert_approx_eq(top.imag, 2.0);
        assert_approx_eq(left.real, -2.0);
        assert_approx_eq(left.imag, 0.0);
    }

    #[test]
    fn test_uniform_scaling_on_square_surface() {
        let view = view(Complex::new(0.3, -0.2), 7.5);
        let viewport = ViewportGeometry::new(500.0, 500.0);
        let origin = ScreenPoint::new(120.0, 80.0);

        let base = point_to_plane(origin, &view, &viewport).unwrap();
        let along_x = point_to_plane(ScreenPoint::new(origin.x + 40.0, origin.y), &view, &viewport).unwrap();
        let along_y = point_to_plane(ScreenPoint::new(origin.x, origin.y + 40.0), &view, &viewport).unwrap();

        let dx = (along_x - base).magnitude_squared().sqrt();
        let dy = (along_y - base).magnitude_squared().sqrt();
        assert_approx_eq(dx, dy);
    }

    #[test]
    fn test_uniform_scaling_ignores_aspect_ratio() {
        let view = ViewState::default();
        let wide = ViewportGeometry::new(1600.0, 400.0);

        let mapper = CoordinateMapper::new(&view, &wide).unwrap();
        let dx = mapper.vector_to_plane(ScreenVector::new(10.0, 0.0));
        let dy = mapper.vector_to_plane(ScreenVector::new(0.0, 10.0));

        assert_approx_eq(dx.real, -dy.imag);
        assert_approx_eq(dx.real, 10.0 / (400.0 * 0.25));
    }

    #[test]
    fn test_vector_ignores_center() {
        let viewport = ViewportGeometry::new(800.0, 600.0);
        let near = vector_to_plane(ScreenVector::new(30.0, 15.0), &view(Complex::ZERO, 2.0), &viewport).unwrap();
        let far = vector_to_plane(ScreenVector::new(30.0, 15.0), &view(Complex::new(5.0, -9.0), 2.0), &viewport).unwrap();

        assert_eq!(near, far);
        assert_approx_eq(near.real, 30.0 / 1200.0);
        assert_approx_eq(near.imag, -15.0 / 1200.0);
    }

    #[test]
    fn test_degenerate_viewport_is_an_error() {
        let view = ViewState::default();

        for viewport in [
            ViewportGeometry::new(0.0, 600.0),
            ViewportGeometry::new(800.0, 0.0),
        ] {
            let result = point_to_plane(ScreenPoint::new(0.0, 0.0), &view, &viewport);
            assert!(matches!(
                result,
                Err(CoordinateMapperError::DegenerateViewport { .. })
            ));
        }
    }
}
