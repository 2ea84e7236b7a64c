use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;
use crate::core::view::CoordinateMapper;

/// Squared escape radius; comparisons on it are strict (`>`), so a point
/// sitting exactly on `|z| = 2` keeps iterating.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z -> z² + c` from `z = 0` until `|z|² > 4` or the bound is hit.
///
/// `count` records the index of the last completed iteration, not the number
/// of iterations. A bound below one is treated as one.
#[must_use]
pub fn evaluate(c: Complex, max_iterations: i32) -> IterationResult {
    let max_iterations = max_iterations.max(1);
    let mut z = Complex::ZERO;
    let mut magnitude_squared = 0.0;
    let mut count = 0;

    for iteration in 0..max_iterations {
        magnitude_squared = z.magnitude_squared();
        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            return IterationResult {
                count,
                escaped_magnitude_squared: magnitude_squared,
                bounded: false,
            };
        }
        z = z * z + c;
        count = iteration;
    }

    IterationResult {
        count,
        escaped_magnitude_squared: magnitude_squared,
        bounded: true,
    }
}

/// Evaluates every cell of a supersampled grid for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    mapper: CoordinateMapper,
    grid: SampleGrid,
    max_iterations: i32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(mapper: CoordinateMapper, grid: SampleGrid, max_iterations: i32) -> Self {
        Self {
            mapper,
            grid,
            max_iterations: max_iterations.max(1),
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Sample = IterationResult;

    fn grid(&self) -> SampleGrid {
        self.grid
    }

    fn compute(&self, cell: Point) -> IterationResult {
        let c = self.mapper.point_to_plane(self.grid.cell_center(cell));
        evaluate(c, self.max_iterations)
    }
}
