use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every grid cell on the calling thread, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Sample> {
    let grid = algorithm.grid();

    (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Point { x, y }))
        .map(|cell| algorithm.compute(cell))
        .collect()
}
