use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates the grid in parallel, one rayon task per row.
///
/// Output order is row-major, identical to `generate_fractal`.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Sample>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Sample: Send,
{
    let grid = algorithm.grid();
    let width = grid.width();

    (0..grid.height())
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| algorithm.compute(Point { x, y })))
        .collect()
}
