use crate::core::data::point::Point;
use crate::core::data::sample_grid::SampleGrid;

/// A per-cell evaluation over a sample grid.
pub trait FractalAlgorithm {
    type Sample;

    fn grid(&self) -> SampleGrid;

    fn compute(&self, cell: Point) -> Self::Sample;
}
