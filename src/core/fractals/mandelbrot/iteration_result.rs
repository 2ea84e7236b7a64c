/// Outcome of iterating one sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationResult {
    /// Index of the last completed iteration, in `0..max_iterations`.
    pub count: i32,
    /// The last computed `x² + y²`; greater than 4 whenever `bounded` is false.
    pub escaped_magnitude_squared: f64,
    /// The iteration bound was reached without escaping.
    pub bounded: bool,
}
