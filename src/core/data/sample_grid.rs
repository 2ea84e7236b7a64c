use crate::core::data::point::Point;
use crate::core::data::screen::ScreenPoint;
use crate::core::view::ViewportGeometry;

pub const MAX_SUPERSAMPLING: u32 = 8;

/// Output pixel dimensions plus the per-axis supersampling factor.
///
/// Grid cell `(i, j)` samples the screen point `((i + 0.5) / ss, (j + 0.5) / ss)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    pixel_width: u32,
    pixel_height: u32,
    supersampling: u32,
}

impl SampleGrid {
    /// Returns `None` for a viewport that rounds to an empty image, or one
    /// whose supersampled grid does not fit in `u32` cells per axis and
    /// `usize` cells overall.
    #[must_use]
    pub fn new(viewport: &ViewportGeometry, supersampling: u32) -> Option<Self> {
        let pixel_width = pixel_count(viewport.width())?;
        let pixel_height = pixel_count(viewport.height())?;
        let supersampling = supersampling.clamp(1, MAX_SUPERSAMPLING);

        let width = pixel_width.checked_mul(supersampling)?;
        let height = pixel_height.checked_mul(supersampling)?;
        usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)?;

        Some(Self {
            pixel_width,
            pixel_height,
            supersampling,
        })
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn supersampling(&self) -> u32 {
        self.supersampling
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_width * self.supersampling
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_height * self.supersampling
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[must_use]
    pub fn cell_center(&self, cell: Point) -> ScreenPoint {
        let ss = f64::from(self.supersampling);

        ScreenPoint::new(
            (f64::from(cell.x) + 0.5) / ss,
            (f64::from(cell.y) + 0.5) / ss,
        )
    }
}

fn pixel_count(extent: f64) -> Option<u32> {
    let rounded = extent.round();
    if !(rounded >= 1.0 && rounded <= f64::from(u32::MAX)) {
        return None;
    }

    Some(rounded as u32)
}
