use crate::core::data::pixel_buffer::PixelBuffer;
use std::time::Duration;

/// One rendered frame. `generation` is the redraw request count the frame
/// satisfies; later frames always carry a larger value.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
