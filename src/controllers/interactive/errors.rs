use crate::controllers::interactive::ports::presenter::PresentError;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build frame {generation}: {source}")]
    PixelBuffer {
        generation: u64,
        #[source]
        source: GeneratePixelBufferError,
    },
    #[error("failed to present frame {generation}: {source}")]
    Present {
        generation: u64,
        #[source]
        source: PresentError,
    },
}
