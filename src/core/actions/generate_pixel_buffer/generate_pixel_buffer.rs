use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::sample_grid::SampleGrid;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error("expected {expected} samples for the grid but got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours a row-major sample grid and box-filters it down to output pixels.
///
/// Each output pixel is the mean of the `ss × ss` cells it covers, rounded
/// per channel. Output rows are filled in parallel.
pub fn generate_pixel_buffer<T, CMap>(
    samples: &[T],
    mapper: &CMap,
    grid: SampleGrid,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Sync,
    CMap: ColourMap<T>,
{
    if samples.len() != grid.sample_count() {
        return Err(GeneratePixelBufferError::SampleCountMismatch {
            expected: grid.sample_count(),
            actual: samples.len(),
        });
    }

    let width = grid.pixel_width() as usize;
    let height = grid.pixel_height() as usize;
    let ss = grid.supersampling() as usize;
    let grid_width = grid.width() as usize;
    let cells_per_pixel = (ss * ss) as u32;

    let mut buffer = vec![0u8; width * height * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(width * BYTES_PER_PIXEL)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let mut sum = [0u32; 3];

                for sy in 0..ss {
                    let start = (y * ss + sy) * grid_width + x * ss;
                    for sample in &samples[start..start + ss] {
                        let Colour { r, g, b } = mapper.map(sample);
                        sum[0] += u32::from(r);
                        sum[1] += u32::from(g);
                        sum[2] += u32::from(b);
                    }
                }

                let offset = x * BYTES_PER_PIXEL;
                for (channel, total) in sum.iter().enumerate() {
                    row[offset + channel] = average(*total, cells_per_pixel);
                }
            }
        });

    Ok(PixelBuffer::from_data(
        grid.pixel_width(),
        grid.pixel_height(),
        buffer,
    )?)
}

fn average(total: u32, count: u32) -> u8 {
    ((total + count / 2) / count) as u8
}
