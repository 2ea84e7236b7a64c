use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel buffer size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("pixel at x:{}, y:{} outside of {width}x{height} buffer", .pixel.x, .pixel.y)]
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
    #[error("expected {expected} bytes for the buffer but got {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        })
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidSize { width, height });
        }

        let expected = buffer_size(width, height);
        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        Some((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(10, 10).unwrap();

        assert_eq!(buffer.buffer().len(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            PixelBuffer::new(0, 10),
            Err(PixelBufferError::InvalidSize { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(
            buffer.pixel(Point { x: 0, y: 1 }),
            Some(Colour { r: 0, g: 0, b: 255 })
        );
    }

    #[test]
    fn test_from_data_size_mismatch() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 11]);

        assert_eq!(
            result,
            Err(PixelBufferError::BoundsMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        let colour = Colour { r: 1, g: 2, b: 3 };

        buffer.set_pixel(Point { x: 2, y: 1 }, colour).unwrap();

        assert_eq!(&buffer.buffer()[15..18], &[1, 2, 3]);
        assert_eq!(buffer.pixel(Point { x: 2, y: 1 }), Some(colour));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 2).unwrap();
        let pixel = Point { x: 3, y: 0 };

        assert_eq!(
            buffer.set_pixel(pixel, Colour::BLACK),
            Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: 3,
                height: 2
            })
        );
    }
}
