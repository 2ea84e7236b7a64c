//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::pixel_buffer::PixelBuffer;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgba target holds {actual} bytes but a {width}x{height} frame needs {expected}")]
    TargetSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("{frame_width}x{frame_height} frame does not match the {surface_width}x{surface_height} surface")]
    FrameSizeMismatch {
        frame_width: u32,
        frame_height: u32,
        surface_width: u32,
        surface_height: u32,
    },
}

/// Fails when a frame was rendered for a surface of a different size.
pub fn check_frame_size(
    buffer: &PixelBuffer,
    surface_width: u32,
    surface_height: u32,
) -> Result<(), PixelFormatError> {
    if buffer.width() == surface_width && buffer.height() == surface_height {
        return Ok(());
    }

    Err(PixelFormatError::FrameSizeMismatch {
        frame_width: buffer.width(),
        frame_height: buffer.height(),
        surface_width,
        surface_height,
    })
}

/// Copies an RGB frame into an RGBA target, setting alpha to 255.
pub fn copy_rgb_to_rgba(buffer: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    let src = buffer.buffer();
    let expected = (src.len() / 3) * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::TargetSizeMismatch {
            width: buffer.width(),
            height: buffer.height(),
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let buffer = PixelBuffer::from_data(2, 2, src).unwrap();
        let mut dst = vec![0; 16];

        copy_rgb_to_rgba(&buffer, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_single_pixel() {
        let buffer = PixelBuffer::from_data(1, 1, vec![128, 64, 32]).unwrap();
        let mut dst = vec![0; 4];

        copy_rgb_to_rgba(&buffer, &mut dst).unwrap();

        assert_eq!(dst, vec![128, 64, 32, 255]);
    }

    #[test]
    fn test_copy_rgb_to_rgba_rejects_wrong_target_size() {
        let buffer = PixelBuffer::new(3, 2).unwrap();
        let mut dst = vec![0; 20];

        assert_eq!(
            copy_rgb_to_rgba(&buffer, &mut dst),
            Err(PixelFormatError::TargetSizeMismatch {
                width: 3,
                height: 2,
                expected: 24,
                actual: 20
            })
        );
    }

    #[test]
    fn test_check_frame_size_accepts_matching_surface() {
        let buffer = PixelBuffer::new(4, 3).unwrap();

        assert_eq!(check_frame_size(&buffer, 4, 3), Ok(()));
    }

    #[test]
    fn test_check_frame_size_rejects_same_area_with_other_shape() {
        // 4x3 and 6x2 need the same number of bytes, so the copy alone would not notice
        let buffer = PixelBuffer::new(4, 3).unwrap();

        assert_eq!(
            check_frame_size(&buffer, 6, 2),
            Err(PixelFormatError::FrameSizeMismatch {
                frame_width: 4,
                frame_height: 3,
                surface_width: 6,
                surface_height: 2
            })
        );
    }
}
