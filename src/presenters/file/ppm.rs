use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::{FramePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    // P6 means binary RGB, then width, height and max colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

/// Presents each frame by overwriting a single PPM file.
#[derive(Debug, Clone)]
pub struct PpmFilePresenter {
    filepath: PathBuf,
    frames_written: u64,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl AsRef<Path>) -> Self {
        Self {
            filepath: filepath.as_ref().to_path_buf(),
            frames_written: 0,
        }
    }

    #[must_use]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FramePresenterPort for PpmFilePresenter {
    fn present(&mut self, frame: &FrameData) -> Result<(), PresentError> {
        if let Some(parent) = self.filepath.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::File::create(&self.filepath)?;
        write_ppm(&frame.pixel_buffer, std::io::BufWriter::new(file))?;
        self.frames_written += 1;

        info!(
            path = %self.filepath.display(),
            generation = frame.generation,
            "wrote ppm frame"
        );
        Ok(())
    }
}
