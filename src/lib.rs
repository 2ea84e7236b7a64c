mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::adapters::pixel_format::{PixelFormatError, check_frame_size, copy_rgb_to_rgba};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::errors::RenderError;
pub use crate::controllers::interactive::ports::presenter::{FramePresenterPort, PresentError};
pub use crate::controllers::interactive::{FrameOutcome, InteractiveExplorer, RenderDriver};
pub use crate::core::config::{ConfigError, ExplorerConfig};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::screen::{ScreenPoint, ScreenVector};
pub use crate::core::fractals::mandelbrot::algorithm::evaluate;
pub use crate::core::fractals::mandelbrot::colour_map::colorize;
pub use crate::core::fractals::mandelbrot::iteration_result::IterationResult;
pub use crate::core::fractals::mandelbrot::params::ColourParams;
pub use crate::core::gestures::{GestureController, GestureEvent, GestureOutcome, WheelDirection};
pub use crate::core::scheduling::{RedrawFlag, RenderTicket};
pub use crate::core::view::{CoordinateMapper, CoordinateMapperError, ScaleLimits, ViewState, ViewportGeometry};
pub use crate::input::pointer_input::{MagnifyPhase, PointerInputState};
pub use crate::presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use crate::storage::config_file::{load_config, load_config_or_default, save_config};

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
