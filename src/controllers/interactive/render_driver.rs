use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::RenderError;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::sample_grid::{MAX_SUPERSAMPLING, SampleGrid};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::HueCycleColourMap;
use crate::core::fractals::mandelbrot::params::ColourParams;
use crate::core::scheduling::RedrawFlag;
use crate::core::view::{CoordinateMapper, ViewState, ViewportGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No redraw was pending.
    Idle,
    /// A redraw was pending but the viewport is empty or too large to sample;
    /// the request is retired.
    Skipped,
    Presented { generation: u64 },
}

/// Renders a frame when, and only when, the redraw flag is set.
#[derive(Debug)]
pub struct RenderDriver {
    redraw: Arc<RedrawFlag>,
    supersampling: u32,
    last_frame_cost: Duration,
}

impl RenderDriver {
    #[must_use]
    pub fn new(redraw: Arc<RedrawFlag>, supersampling: u32) -> Self {
        Self {
            redraw,
            supersampling: supersampling.clamp(1, MAX_SUPERSAMPLING),
            last_frame_cost: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn redraw(&self) -> &Arc<RedrawFlag> {
        &self.redraw
    }

    #[must_use]
    pub fn supersampling(&self) -> u32 {
        self.supersampling
    }

    /// Requests a redraw when the clamped factor differs from the current one.
    pub fn set_supersampling(&mut self, supersampling: u32) -> bool {
        let supersampling = supersampling.clamp(1, MAX_SUPERSAMPLING);
        if supersampling == self.supersampling {
            return false;
        }

        self.supersampling = supersampling;
        self.redraw.request();
        true
    }

    /// Wall-clock cost of the most recent render, excluding presentation.
    #[must_use]
    pub fn last_frame_cost_ms(&self) -> f64 {
        self.last_frame_cost.as_secs_f64() * 1000.0
    }

    /// Runs one scheduled frame.
    ///
    /// `view` is the frame's snapshot; nothing reads the live view while
    /// pixels are evaluated. The pending request is retired only once the
    /// frame has been presented, so a failed frame is retried on the next
    /// step and a request made mid-frame is still pending afterwards.
    pub fn step<P>(
        &mut self,
        view: ViewState,
        viewport: ViewportGeometry,
        params: ColourParams,
        presenter: &mut P,
    ) -> Result<FrameOutcome, RenderError>
    where
        P: FramePresenterPort + ?Sized,
    {
        let Some(ticket) = self.redraw.begin_render() else {
            return Ok(FrameOutcome::Idle);
        };
        let generation = ticket.generation();

        let Some(algorithm) = self.build_algorithm(&view, &viewport, &params) else {
            debug!(
                width = viewport.width(),
                height = viewport.height(),
                supersampling = self.supersampling,
                "skipping frame for unrenderable viewport"
            );
            self.redraw.finish_render(ticket);
            return Ok(FrameOutcome::Skipped);
        };

        let colour_map = HueCycleColourMap::new(params);

        let start = Instant::now();
        let samples = generate_fractal_rayon(&algorithm);
        let pixel_buffer = generate_pixel_buffer(&samples, &colour_map, algorithm.grid())
            .map_err(|source| RenderError::PixelBuffer { generation, source })?;
        let render_duration = start.elapsed();

        let frame = FrameData {
            generation,
            pixel_buffer,
            render_duration,
        };

        presenter
            .present(&frame)
            .map_err(|source| RenderError::Present { generation, source })?;

        self.last_frame_cost = render_duration;
        self.redraw.finish_render(ticket);

        info!(
            generation,
            width = frame.pixel_buffer.width(),
            height = frame.pixel_buffer.height(),
            supersampling = self.supersampling,
            colour_map = colour_map.display_name(),
            cost_ms = self.last_frame_cost_ms(),
            "rendered frame"
        );

        Ok(FrameOutcome::Presented { generation })
    }

    fn build_algorithm(
        &self,
        view: &ViewState,
        viewport: &ViewportGeometry,
        params: &ColourParams,
    ) -> Option<MandelbrotAlgorithm> {
        let mapper = CoordinateMapper::new(view, viewport).ok()?;
        let grid = SampleGrid::new(viewport, self.supersampling)?;

        Some(MandelbrotAlgorithm::new(
            mapper,
            grid,
            params.max_iterations(),
        ))
    }
}
