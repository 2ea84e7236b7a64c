use std::sync::Arc;

use tracing::debug;

use crate::controllers::interactive::errors::RenderError;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::controllers::interactive::render_driver::{FrameOutcome, RenderDriver};
use crate::core::config::ExplorerConfig;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::params::ColourParams;
use crate::core::gestures::{GestureController, GestureEvent, GestureOutcome};
use crate::core::scheduling::RedrawFlag;
use crate::core::view::{ViewState, ViewportGeometry};

/// Everything the explorer needs between frames.
///
/// Gesture handling, resizing and parameter edits all run on the caller's
/// thread and only ever request a redraw; pixels are produced by `step`.
#[derive(Debug)]
pub struct InteractiveExplorer {
    view: ViewState,
    initial_view: ViewState,
    viewport: ViewportGeometry,
    params: ColourParams,
    gestures: GestureController,
    redraw: Arc<RedrawFlag>,
    driver: RenderDriver,
}

impl InteractiveExplorer {
    /// Starts with a pending redraw so the first `step` produces a frame.
    #[must_use]
    pub fn new(config: &ExplorerConfig, viewport: ViewportGeometry) -> Self {
        let redraw = Arc::new(RedrawFlag::dirty());
        let view = config.initial_view();

        Self {
            view,
            initial_view: view,
            viewport,
            params: config.colour.clamped(),
            gestures: GestureController::new(config.gestures.zoom_step),
            driver: RenderDriver::new(Arc::clone(&redraw), config.render.supersampling),
            redraw,
        }
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) -> GestureOutcome {
        self.gestures
            .handle(event, &mut self.view, &self.viewport, &self.redraw)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let viewport = ViewportGeometry::new(width, height);
        if viewport == self.viewport {
            return;
        }

        debug!(width = viewport.width(), height = viewport.height(), "viewport resized");
        self.viewport = viewport;
        self.redraw.request();
    }

    pub fn set_max_iterations(&mut self, max_iterations: i32) {
        let changed = self.params.set_max_iterations(max_iterations);
        self.request_if(changed);
    }

    pub fn set_hue_cycle(&mut self, hue_cycle: i32) {
        let changed = self.params.set_hue_cycle(hue_cycle);
        self.request_if(changed);
    }

    pub fn set_hue_shift_percent(&mut self, hue_shift_percent: f64) {
        let changed = self.params.set_hue_shift_percent(hue_shift_percent);
        self.request_if(changed);
    }

    pub fn set_supersampling(&mut self, supersampling: u32) {
        self.driver.set_supersampling(supersampling);
    }

    /// Returns to the configured starting view, dropping any gesture in flight.
    pub fn reset_view(&mut self) {
        self.gestures.pan_end();
        self.gestures.pinch_end();
        self.view = self.initial_view;
        self.redraw.request();
    }

    /// Renders and presents a frame if one has been requested.
    pub fn step<P>(&mut self, presenter: &mut P) -> Result<FrameOutcome, RenderError>
    where
        P: FramePresenterPort + ?Sized,
    {
        self.driver
            .step(self.view, self.viewport, self.params, presenter)
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.view.center()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportGeometry {
        self.viewport
    }

    #[must_use]
    pub fn params(&self) -> ColourParams {
        self.params
    }

    #[must_use]
    pub fn supersampling(&self) -> u32 {
        self.driver.supersampling()
    }

    #[must_use]
    pub fn last_frame_cost_ms(&self) -> f64 {
        self.driver.last_frame_cost_ms()
    }

    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.redraw.is_dirty()
    }

    fn request_if(&self, changed: bool) {
        if changed {
            self.redraw.request();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::frame_data::FrameData;
    use crate::controllers::interactive::ports::presenter::PresentError;
    use crate::core::data::screen::{ScreenPoint, ScreenVector};
    use crate::core::gestures::WheelDirection;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[derive(Default)]
    struct CountingPresenter {
        frames: usize,
    }

    impl FramePresenterPort for CountingPresenter {
        fn present(&mut self, _frame: &FrameData) -> Result<(), PresentError> {
            self.frames += 1;
            Ok(())
        }
    }

    fn explorer() -> InteractiveExplorer {
        let mut config = ExplorerConfig::default();
        config.render.supersampling = 1;
        config.colour.set_max_iterations(32);
        InteractiveExplorer::new(&config, ViewportGeometry::new(800.0, 600.0))
    }

    fn settle(explorer: &mut InteractiveExplorer) {
        let mut presenter = CountingPresenter::default();
        explorer.step(&mut presenter).unwrap();
        assert!(!explorer.needs_render());
    }

    #[test]
    fn test_first_step_renders_initial_frame() {
        let mut explorer = explorer();
        let mut presenter = CountingPresenter::default();

        assert!(explorer.needs_render());
        explorer.step(&mut presenter).unwrap();
        explorer.step(&mut presenter).unwrap();

        assert_eq!(presenter.frames, 1);
        assert!(explorer.last_frame_cost_ms() >= 0.0);
    }

    #[test]
    fn test_wheel_zoom_at_viewport_center() {
        let mut explorer = explorer();

        let outcome = explorer.handle_gesture(GestureEvent::Wheel {
            offset: ScreenPoint::new(400.0, 300.0),
            direction: WheelDirection::ZoomIn,
        });

        assert_eq!(outcome, GestureOutcome::Updated);
        assert_approx_eq(explorer.center().real, 0.0);
        assert_approx_eq(explorer.center().imag, 0.0);
        assert_approx_eq(explorer.scale(), 0.275);
        assert!(explorer.needs_render());
    }

    #[test]
    fn test_pan_requests_redraw() {
        let mut explorer = explorer();
        settle(&mut explorer);

        explorer.handle_gesture(GestureEvent::PanStart);
        explorer.handle_gesture(GestureEvent::PanMove {
            delta: ScreenVector::new(30.0, 0.0),
        });
        explorer.handle_gesture(GestureEvent::PanEnd);

        assert!(explorer.needs_render());
        assert!(explorer.center().real < 0.0);
    }

    #[test]
    fn test_parameter_edits_request_redraw_only_on_change() {
        let mut explorer = explorer();
        settle(&mut explorer);

        explorer.set_hue_cycle(40);
        explorer.set_max_iterations(32);
        assert!(!explorer.needs_render());

        explorer.set_hue_cycle(12);
        assert!(explorer.needs_render());
        settle(&mut explorer);

        explorer.set_max_iterations(20_000);
        assert_eq!(explorer.params().max_iterations(), 10_000);
        assert!(explorer.needs_render());
        settle(&mut explorer);

        explorer.set_hue_shift_percent(125.0);
        assert!(explorer.needs_render());
    }

    #[test]
    fn test_supersampling_edit_requests_redraw_only_on_change() {
        let mut explorer = explorer();
        settle(&mut explorer);

        explorer.set_supersampling(1);
        assert!(!explorer.needs_render());

        explorer.set_supersampling(3);
        assert_eq!(explorer.supersampling(), 3);
        assert!(explorer.needs_render());
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut explorer = explorer();
        settle(&mut explorer);

        explorer.resize(800.0, 600.0);
        assert!(!explorer.needs_render());

        explorer.resize(1024.0, 768.0);
        assert!(explorer.needs_render());
        assert_eq!(explorer.viewport().width(), 1024.0);
    }

    #[test]
    fn test_reset_view_restores_initial_state() {
        let mut explorer = explorer();
        let initial = explorer.view();

        explorer.handle_gesture(GestureEvent::Wheel {
            offset: ScreenPoint::new(100.0, 50.0),
            direction: WheelDirection::ZoomIn,
        });
        explorer.handle_gesture(GestureEvent::PanStart);
        settle(&mut explorer);

        explorer.reset_view();

        assert_eq!(explorer.view(), initial);
        assert!(explorer.needs_render());
        assert_eq!(
            explorer.handle_gesture(GestureEvent::PanMove {
                delta: ScreenVector::new(5.0, 5.0)
            }),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn test_gestures_on_empty_viewport_are_ignored() {
        let mut explorer = explorer();
        explorer.resize(0.0, 0.0);
        settle(&mut explorer);

        let outcome = explorer.handle_gesture(GestureEvent::Wheel {
            offset: ScreenPoint::new(0.0, 0.0),
            direction: WheelDirection::ZoomOut,
        });

        assert_eq!(outcome, GestureOutcome::Ignored);
        assert!(!explorer.needs_render());
    }
}
