use egui::Context;
use egui_winit::State as EguiWinitState;
use tracing::{error, warn};
use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, TouchPhase, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::Window,
};

use crate::controllers::interactive::InteractiveExplorer;
use crate::core::data::sample_grid::MAX_SUPERSAMPLING;
use crate::core::data::screen::ScreenPoint;
use crate::core::fractals::mandelbrot::params::{
    HUE_CYCLE_RANGE, HUE_SHIFT_PERCENT_RANGE, MAX_ITERATIONS_RANGE,
};
use crate::core::gestures::GestureEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::pointer_input::{MagnifyPhase, PointerInputState};

/// Pixel height of one scroll line for touchpads that report pixel deltas.
const PIXELS_PER_SCROLL_LINE: f64 = 40.0;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    explorer: InteractiveExplorer,
    pointer: PointerInputState,
    last_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        explorer: InteractiveExplorer,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            presenter,
            explorer,
            pointer: PointerInputState::new(),
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), GuiError> {
        event_loop.run(move |event, elwt| self.handle_event(event, elwt))?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                let response = self.egui_state.on_window_event(self.window, &event);
                if response.repaint {
                    self.window.request_redraw();
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => self.resize(size.width, size.height),
                    WindowEvent::ScaleFactorChanged { .. } => {
                        let size = self.window.inner_size();
                        self.resize(size.width, size.height);
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.redraw() {
                            error!(%err, "failed to draw window");
                            elwt.exit();
                        }
                    }
                    other if !response.consumed => self.handle_pointer_event(&other),
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if self.explorer.needs_render() {
                    self.window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.explorer.resize(f64::from(width), f64::from(height));

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            warn!(%err, width, height, "failed to resize surface");
        }
    }

    fn handle_pointer_event(&mut self, event: &WindowEvent) {
        let gesture = match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.move_to(ScreenPoint::new(position.x, position.y))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => Some(self.pointer.press()),
                ElementState::Released => self.pointer.release(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let lines_up = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_LINE,
                };
                self.pointer.wheel(lines_up)
            }
            WindowEvent::TouchpadMagnify { delta, phase, .. } => {
                let phase = match phase {
                    TouchPhase::Started => MagnifyPhase::Started,
                    TouchPhase::Moved => MagnifyPhase::Moved,
                    TouchPhase::Ended | TouchPhase::Cancelled => MagnifyPhase::Ended,
                };
                self.pointer.magnify(phase, *delta)
            }
            _ => None,
        };

        if let Some(gesture) = gesture {
            self.dispatch(gesture);
        }
    }

    fn dispatch(&mut self, gesture: GestureEvent) {
        self.explorer.handle_gesture(gesture);

        if self.explorer.needs_render() {
            self.window.request_redraw();
        }
    }

    fn redraw(&mut self) -> Result<(), GuiError> {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if egui_output
            .viewport_output
            .values()
            .any(|output| output.repaint_delay.is_zero())
        {
            self.window.request_redraw();
        }

        match self.explorer.step(&mut self.presenter) {
            Ok(_) => self.last_error_message = None,
            Err(err) => {
                warn!(%err, "frame render failed");
                self.last_error_message = Some(err.to_string());
            }
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let explorer = &mut self.explorer;
        let last_error_message = self.last_error_message.as_deref();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Controls")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 250.0])
                .show(ctx, |ui| {
                    ui.heading("Mandelbrot Explorer");
                    ui.separator();

                    let params = explorer.params();

                    let mut max_iterations = params.max_iterations();
                    ui.add(
                        egui::Slider::new(&mut max_iterations, MAX_ITERATIONS_RANGE)
                            .logarithmic(true)
                            .text("Max iterations"),
                    );
                    explorer.set_max_iterations(max_iterations);

                    let mut hue_cycle = params.hue_cycle();
                    ui.add(egui::Slider::new(&mut hue_cycle, HUE_CYCLE_RANGE).text("Hue cycle"));
                    explorer.set_hue_cycle(hue_cycle);

                    let mut hue_shift = params.hue_shift_percent();
                    ui.add(
                        egui::Slider::new(&mut hue_shift, HUE_SHIFT_PERCENT_RANGE)
                            .step_by(1.0)
                            .suffix("%")
                            .text("Hue shift"),
                    );
                    explorer.set_hue_shift_percent(hue_shift);

                    let mut supersampling = explorer.supersampling();
                    ui.add(
                        egui::Slider::new(&mut supersampling, 1..=MAX_SUPERSAMPLING)
                            .text("Supersampling"),
                    );
                    explorer.set_supersampling(supersampling);

                    ui.separator();
                    let center = explorer.center();
                    ui.label(format!("Center: {:.10}, {:.10}", center.real, center.imag));
                    ui.label(format!("Scale: {:.4e}", explorer.scale()));
                    ui.label(format!("Last frame: {:.1} ms", explorer.last_frame_cost_ms()));

                    if ui.button("Reset view").clicked() {
                        explorer.reset_view();
                    }

                    if let Some(message) = last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}
