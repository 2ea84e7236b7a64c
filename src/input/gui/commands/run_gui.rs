use std::marker::PhantomData;

use tracing::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveExplorer;
use crate::core::config::ExplorerConfig;
use crate::core::view::ViewportGeometry;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::new().build()?;

        // pixels needs a 'static surface handle
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let presenter: P = self.presenter_factory.build(window)?;
        let explorer = InteractiveExplorer::new(
            &self.config,
            ViewportGeometry::new(f64::from(size.width), f64::from(size.height)),
        );

        info!(width = size.width, height = size.height, "starting explorer window");
        GuiApp::new(window, &event_loop, presenter, explorer).run(event_loop)
    }
}
