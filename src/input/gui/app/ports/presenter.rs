use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::input::gui::errors::GuiError;

/// A window surface that shows explorer frames with the egui panel on top.
pub trait GuiPresenterPort: FramePresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}
