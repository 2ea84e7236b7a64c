//! GUI input adapter for interactive exploration.
//!
//! winit owns the window, pixels the framebuffer and egui the control panel.

pub mod app;
pub mod commands;
pub mod errors;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
