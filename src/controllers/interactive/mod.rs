//! Application layer for interactive exploration.
//!
//! `InteractiveExplorer` owns the view, routes gestures and parameter edits
//! into it, and hands frames to a `FramePresenterPort` through the
//! `RenderDriver` whenever a redraw is pending.

pub mod data;
pub mod errors;
mod explorer;
pub mod ports;
mod render_driver;

pub use explorer::InteractiveExplorer;
pub use render_driver::{FrameOutcome, RenderDriver};
