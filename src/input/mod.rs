//! Input adapters for the explorer.
//!
//! `pointer_input` turns raw pointer input into gesture events; `gui` wires
//! it to a window.

#[cfg(feature = "gui")]
pub mod gui;
pub mod pointer_input;
