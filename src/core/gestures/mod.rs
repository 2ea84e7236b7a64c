pub mod controller;
pub mod events;
pub mod snapshot;

pub use controller::{DEFAULT_ZOOM_STEP, GestureController};
pub use events::{GestureEvent, GestureOutcome, WheelDirection};
