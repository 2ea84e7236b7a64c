pub mod redraw_flag;

pub use redraw_flag::{RedrawFlag, RenderTicket};
