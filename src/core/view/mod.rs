pub mod coordinate_mapper;
pub mod view_state;
pub mod viewport;

pub use coordinate_mapper::{CoordinateMapper, CoordinateMapperError};
pub use view_state::{ScaleLimits, ViewState, ViewUpdate};
pub use viewport::ViewportGeometry;
