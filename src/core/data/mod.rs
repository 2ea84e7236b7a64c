pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod sample_grid;
pub mod screen;
