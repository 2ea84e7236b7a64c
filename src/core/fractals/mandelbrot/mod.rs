pub mod algorithm;
pub mod colour_map;
pub mod hue;
pub mod iteration_result;
pub mod params;
