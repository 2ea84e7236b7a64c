pub mod actions;
pub mod config;
pub mod data;
pub mod fractals;
pub mod gestures;
pub mod scheduling;
pub mod view;
