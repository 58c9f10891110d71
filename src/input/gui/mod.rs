//! Interactive window hosting the overlay widgets.
//!
//! winit owns the window and input, pixels holds the background frame and
//! egui paints the overlay text and the tracking box on top of it.

pub mod app;
pub mod commands;
pub mod errors;
