pub mod canvas;
pub mod gui_app;
pub mod painter;
pub mod ports;
pub mod state;
