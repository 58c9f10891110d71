pub mod canvas;
pub mod draw_target;
