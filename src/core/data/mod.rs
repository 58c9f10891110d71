pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod frame_buffer;
pub mod pixel_rect;
pub mod plane_bounds;
pub mod point;
