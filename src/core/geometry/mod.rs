pub mod geometry_2d;
pub mod plane_geometry;
