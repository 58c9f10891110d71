/// Maps canvas pixels onto plane coordinates.
///
/// The overlay and tracking box only ever read through this trait; whoever
/// owns the view decides how pixels relate to the plane.
pub trait Geometry2D {
    fn coord_x(&self, pixel: i32) -> f64;
    fn coord_y(&self, pixel: i32) -> f64;
}
