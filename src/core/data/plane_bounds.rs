/// Plane-space extent of a pixel region, edge by edge.
///
/// Each field is the mapped coordinate of the matching pixel edge, so with a
/// y axis that grows downwards `y_min` may be numerically larger than
/// `y_max`. Nothing here reorders the values.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PlaneBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlaneBounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min).abs()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min).abs()
    }
}
