use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::geometry::geometry_2d::Geometry2D;

#[must_use]
pub fn default_region() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.5, -1.0), Complex::new(1.0, 1.0))
        .expect("default region is valid")
}

/// Linear mapping of a canvas pixel rect onto a region of the complex plane.
///
/// The top-left pixel maps to the region's top-left corner and the
/// bottom-right pixel to its bottom-right corner, so plane y grows
/// downwards with the canvas. Pixels outside the canvas are extrapolated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneGeometry {
    pixel_rect: PixelRect,
    region: ComplexRect,
}

impl PlaneGeometry {
    #[must_use]
    pub fn new(pixel_rect: PixelRect, region: ComplexRect) -> Self {
        Self { pixel_rect, region }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    /// Same canvas, new region spanning `bounds`.
    pub fn zoomed_to(&self, bounds: PlaneBounds) -> Result<Self, ComplexRectError> {
        Ok(Self {
            pixel_rect: self.pixel_rect,
            region: ComplexRect::from_bounds(bounds)?,
        })
    }
}

impl Geometry2D for PlaneGeometry {
    fn coord_x(&self, pixel: i32) -> f64 {
        let relative = f64::from(pixel - self.pixel_rect.top_left().x);
        let span = f64::from(self.pixel_rect.width() - 1);

        self.region.top_left().real + (relative / span) * self.region.width()
    }

    fn coord_y(&self, pixel: i32) -> f64 {
        let relative = f64::from(pixel - self.pixel_rect.top_left().y);
        let span = f64::from(self.pixel_rect.height() - 1);

        self.region.top_left().imag + (relative / span) * self.region.height()
    }
}
