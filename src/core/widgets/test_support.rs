use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::geometry::geometry_2d::Geometry2D;
use crate::core::widgets::ports::canvas::CanvasPort;

pub struct FakeCanvas {
    pub mouse: Point,
    pub width: u32,
    pub height: u32,
    /// Added to the mouse by `map_pixel_to_coords`, standing in for a scrolled view.
    pub view_offset: Point,
}

impl FakeCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            mouse: Point { x: 0, y: 0 },
            width,
            height,
            view_offset: Point { x: 0, y: 0 },
        }
    }

    pub fn with_mouse(mut self, x: i32, y: i32) -> Self {
        self.mouse = Point { x, y };
        self
    }
}

impl CanvasPort for FakeCanvas {
    fn mouse_position(&self) -> Point {
        self.mouse
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn viewport(&self) -> Option<PixelRect> {
        PixelRect::from_size(self.width, self.height).ok()
    }

    fn map_pixel_to_coords(&self, pixel: Point) -> Point {
        Point {
            x: pixel.x + self.view_offset.x,
            y: pixel.y + self.view_offset.y,
        }
    }
}

/// `coord = pixel * scale + offset` on each axis.
pub struct LinearTestGeometry {
    pub scale_x: f64,
    pub offset_x: f64,
    pub scale_y: f64,
    pub offset_y: f64,
}

impl Geometry2D for LinearTestGeometry {
    fn coord_x(&self, pixel: i32) -> f64 {
        f64::from(pixel) * self.scale_x + self.offset_x
    }

    fn coord_y(&self, pixel: i32) -> f64 {
        f64::from(pixel) * self.scale_y + self.offset_y
    }
}
