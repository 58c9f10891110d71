use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// What the widgets need to know about the window they are drawn on.
pub trait CanvasPort {
    /// Mouse position relative to the canvas, possibly outside it.
    fn mouse_position(&self) -> Point;

    /// Canvas size in pixels.
    fn size(&self) -> (u32, u32);

    /// The visible part of the canvas, `None` while it has no usable area.
    fn viewport(&self) -> Option<PixelRect>;

    /// Window pixel to canvas coordinates through the current view.
    fn map_pixel_to_coords(&self, pixel: Point) -> Point {
        pixel
    }

    fn mouse_in_view(&self) -> bool {
        self.viewport()
            .is_some_and(|viewport| viewport.contains_point(self.mouse_position()))
    }
}
