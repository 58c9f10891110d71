use crate::core::data::plane_bounds::PlaneBounds;
use crate::core::geometry::geometry_2d::Geometry2D;
use crate::core::widgets::box_shape::BoxShape;
use crate::core::widgets::ports::canvas::CanvasPort;
use crate::core::widgets::ports::draw_target::DrawTarget;
use crate::core::widgets::settings::{
    TRACKING_BOX_OUTLINE, TRACKING_BOX_OUTLINE_THICKNESS, ZoomSettings,
};
use crate::core::widgets::widget::{UpdateCode, Widget};
use tracing::trace;

/// Origin of a box centred on the mouse along one axis, if it fits on the canvas.
fn fitted_origin(mouse: f32, size: f32, canvas_size: f32) -> Option<f32> {
    let half = size / 2.0;

    (mouse - half >= 0.0 && mouse + half <= canvas_size).then_some(mouse - half)
}

/// Mouse-following rectangle marking the region the next zoom will show.
pub struct TrackingBox {
    shape: BoxShape,
}

impl TrackingBox {
    /// The box starts with its top-left corner under the mouse.
    #[must_use]
    pub fn new(canvas: &dyn CanvasPort, zoom: ZoomSettings) -> Self {
        let mouse = canvas.mouse_position();
        let shape = BoxShape::new(zoom.box_width() as f32, zoom.box_height() as f32)
            .with_position(mouse.x as f32, mouse.y as f32)
            .with_outline(TRACKING_BOX_OUTLINE, TRACKING_BOX_OUTLINE_THICKNESS);

        Self { shape }
    }

    #[must_use]
    pub fn shape(&self) -> &BoxShape {
        &self.shape
    }

    /// Centres the box on `(x, y)` without any bounds check.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let (width, height) = self.shape.size();
        self.shape
            .set_position(x as f32 - width / 2.0, y as f32 - height / 2.0);
    }

    pub fn draw_to<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        target.draw_box(&self.shape);
    }

    /// Draws only while the mouse is over the canvas viewport.
    pub fn draw_to_canvas<T: DrawTarget + ?Sized>(&self, canvas: &dyn CanvasPort, target: &mut T) {
        if canvas.mouse_in_view() {
            self.draw_to(target);
        }
    }

    /// Plane coordinates of the box edges, each edge mapped on its own.
    ///
    /// No reordering happens: if the geometry flips an axis, the `*_min`
    /// field holds the larger value.
    #[must_use]
    pub fn get_boundaries(&self, geometry: &dyn Geometry2D) -> PlaneBounds {
        let rect = self.shape.global_bounds();
        let left = rect.left as i32;
        let top = rect.top as i32;

        PlaneBounds {
            x_min: geometry.coord_x(left),
            x_max: geometry.coord_x(left + rect.width as i32),
            y_min: geometry.coord_y(top),
            y_max: geometry.coord_y(top + rect.height as i32),
        }
    }
}

impl Widget for TrackingBox {
    /// Each axis follows the mouse only while the box fits on that axis; an
    /// axis that would overflow keeps its previous position.
    fn update(&mut self, canvas: &dyn CanvasPort) -> UpdateCode {
        let mouse = canvas.map_pixel_to_coords(canvas.mouse_position());
        let (canvas_width, canvas_height) = canvas.size();
        let (width, height) = self.shape.size();
        let (current_x, current_y) = self.shape.position();

        let x = fitted_origin(mouse.x as f32, width, canvas_width as f32);
        let y = fitted_origin(mouse.y as f32, height, canvas_height as f32);

        if x.is_none() || y.is_none() {
            trace!(x = mouse.x, y = mouse.y, "tracking box held at canvas edge");
        }

        self.shape
            .set_position(x.unwrap_or(current_x), y.unwrap_or(current_y));

        UpdateCode::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::widgets::test_support::{FakeCanvas, LinearTestGeometry};

    #[derive(Default)]
    struct RecordingTarget {
        drawn: Vec<BoxShape>,
    }

    impl DrawTarget for RecordingTarget {
        fn draw_box(&mut self, shape: &BoxShape) {
            self.drawn.push(shape.clone());
        }
    }

    fn create_box(mouse_x: i32, mouse_y: i32) -> (TrackingBox, FakeCanvas) {
        let canvas = FakeCanvas::new(800, 600).with_mouse(mouse_x, mouse_y);
        let tracking_box = TrackingBox::new(&canvas, ZoomSettings::default());
        (tracking_box, canvas)
    }

    #[test]
    fn box_size_is_canvas_divided_by_zoom_factor() {
        let canvas = FakeCanvas::new(800, 600);

        for factor in [1, 2, 3, 4, 7, 10] {
            let zoom = ZoomSettings::new(factor, 800, 600).unwrap();
            let tracking_box = TrackingBox::new(&canvas, zoom);

            assert_eq!(
                tracking_box.shape().size(),
                ((800 / factor) as f32, (600 / factor) as f32)
            );
        }
    }

    #[test]
    fn new_box_starts_at_mouse_with_translucent_outline() {
        let (tracking_box, _) = create_box(30, 40);

        assert_eq!(tracking_box.shape().position(), (30.0, 40.0));
        assert_eq!(tracking_box.shape().outline_colour(), Colour::rgba(255, 255, 255, 128));
        assert_eq!(tracking_box.shape().outline_thickness(), 3.0);
        assert_eq!(tracking_box.shape().fill_colour(), Colour::TRANSPARENT);
    }

    #[test]
    fn update_centres_box_on_mouse_when_it_fits() {
        let (mut tracking_box, mut canvas) = create_box(0, 0);
        canvas.mouse = Point { x: 400, y: 300 };

        assert_eq!(tracking_box.update(&canvas), UpdateCode::Idle);

        assert_eq!(tracking_box.shape().position(), (300.0, 225.0));
    }

    #[test]
    fn update_accepts_box_touching_canvas_edges() {
        let (mut tracking_box, mut canvas) = create_box(0, 0);

        canvas.mouse = Point { x: 100, y: 75 };
        tracking_box.update(&canvas);
        assert_eq!(tracking_box.shape().position(), (0.0, 0.0));

        canvas.mouse = Point { x: 700, y: 525 };
        tracking_box.update(&canvas);
        assert_eq!(tracking_box.shape().position(), (600.0, 450.0));
    }

    #[test]
    fn update_freezes_only_the_axis_that_would_overflow() {
        let (mut tracking_box, mut canvas) = create_box(0, 0);
        canvas.mouse = Point { x: 400, y: 300 };
        tracking_box.update(&canvas);

        canvas.mouse = Point { x: 50, y: 200 };
        tracking_box.update(&canvas);
        assert_eq!(tracking_box.shape().position(), (300.0, 125.0));

        canvas.mouse = Point { x: 500, y: 590 };
        tracking_box.update(&canvas);
        assert_eq!(tracking_box.shape().position(), (400.0, 125.0));
    }

    #[test]
    fn update_keeps_position_when_both_axes_overflow() {
        let (mut tracking_box, mut canvas) = create_box(0, 0);
        canvas.mouse = Point { x: 400, y: 300 };
        tracking_box.update(&canvas);

        canvas.mouse = Point { x: -20, y: 900 };
        tracking_box.update(&canvas);

        assert_eq!(tracking_box.shape().position(), (300.0, 225.0));
    }

    #[test]
    fn update_uses_mapped_view_coordinates() {
        let (mut tracking_box, mut canvas) = create_box(0, 0);
        canvas.mouse = Point { x: 300, y: 200 };
        canvas.view_offset = Point { x: 100, y: 100 };

        tracking_box.update(&canvas);

        assert_eq!(tracking_box.shape().position(), (300.0, 225.0));
    }

    #[test]
    fn move_to_centres_without_clamping() {
        let (mut tracking_box, _) = create_box(0, 0);

        tracking_box.move_to(10, 10);

        assert_eq!(tracking_box.shape().position(), (-90.0, -65.0));
    }

    #[test]
    fn draw_to_always_draws() {
        let (tracking_box, _) = create_box(900, 900);
        let mut target = RecordingTarget::default();

        tracking_box.draw_to(&mut target);

        assert_eq!(target.drawn, vec![tracking_box.shape().clone()]);
    }

    #[test]
    fn draw_to_canvas_skips_when_mouse_outside_viewport() {
        let (tracking_box, mut canvas) = create_box(400, 300);
        let mut target = RecordingTarget::default();

        tracking_box.draw_to_canvas(&canvas, &mut target);
        assert_eq!(target.drawn.len(), 1);

        canvas.mouse = Point { x: 800, y: 300 };
        tracking_box.draw_to_canvas(&canvas, &mut target);
        assert_eq!(target.drawn.len(), 1);
    }

    #[test]
    fn boundaries_map_each_edge_independently() {
        let (mut tracking_box, mut canvas) = create_box(0, 0);
        canvas.mouse = Point { x: 400, y: 300 };
        tracking_box.update(&canvas);

        let geometry = LinearTestGeometry {
            scale_x: 0.01,
            offset_x: -4.0,
            scale_y: -0.01,
            offset_y: 3.0,
        };

        let bounds = tracking_box.get_boundaries(&geometry);

        assert_eq!(bounds.x_min, geometry.coord_x(300));
        assert_eq!(bounds.x_max, geometry.coord_x(500));
        assert_eq!(bounds.y_min, geometry.coord_y(225));
        assert_eq!(bounds.y_max, geometry.coord_y(375));
        assert!(bounds.y_min > bounds.y_max);
    }

    #[test]
    fn boundaries_truncate_fractional_positions() {
        let canvas = FakeCanvas::new(802, 603).with_mouse(0, 0);
        let zoom = ZoomSettings::new(2, 802, 603).unwrap();
        let mut tracking_box = TrackingBox::new(&canvas, zoom);
        tracking_box.move_to(401, 301);

        let geometry = LinearTestGeometry {
            scale_x: 1.0,
            offset_x: 0.0,
            scale_y: 1.0,
            offset_y: 0.0,
        };
        let bounds = tracking_box.get_boundaries(&geometry);

        assert_eq!(tracking_box.shape().position(), (200.5, 150.5));
        assert_eq!(bounds.x_min, 200.0);
        assert_eq!(bounds.x_max, 601.0);
        assert_eq!(bounds.y_min, 150.0);
        assert_eq!(bounds.y_max, 451.0);
    }
}
