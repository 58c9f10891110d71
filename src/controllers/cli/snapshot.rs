use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::geometry::plane_geometry::{PlaneGeometry, default_region};
use crate::core::widgets::label::Font;
use crate::core::widgets::overlay::Overlay;
use crate::core::widgets::ports::canvas::CanvasPort;
use crate::core::widgets::settings::{
    BACKGROUND_DARK, BACKGROUND_LIGHT, BACKGROUND_TILE, ZoomSettings,
};
use crate::core::widgets::tracking_box::TrackingBox;
use crate::core::widgets::widget::Widget;

/// A canvas whose mouse never moves.
struct StaticCanvas {
    mouse: Point,
    pixel_rect: PixelRect,
}

impl CanvasPort for StaticCanvas {
    fn mouse_position(&self) -> Point {
        self.mouse
    }

    fn size(&self) -> (u32, u32) {
        (self.pixel_rect.width(), self.pixel_rect.height())
    }

    fn viewport(&self) -> Option<PixelRect> {
        Some(self.pixel_rect)
    }
}

/// Runs one frame of the widgets without a window and keeps the result.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    mouse: Point,
    zoom: ZoomSettings,
    frame: Option<FrameBuffer>,
    labels: Vec<String>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P, mouse: Point) -> Self {
        Self {
            presenter,
            mouse,
            zoom: ZoomSettings::default(),
            frame: None,
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomSettings) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let pixel_rect = PixelRect::from_size(self.zoom.canvas_width(), self.zoom.canvas_height())?;
        let geometry = Arc::new(PlaneGeometry::new(pixel_rect, default_region()));
        let canvas = StaticCanvas {
            mouse: self.mouse,
            pixel_rect,
        };

        let mut overlay = Overlay::new(Font::default(), geometry.clone(), self.zoom);
        let mut tracking_box = TrackingBox::new(&canvas, self.zoom);

        overlay.update(&canvas);
        tracking_box.update(&canvas);

        let bounds = tracking_box.get_boundaries(geometry.as_ref());
        overlay.set_notification(format!(
            "Next zoom: re [{:.4}, {:.4}], im [{:.4}, {:.4}]",
            bounds.x_min, bounds.x_max, -bounds.y_max, -bounds.y_min
        ));

        let mut frame = FrameBuffer::new(pixel_rect);
        frame.fill_checkerboard(BACKGROUND_TILE, BACKGROUND_DARK, BACKGROUND_LIGHT);
        tracking_box.draw_to_canvas(&canvas, &mut frame);

        info!(
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            mouse_x = self.mouse.x,
            mouse_y = self.mouse.y,
            "overlay snapshot generated"
        );

        self.labels = overlay
            .labels()
            .iter()
            .map(|label| label.text().to_string())
            .collect();
        for text in self.labels.iter().filter(|text| !text.is_empty()) {
            info!("{text}");
        }

        self.frame = Some(frame);

        Ok(())
    }

    /// Overlay label texts from the last `generate`, top to bottom.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            self.presenter.present(frame, filepath)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingPresenter {
        presented: Cell<usize>,
    }

    impl FilePresenterPort for CountingPresenter {
        fn present(&self, _frame: &FrameBuffer, _filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.set(self.presented.get() + 1);
            Ok(())
        }
    }

    fn create_controller(mouse: Point) -> SnapshotController<CountingPresenter> {
        SnapshotController::new(
            CountingPresenter {
                presented: Cell::new(0),
            },
            mouse,
        )
    }

    #[test]
    fn test_generate_fills_labels_in_screen_order() {
        let mut controller = create_controller(Point { x: 400, y: 300 });

        controller.generate().unwrap();
        let labels = controller.labels();

        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "Mandelbrot Set");
        assert!(labels[1].starts_with("X:  -0.74"));
        assert!(labels[2].starts_with("Y:  -0.0016"));
        assert_eq!(labels[3], "z^2 + c");
        assert!(labels[9].starts_with("Next zoom: re ["));
    }

    #[test]
    fn test_generate_draws_tracking_box_over_background() {
        let mut controller = create_controller(Point { x: 400, y: 300 });

        controller.generate().unwrap();
        let frame = controller.frame().unwrap();

        // box top-left corner over a dark tile, half-transparent white outline
        assert_eq!(frame.pixel(Point { x: 300, y: 225 }), Some([158, 158, 158, 255]));
        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some([60, 60, 60, 255]));
    }

    #[test]
    fn test_mouse_outside_canvas_leaves_background_untouched() {
        let mut controller = create_controller(Point { x: -10, y: -10 });

        controller.generate().unwrap();
        let frame = controller.frame().unwrap();

        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some([60, 60, 60, 255]));
        assert_eq!(frame.pixel(Point { x: 32, y: 0 }), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_write_only_presents_after_generate() {
        let mut controller = create_controller(Point { x: 400, y: 300 });

        controller.write("unused.ppm").unwrap();
        assert_eq!(controller.presenter.presented.get(), 0);

        controller.generate().unwrap();
        controller.write("unused.ppm").unwrap();
        assert_eq!(controller.presenter.presented.get(), 1);
    }

    #[test]
    fn test_degenerate_canvas_is_an_error() {
        let zoom = ZoomSettings::new(4, 1, 600).unwrap();
        let mut controller = create_controller(Point { x: 0, y: 0 }).with_zoom(zoom);

        assert!(controller.generate().is_err());
    }
}
