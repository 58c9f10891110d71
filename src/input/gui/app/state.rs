use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::geometry::geometry_2d::Geometry2D;
use crate::core::geometry::plane_geometry::{PlaneGeometry, default_region};
use crate::core::widgets::input_box::InputBox;
use crate::core::widgets::label::Font;
use crate::core::widgets::names::{AlgorithmKinds, ColourSchemeKinds, FunctionKinds};
use crate::core::widgets::overlay::Overlay;
use crate::core::widgets::ports::canvas::CanvasPort;
use crate::core::widgets::settings::ZoomSettings;
use crate::core::widgets::tracking_box::TrackingBox;
use crate::core::widgets::view_state::{FractalKinds, ViewState};
use crate::core::widgets::widget::Widget;

const MAX_POWER: i32 = 8;

/// Advances `index` by one through `len` table entries, wrapping at the end.
fn cycle_index(index: i32, len: usize) -> i32 {
    let len = i32::try_from(len).unwrap_or(i32::MAX).max(1);
    (index + 1).rem_euclid(len)
}

/// Widgets of the interactive window and the view they describe.
pub struct HudState {
    pub view: ViewState,
    zoom: ZoomSettings,
    geometry: Arc<PlaneGeometry>,
    pub overlay: Overlay,
    pub tracking_box: TrackingBox,
    pub input_box: InputBox,
    editing: bool,
}

impl HudState {
    pub fn new(canvas: &dyn CanvasPort, zoom: ZoomSettings) -> Result<Self, PixelRectError> {
        let (width, height) = canvas.size();
        let geometry = Arc::new(PlaneGeometry::new(
            PixelRect::from_size(width, height)?,
            default_region(),
        ));
        let view = ViewState::default();

        let mut overlay = Overlay::new(Font::default(), geometry.clone(), zoom);
        overlay.apply_state(&view);

        Ok(Self {
            view,
            zoom,
            geometry,
            overlay,
            tracking_box: TrackingBox::new(canvas, zoom),
            input_box: InputBox::new(Font::default()),
            editing: false,
        })
    }

    #[must_use]
    pub fn geometry(&self) -> &PlaneGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn update_widgets(&mut self, canvas: &dyn CanvasPort) {
        self.overlay.update(canvas);
        self.tracking_box.update(canvas);
        self.input_box.update(canvas);
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
        self.input_box.set("Max iterations: ");
        self.overlay.set_notification("Type a number, Enter to apply");
    }

    pub fn push_digit(&mut self, digit: char) {
        if self.editing && digit.is_ascii_digit() {
            let text = format!("{}{}", self.input_box.get(), digit);
            self.input_box.set(text);
        }
    }

    pub fn backspace(&mut self) {
        if !self.editing {
            return;
        }

        let text = self.input_box.get();
        if text.ends_with(|c: char| c.is_ascii_digit()) {
            let trimmed = text[..text.len() - 1].to_string();
            self.input_box.set(trimmed);
        }
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.input_box.set("");
        self.overlay.set_notification("");
    }

    /// Applies the typed number as the new iteration limit.
    pub fn commit_editing(&mut self) {
        if !self.editing {
            return;
        }

        let digits: String = self
            .input_box
            .get()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        match digits.parse::<u32>() {
            Ok(max_iterations) if max_iterations > 0 => {
                self.view.max_iterations = max_iterations;
                self.overlay.apply_state(&self.view);
                self.overlay
                    .set_notification(format!("Max iterations set to {max_iterations}"));
            }
            _ => {
                warn!(input = %digits, "rejected iteration limit");
                self.overlay.set_notification("Invalid iteration limit");
            }
        }

        self.editing = false;
        self.input_box.set("");
    }

    pub fn reset(&mut self) {
        self.view = ViewState::default();
        self.geometry = Arc::new(PlaneGeometry::new(
            self.geometry.pixel_rect(),
            default_region(),
        ));
        self.overlay.set_scales(self.geometry.clone());
        self.overlay.apply_state(&self.view);
        self.overlay.set_notification("View reset");
    }

    /// Switches to the Julia set seeded at the plane point under the mouse.
    pub fn select_julia(&mut self, canvas: &dyn CanvasPort) {
        let mouse = canvas.mouse_position();
        self.view.kind = FractalKinds::Julia;
        self.view.julia_coords =
            Complex::new(self.geometry.coord_x(mouse.x), -self.geometry.coord_y(mouse.y));
        self.overlay.apply_state(&self.view);
    }

    pub fn select_mandelbrot(&mut self) {
        self.view.kind = FractalKinds::Mandelbrot;
        self.overlay.apply_state(&self.view);
    }

    pub fn cycle_algorithm(&mut self) {
        self.view.algorithm_index = cycle_index(self.view.algorithm_index, AlgorithmKinds::ALL.len());
        self.overlay.algorithm(self.view.algorithm_index);
    }

    pub fn cycle_colour_scheme(&mut self) {
        self.view.colour_scheme_index =
            cycle_index(self.view.colour_scheme_index, ColourSchemeKinds::ALL.len());
        self.overlay.colour_scheme(self.view.colour_scheme_index);
    }

    /// Steps the power; below 1 it walks through the named functions.
    pub fn change_power(&mut self, delta: i32) {
        let min_power = -i32::try_from(FunctionKinds::ALL.len()).unwrap_or(0);
        self.view.power = (self.view.power + delta).clamp(min_power, MAX_POWER);
        self.overlay.power(self.view.power);
    }

    /// Zooms into the region under the tracking box.
    pub fn zoom_in(&mut self) {
        let bounds = self.tracking_box.get_boundaries(self.geometry.as_ref());

        match self.geometry.zoomed_to(bounds) {
            Ok(geometry) => {
                debug!(
                    x_min = bounds.x_min,
                    x_max = bounds.x_max,
                    y_min = bounds.y_min,
                    y_max = bounds.y_max,
                    "zooming in"
                );
                self.geometry = Arc::new(geometry);
                self.overlay.set_scales(self.geometry.clone());
                self.view.magnification = self.view.magnification.saturating_add(1);
                self.overlay.magnification(self.view.magnification);
                self.overlay
                    .set_notification(format!("Zoomed x{}", self.zoom.factor()));
            }
            Err(error) => {
                warn!(%error, "cannot zoom further");
                self.overlay.set_notification("Cannot zoom further");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::widgets::label_kinds::LabelKinds;
    use crate::core::widgets::test_support::FakeCanvas;

    fn create_state() -> (HudState, FakeCanvas) {
        let canvas = FakeCanvas::new(800, 600).with_mouse(400, 300);
        let state = HudState::new(&canvas, ZoomSettings::default()).unwrap();
        (state, canvas)
    }

    #[test]
    fn new_state_shows_default_view() {
        let (state, _) = create_state();

        assert_eq!(state.overlay.title(), "Mandelbrot Set");
        assert_eq!(state.overlay.label(LabelKinds::Power), "z^2 + c");
        assert_eq!(state.overlay.label(LabelKinds::Magnification), "Magnification:  1");
        assert!(!state.is_editing());
    }

    #[test]
    fn degenerate_canvas_is_rejected() {
        let canvas = FakeCanvas::new(1, 600);

        assert!(HudState::new(&canvas, ZoomSettings::default()).is_err());
    }

    #[test]
    fn typed_digits_become_the_iteration_limit() {
        let (mut state, _) = create_state();

        state.push_digit('5');
        assert_eq!(state.input_box.get(), "");

        state.start_editing();
        for digit in ['5', '1', 'x', '2'] {
            state.push_digit(digit);
        }
        state.backspace();
        state.push_digit('0');
        state.commit_editing();

        assert_eq!(state.view.max_iterations, 510);
        assert_eq!(state.overlay.max_iterations(), 510);
        assert_eq!(state.overlay.label(LabelKinds::Iteration), "Iteration:  0 of 510");
        assert_eq!(state.input_box.get(), "");
        assert!(!state.is_editing());
    }

    #[test]
    fn empty_or_zero_limit_is_rejected() {
        let (mut state, _) = create_state();

        state.start_editing();
        state.push_digit('0');
        state.commit_editing();

        assert_eq!(state.view.max_iterations, 256);
        assert_eq!(state.overlay.notification(), "Invalid iteration limit");
    }

    #[test]
    fn cancel_discards_input() {
        let (mut state, _) = create_state();

        state.start_editing();
        state.push_digit('9');
        state.cancel_editing();

        assert_eq!(state.input_box.get(), "");
        assert_eq!(state.overlay.notification(), "");
        assert_eq!(state.view.max_iterations, 256);
    }

    #[test]
    fn julia_is_seeded_from_the_mouse() {
        let (mut state, mut canvas) = create_state();
        canvas.mouse = Point { x: 0, y: 0 };

        state.select_julia(&canvas);

        assert_eq!(state.view.kind, FractalKinds::Julia);
        assert_eq!(state.view.julia_coords, Complex::new(-2.5, 1.0));
        assert_eq!(state.overlay.title(), "Julia Set (-2.5, 1)");

        state.select_mandelbrot();
        assert_eq!(state.overlay.title(), "Mandelbrot Set");
    }

    #[test]
    fn algorithm_and_colour_scheme_wrap_around() {
        let (mut state, _) = create_state();

        state.cycle_algorithm();
        assert_eq!(state.overlay.label(LabelKinds::Algorithm), "Algorithm:  Potential");
        state.cycle_algorithm();
        assert_eq!(state.view.algorithm_index, 0);

        for _ in 0..ColourSchemeKinds::ALL.len() {
            state.cycle_colour_scheme();
        }
        assert_eq!(state.view.colour_scheme_index, 0);
    }

    #[test]
    fn power_walks_into_named_functions_and_stops() {
        let (mut state, _) = create_state();

        state.change_power(-2);
        assert_eq!(state.overlay.label(LabelKinds::Power), "");
        state.change_power(-1);
        assert_eq!(state.view.power, -1);
        assert_eq!(
            state.overlay.label(LabelKinds::Power),
            FunctionKinds::OpalVein.display_name()
        );
        state.change_power(-5);
        assert_eq!(state.view.power, -1);

        state.change_power(100);
        assert_eq!(state.view.power, MAX_POWER);
    }

    #[test]
    fn zoom_in_narrows_the_plane_and_bumps_magnification() {
        let (mut state, canvas) = create_state();
        state.update_widgets(&canvas);
        let before = state.geometry().region();

        state.zoom_in();

        let after = state.geometry().region();
        assert!(after.width() < before.width());
        assert!(after.height() < before.height());
        assert_eq!(state.view.magnification, 1);
        assert_eq!(state.overlay.label(LabelKinds::Magnification), "Magnification:  4");
    }

    #[test]
    fn reset_restores_default_region() {
        let (mut state, canvas) = create_state();
        state.update_widgets(&canvas);
        state.zoom_in();

        state.reset();

        assert_eq!(state.geometry().region(), default_region());
        assert_eq!(state.view, ViewState::default());
        assert_eq!(state.overlay.notification(), "View reset");
    }
}
