use crate::core::data::complex::Complex;
use crate::core::geometry::geometry_2d::Geometry2D;
use crate::core::widgets::label::{Font, Label};
use crate::core::widgets::label_kinds::{LabelKinds, OverlayLabels};
use crate::core::widgets::names::{algorithm_name, colour_scheme_name, function_name};
use crate::core::widgets::number_format::{format_fixed, format_significant};
use crate::core::widgets::ports::canvas::CanvasPort;
use crate::core::widgets::settings::{
    DEFAULT_ALGORITHM_INDEX, DEFAULT_COLOUR_SCHEME_INDEX, DEFAULT_MAGNIFICATION,
    DEFAULT_MAX_ITERATIONS, DEFAULT_POWER, DEFAULT_TITLE, DISPLAY_PRECISION, INIT_JULIA_COORDS,
    ZoomSettings,
};
use crate::core::widgets::view_state::{FractalKinds, ViewState};
use crate::core::widgets::widget::{UpdateCode, Widget};
use std::sync::Arc;
use tracing::info;

/// Text HUD describing the current fractal view.
///
/// Every setter formats its value straight into the matching label and
/// returns `&mut Self`, so a host can chain the updates for one frame.
pub struct Overlay {
    labels: OverlayLabels,
    scales: Arc<dyn Geometry2D>,
    zoom: ZoomSettings,
    iteration: u32,
    max_iterations: u32,
}

impl Overlay {
    #[must_use]
    pub fn new(font: Font, scales: Arc<dyn Geometry2D>, zoom: ZoomSettings) -> Self {
        let mut overlay = Self {
            labels: OverlayLabels::new(font),
            scales,
            zoom,
            iteration: 0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        };

        overlay
            .set_type(FractalKinds::Mandelbrot, INIT_JULIA_COORDS)
            .power(DEFAULT_POWER)
            .magnification(DEFAULT_MAGNIFICATION)
            .set_iteration_with_max(0, DEFAULT_MAX_ITERATIONS)
            .algorithm(DEFAULT_ALGORITHM_INDEX)
            .colour_scheme(DEFAULT_COLOUR_SCHEME_INDEX);

        overlay
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        self.labels.as_slice()
    }

    #[must_use]
    pub fn label(&self, kind: LabelKinds) -> &str {
        self.labels.text(kind)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.labels.text(LabelKinds::Title)
    }

    #[must_use]
    pub fn notification(&self) -> &str {
        self.labels.text(LabelKinds::Notification)
    }

    #[must_use]
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn scales(&self) -> Arc<dyn Geometry2D> {
        Arc::clone(&self.scales)
    }

    /// Swaps in the geometry of a new view; coordinate labels follow on the next update.
    pub fn set_scales(&mut self, scales: Arc<dyn Geometry2D>) -> &mut Self {
        self.scales = scales;
        self
    }

    pub fn init_iteration(&mut self) -> u32 {
        self.iteration = 0;
        self.set_iteration(self.iteration);
        self.iteration
    }

    pub fn next_iteration(&mut self) -> u32 {
        self.iteration = self.iteration.saturating_add(1);
        self.set_iteration(self.iteration);
        self.iteration
    }

    pub fn set_type(&mut self, kind: FractalKinds, coords: Complex) -> &mut Self {
        match kind {
            FractalKinds::Mandelbrot => self.init_title(),
            FractalKinds::Julia => self.julia_title(coords),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.labels.set_text(LabelKinds::Title, title);
        self
    }

    pub fn init_title(&mut self) -> &mut Self {
        self.set_title(DEFAULT_TITLE)
    }

    pub fn julia_title(&mut self, coords: Complex) -> &mut Self {
        self.set_title(format!(
            "Julia Set ({}, {})",
            format_significant(coords.real, DISPLAY_PRECISION),
            format_significant(coords.imag, DISPLAY_PRECISION)
        ))
    }

    /// Positive powers are polynomials `z^n + c`; zero and below select a named function.
    pub fn power(&mut self, value: i32) -> &mut Self {
        let text = if value > 0 {
            format!("z^{value} + c")
        } else {
            value
                .checked_neg()
                .map_or("", function_name)
                .to_string()
        };

        self.labels.set_text(LabelKinds::Power, text);
        self
    }

    /// `value` counts zoom steps; the label shows the resulting scale factor.
    pub fn magnification(&mut self, value: i32) -> &mut Self {
        let factor = f64::from(self.zoom.factor()).powi(value) as i64;

        self.labels
            .set_text(LabelKinds::Magnification, format!("Magnification:  {factor}"));
        self
    }

    pub fn set_iteration(&mut self, iteration: u32) -> &mut Self {
        self.labels.set_text(
            LabelKinds::Iteration,
            format!("Iteration:  {} of {}", iteration, self.max_iterations),
        );
        self
    }

    pub fn set_iteration_with_max(&mut self, iteration: u32, max_iterations: u32) -> &mut Self {
        self.max_iterations = max_iterations;
        self.set_iteration(iteration)
    }

    pub fn algorithm(&mut self, index: i32) -> &mut Self {
        self.labels.set_text(
            LabelKinds::Algorithm,
            format!("Algorithm:  {}", algorithm_name(index)),
        );
        self
    }

    pub fn colour_scheme(&mut self, index: i32) -> &mut Self {
        self.labels.set_text(
            LabelKinds::ColourScheme,
            format!("Color Scheme:  {}", colour_scheme_name(index)),
        );
        self
    }

    pub fn set_notification(&mut self, message: impl Into<String>) -> &mut Self {
        let message = message.into();
        if !message.is_empty() {
            info!(%message, "overlay notification");
        }

        self.labels.set_text(LabelKinds::Notification, message);
        self
    }

    pub fn rendering(&mut self, is_rendering: bool) -> &mut Self {
        self.labels.set_text(
            LabelKinds::Rendering,
            if is_rendering { "Rendering..." } else { "" },
        );
        self
    }

    /// Re-applies a whole view; the iteration counter restarts from zero.
    pub fn apply_state(&mut self, state: &ViewState) -> &mut Self {
        self.iteration = 0;
        self.set_type(state.kind, state.julia_coords)
            .power(state.power)
            .magnification(state.magnification)
            .set_iteration_with_max(0, state.max_iterations)
            .algorithm(state.algorithm_index)
            .colour_scheme(state.colour_scheme_index)
    }
}

impl Widget for Overlay {
    fn update(&mut self, canvas: &dyn CanvasPort) -> UpdateCode {
        let mouse = canvas.mouse_position();
        let x = self.scales.coord_x(mouse.x);
        // plane y grows down the canvas, the readout grows up
        let y = -self.scales.coord_y(mouse.y);

        self.labels
            .set_text(LabelKinds::MouseX, format!("X:  {}", format_fixed(x)));
        self.labels
            .set_text(LabelKinds::MouseY, format!("Y:  {}", format_fixed(y)));

        UpdateCode::Idle
    }
}
