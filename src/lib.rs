mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod logging;
mod presenters;

pub use crate::controllers::cli::snapshot::SnapshotController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::plane_bounds::PlaneBounds;
pub use crate::core::data::point::Point;
pub use crate::core::geometry::geometry_2d::Geometry2D;
pub use crate::core::geometry::plane_geometry::{PlaneGeometry, default_region};
pub use crate::core::widgets::box_shape::{BoxShape, FloatRect};
pub use crate::core::widgets::input_box::InputBox;
pub use crate::core::widgets::label::{Font, FontFamily, Label};
pub use crate::core::widgets::label_kinds::{LabelKinds, OverlayLabels};
pub use crate::core::widgets::names::{
    AlgorithmKinds, ColourSchemeKinds, FunctionKinds, algorithm_name, colour_scheme_name,
    function_name,
};
pub use crate::core::widgets::overlay::Overlay;
pub use crate::core::widgets::ports::canvas::CanvasPort;
pub use crate::core::widgets::ports::draw_target::DrawTarget;
pub use crate::core::widgets::settings::{ZoomSettings, ZoomSettingsError};
pub use crate::core::widgets::tracking_box::TrackingBox;
pub use crate::core::widgets::view_state::{FractalKinds, ViewState};
pub use crate::core::widgets::widget::{UpdateCode, Widget};
pub use crate::logging::init_logging;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
