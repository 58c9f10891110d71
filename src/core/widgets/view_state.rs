use crate::core::data::complex::Complex;
use crate::core::widgets::settings::{
    DEFAULT_ALGORITHM_INDEX, DEFAULT_COLOUR_SCHEME_INDEX, DEFAULT_MAGNIFICATION,
    DEFAULT_MAX_ITERATIONS, DEFAULT_POWER, INIT_JULIA_COORDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

/// Snapshot of everything the overlay describes about the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub kind: FractalKinds,
    pub julia_coords: Complex,
    pub power: i32,
    pub magnification: i32,
    pub max_iterations: u32,
    pub algorithm_index: i32,
    pub colour_scheme_index: i32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            kind: FractalKinds::default(),
            julia_coords: INIT_JULIA_COORDS,
            power: DEFAULT_POWER,
            magnification: DEFAULT_MAGNIFICATION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            algorithm_index: DEFAULT_ALGORITHM_INDEX,
            colour_scheme_index: DEFAULT_COLOUR_SCHEME_INDEX,
        }
    }
}
