use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const WIDTH_PIXELS: u32 = 800;
pub const HEIGHT_PIXELS: u32 = 600;
pub const DEFAULT_ZOOM: u32 = 4;

pub const DEFAULT_TITLE: &str = "Mandelbrot Set";
pub const DEFAULT_POWER: i32 = 2;
pub const DEFAULT_MAGNIFICATION: i32 = 0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_ALGORITHM_INDEX: i32 = 0;
pub const DEFAULT_COLOUR_SCHEME_INDEX: i32 = 0;
pub const INIT_JULIA_COORDS: Complex = Complex::new(0.0, 0.0);
pub const DISPLAY_PRECISION: usize = 6;

// label layout, in pixels
pub const INIT_X_POS: f32 = 10.0;
pub const INIT_Y_POS: f32 = 10.0;
pub const ITEM_HEIGHT: f32 = 20.0;
pub const STATUS_GAP: f32 = 15.0;
pub const INPUT_BOX_X: f32 = 0.0;
pub const INPUT_BOX_Y: f32 = 260.0;

pub const DEFAULT_FONT_POINT: f32 = 14.0;
pub const INPUT_BOX_FONT_POINT: f32 = 18.0;
pub const DEFAULT_FILL_COLOUR: Colour = Colour::WHITE;

pub const TRACKING_BOX_OUTLINE: Colour = Colour::rgba(255, 255, 255, 128);
pub const TRACKING_BOX_OUTLINE_THICKNESS: f32 = 3.0;

// stand-in background until a fractal frame is available
pub const BACKGROUND_TILE: u32 = 32;
pub const BACKGROUND_DARK: Colour = Colour::rgb(60, 60, 60);
pub const BACKGROUND_LIGHT: Colour = Colour::rgb(200, 200, 200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomSettingsError {
    ZeroFactor,
}

impl fmt::Display for ZoomSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFactor => write!(f, "zoom factor must be greater than zero"),
        }
    }
}

impl Error for ZoomSettingsError {}

/// Application-wide zoom configuration.
///
/// One click zooms into a box `1 / factor` the size of the canvas, so the
/// same factor drives both the tracking box size and the magnification shown
/// in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomSettings {
    factor: u32,
    canvas_width: u32,
    canvas_height: u32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            factor: DEFAULT_ZOOM,
            canvas_width: WIDTH_PIXELS,
            canvas_height: HEIGHT_PIXELS,
        }
    }
}

impl ZoomSettings {
    pub fn new(factor: u32, canvas_width: u32, canvas_height: u32) -> Result<Self, ZoomSettingsError> {
        if factor == 0 {
            return Err(ZoomSettingsError::ZeroFactor);
        }

        Ok(Self {
            factor,
            canvas_width,
            canvas_height,
        })
    }

    #[must_use]
    pub fn factor(&self) -> u32 {
        self.factor
    }

    #[must_use]
    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    #[must_use]
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    #[must_use]
    pub fn box_width(&self) -> u32 {
        self.canvas_width / self.factor
    }

    #[must_use]
    pub fn box_height(&self) -> u32 {
        self.canvas_height / self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_is_a_quarter_of_the_canvas() {
        let zoom = ZoomSettings::default();

        assert_eq!(zoom.factor(), 4);
        assert_eq!(zoom.box_width(), 200);
        assert_eq!(zoom.box_height(), 150);
    }

    #[test]
    fn test_box_size_uses_integer_division() {
        for factor in 1..=16 {
            let zoom = ZoomSettings::new(factor, 801, 601).unwrap();

            assert_eq!(zoom.box_width(), 801 / factor);
            assert_eq!(zoom.box_height(), 601 / factor);
        }
    }

    #[test]
    fn test_zero_factor_is_rejected() {
        assert_eq!(ZoomSettings::new(0, 800, 600), Err(ZoomSettingsError::ZeroFactor));
    }
}
