use crate::core::data::colour::Colour;
use crate::core::widgets::settings::DEFAULT_FONT_POINT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Proportional,
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub point_size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            point_size: DEFAULT_FONT_POINT,
        }
    }
}

impl Font {
    #[must_use]
    pub fn with_point_size(self, point_size: f32) -> Self {
        Self { point_size, ..self }
    }
}

/// A positioned, styled piece of on-screen text.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    position: (f32, f32),
    font: Font,
    fill_colour: Colour,
}

impl Label {
    #[must_use]
    pub fn new(font: Font, fill_colour: Colour, x: f32, y: f32) -> Self {
        Self {
            text: String::new(),
            position: (x, y),
            font,
            fill_colour,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    #[must_use]
    pub fn font(&self) -> Font {
        self.font
    }

    #[must_use]
    pub fn fill_colour(&self) -> Colour {
        self.fill_colour
    }
}
