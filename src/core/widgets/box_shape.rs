use crate::core::data::colour::Colour;

/// Axis-aligned rect in canvas pixels, fractional like the shape it came from.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FloatRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A rectangle with an outline drawn inside its edges.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    position: (f32, f32),
    size: (f32, f32),
    outline_colour: Colour,
    outline_thickness: f32,
    fill_colour: Colour,
}

impl BoxShape {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: (0.0, 0.0),
            size: (width, height),
            outline_colour: Colour::WHITE,
            outline_thickness: 0.0,
            fill_colour: Colour::TRANSPARENT,
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.position = (x, y);
        self
    }

    #[must_use]
    pub fn with_outline(mut self, colour: Colour, thickness: f32) -> Self {
        self.outline_colour = colour;
        self.outline_thickness = thickness.max(0.0);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, colour: Colour) -> Self {
        self.fill_colour = colour;
        self
    }

    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        self.size
    }

    #[must_use]
    pub fn outline_colour(&self) -> Colour {
        self.outline_colour
    }

    #[must_use]
    pub fn outline_thickness(&self) -> f32 {
        self.outline_thickness
    }

    #[must_use]
    pub fn fill_colour(&self) -> Colour {
        self.fill_colour
    }

    /// The outline sits inside the shape, so the bounds are exactly position and size.
    #[must_use]
    pub fn global_bounds(&self) -> FloatRect {
        FloatRect {
            left: self.position.0,
            top: self.position.1,
            width: self.size.0,
            height: self.size.1,
        }
    }
}
