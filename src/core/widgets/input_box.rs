use crate::core::widgets::label::{Font, Label};
use crate::core::widgets::ports::canvas::CanvasPort;
use crate::core::widgets::settings::{
    DEFAULT_FILL_COLOUR, INIT_X_POS, INIT_Y_POS, INPUT_BOX_FONT_POINT, INPUT_BOX_X, INPUT_BOX_Y,
};
use crate::core::widgets::widget::{UpdateCode, Widget};

/// Single line of user-entered text.
pub struct InputBox {
    label: Label,
}

impl InputBox {
    #[must_use]
    pub fn new(font: Font) -> Self {
        Self {
            label: Label::new(
                font.with_point_size(INPUT_BOX_FONT_POINT),
                DEFAULT_FILL_COLOUR,
                INIT_X_POS + INPUT_BOX_X,
                INIT_Y_POS + INPUT_BOX_Y,
            ),
        }
    }

    #[must_use]
    pub fn get(&self) -> &str {
        self.label.text()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }
}

impl Widget for InputBox {
    fn update(&mut self, _canvas: &dyn CanvasPort) -> UpdateCode {
        UpdateCode::Idle
    }
}
