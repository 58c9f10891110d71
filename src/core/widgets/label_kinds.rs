use crate::core::widgets::label::{Font, Label};
use crate::core::widgets::settings::{
    DEFAULT_FILL_COLOUR, INIT_X_POS, INIT_Y_POS, ITEM_HEIGHT, STATUS_GAP,
};
use std::ops::{Index, IndexMut};

/// The overlay's label slots, in screen order from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKinds {
    Title,
    MouseX,
    MouseY,
    Power,
    Magnification,
    Iteration,
    Algorithm,
    ColourScheme,
    Rendering,
    Notification,
}

impl LabelKinds {
    pub const COUNT: usize = 10;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Title,
        Self::MouseX,
        Self::MouseY,
        Self::Power,
        Self::Magnification,
        Self::Iteration,
        Self::Algorithm,
        Self::ColourScheme,
        Self::Rendering,
        Self::Notification,
    ];

    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Status lines sit a little apart from the view metadata.
    #[must_use]
    pub const fn is_status(self) -> bool {
        matches!(self, Self::Rendering | Self::Notification)
    }

    #[must_use]
    pub fn screen_position(self) -> (f32, f32) {
        let gap = if self.is_status() { STATUS_GAP } else { 0.0 };

        (INIT_X_POS, INIT_Y_POS + self.ordinal() as f32 * ITEM_HEIGHT + gap)
    }
}

/// One label per [`LabelKinds`] variant.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLabels {
    labels: [Label; LabelKinds::COUNT],
}

impl OverlayLabels {
    #[must_use]
    pub fn new(font: Font) -> Self {
        Self {
            labels: LabelKinds::ALL.map(|kind| {
                let (x, y) = kind.screen_position();
                Label::new(font, DEFAULT_FILL_COLOUR, x, y)
            }),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    pub fn set_text(&mut self, kind: LabelKinds, text: impl Into<String>) {
        self[kind].set_text(text);
    }

    #[must_use]
    pub fn text(&self, kind: LabelKinds) -> &str {
        self[kind].text()
    }
}

impl Index<LabelKinds> for OverlayLabels {
    type Output = Label;

    fn index(&self, kind: LabelKinds) -> &Label {
        &self.labels[kind.ordinal()]
    }
}

impl IndexMut<LabelKinds> for OverlayLabels {
    fn index_mut(&mut self, kind: LabelKinds) -> &mut Label {
        &mut self.labels[kind.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (expected, kind) in LabelKinds::ALL.iter().enumerate() {
            assert_eq!(kind.ordinal(), expected);
        }
    }

    #[test]
    fn test_metadata_labels_are_stacked_by_item_height() {
        assert_eq!(LabelKinds::Title.screen_position(), (10.0, 10.0));
        assert_eq!(LabelKinds::MouseY.screen_position(), (10.0, 50.0));
        assert_eq!(LabelKinds::ColourScheme.screen_position(), (10.0, 150.0));
    }

    #[test]
    fn test_status_labels_are_pushed_down() {
        assert_eq!(LabelKinds::Rendering.screen_position(), (10.0, 185.0));
        assert_eq!(LabelKinds::Notification.screen_position(), (10.0, 205.0));
    }

    #[test]
    fn test_labels_are_addressed_by_kind() {
        let mut labels = OverlayLabels::new(Font::default());

        labels.set_text(LabelKinds::Power, "z^2 + c");

        assert_eq!(labels.text(LabelKinds::Power), "z^2 + c");
        assert_eq!(labels.as_slice()[3].text(), "z^2 + c");
        assert!(labels.text(LabelKinds::Title).is_empty());
        assert_eq!(labels[LabelKinds::Iteration].position(), (10.0, 110.0));
    }
}
