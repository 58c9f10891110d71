use crate::core::widgets::ports::canvas::CanvasPort;

/// Result of a per-frame widget update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateCode {
    #[default]
    Idle,
}

/// Anything on screen the host loop refreshes once per frame.
pub trait Widget {
    fn update(&mut self, canvas: &dyn CanvasPort) -> UpdateCode;
}
