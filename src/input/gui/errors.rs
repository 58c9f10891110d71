use std::error::Error;
use std::fmt;

use crate::core::data::pixel_rect::PixelRectError;

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Texture(pixels::TextureError),
    Canvas(PixelRectError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(error) => write!(f, "event loop failed: {}", error),
            Self::Window(error) => write!(f, "could not create window: {}", error),
            Self::Surface(error) => write!(f, "could not create pixels surface: {}", error),
            Self::Texture(error) => write!(f, "could not resize pixels surface: {}", error),
            Self::Canvas(error) => write!(f, "invalid canvas: {}", error),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(error) => Some(error),
            Self::Window(error) => Some(error),
            Self::Surface(error) => Some(error),
            Self::Texture(error) => Some(error),
            Self::Canvas(error) => Some(error),
        }
    }
}

impl From<winit::error::EventLoopError> for GuiError {
    fn from(error: winit::error::EventLoopError) -> Self {
        Self::EventLoop(error)
    }
}

impl From<winit::error::OsError> for GuiError {
    fn from(error: winit::error::OsError) -> Self {
        Self::Window(error)
    }
}

impl From<pixels::Error> for GuiError {
    fn from(error: pixels::Error) -> Self {
        Self::Surface(error)
    }
}

impl From<pixels::TextureError> for GuiError {
    fn from(error: pixels::TextureError) -> Self {
        Self::Texture(error)
    }
}

impl From<PixelRectError> for GuiError {
    fn from(error: PixelRectError) -> Self {
        Self::Canvas(error)
    }
}
