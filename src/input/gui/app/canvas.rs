use winit::event::WindowEvent;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::widgets::ports::canvas::CanvasPort;

/// Window state the widgets read, fed from winit events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinitCanvas {
    mouse: Point,
    width: u32,
    height: u32,
    cursor_inside: bool,
}

impl WinitCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            mouse: Point::default(),
            width,
            height,
            cursor_inside: false,
        }
    }

    /// Returns true if the event changed anything the widgets read.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_cursor(position.x, position.y);
                true
            }
            WindowEvent::CursorEntered { .. } => {
                self.cursor_inside = true;
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_inside = false;
                true
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                true
            }
            _ => false,
        }
    }

    pub fn move_cursor(&mut self, x: f64, y: f64) {
        self.mouse = Point {
            x: x.floor() as i32,
            y: y.floor() as i32,
        };
        self.cursor_inside = true;
    }

    pub fn leave(&mut self) {
        self.cursor_inside = false;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

impl CanvasPort for WinitCanvas {
    fn mouse_position(&self) -> Point {
        self.mouse
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn viewport(&self) -> Option<PixelRect> {
        PixelRect::from_size(self.width, self.height).ok()
    }

    fn mouse_in_view(&self) -> bool {
        self.cursor_inside
            && self
                .viewport()
                .is_some_and(|viewport| viewport.contains_point(self.mouse))
    }
}
