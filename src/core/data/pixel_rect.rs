use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect must be at least 2x2 pixels: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// An inclusive rectangle of canvas pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let dx = i64::from(bottom_right.x) - i64::from(top_left.x);
        let dy = i64::from(bottom_right.y) - i64::from(top_left.y);

        let width = dx + if dx >= 0 { 1 } else { -1 };
        let height = dy + if dy >= 0 { 1 } else { -1 };

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Canvas-sized rect anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let invalid = PixelRectError::InvalidSize {
            width: i64::from(width),
            height: i64::from(height),
        };

        let (Ok(right), Ok(bottom)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(invalid);
        };

        if width < 2 || height < 2 {
            return Err(invalid);
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: right - 1,
                y: bottom - 1,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}
