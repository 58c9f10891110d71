use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::widgets::box_shape::BoxShape;
use crate::core::widgets::ports::draw_target::DrawTarget;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.area() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect needs {} bytes but frame buffer holds {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// RGBA8 frame the overlay shapes are composited onto.
///
/// The layout matches the `pixels` crate frame, so a buffer can be copied
/// straight into the window surface.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixel_rect: PixelRect,
    buffer: Vec<u8>,
}

impl FrameBuffer {
    /// Opaque black frame.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let mut frame = Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        };
        frame.fill(Colour::BLACK);
        frame
    }

    pub fn from_data(pixel_rect: PixelRect, buffer: Vec<u8>) -> Result<Self, FrameBufferError> {
        let pixel_rect_size = pixel_rect_to_buffer_size(pixel_rect);

        if pixel_rect_size != buffer.len() {
            return Err(FrameBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<[u8; 4]> {
        let index = self.index_of(point)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.buffer[index..index + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    pub fn fill(&mut self, colour: Colour) {
        let rgba = [colour.r, colour.g, colour.b, colour.a];
        self.buffer
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .for_each(|pixel| pixel.copy_from_slice(&rgba));
    }

    /// Placeholder background shown where a fractal image would go.
    pub fn fill_checkerboard(&mut self, tile_size: u32, dark: Colour, light: Colour) {
        let tile_size = tile_size.max(1) as usize;
        let row_bytes = self.pixel_rect.width() as usize * BYTES_PER_PIXEL;

        self.buffer
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    let colour = if (x / tile_size + y / tile_size) % 2 == 0 {
                        dark
                    } else {
                        light
                    };
                    pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
                }
            });
    }

    /// Blends `colour` over one pixel; pixels outside the frame are clipped.
    pub fn blend_pixel(&mut self, point: Point, colour: Colour) {
        let Some(index) = self.index_of(point) else {
            return;
        };

        let dest = [
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ];
        let [r, g, b] = colour.blend_over(dest);

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, 255]);
    }

    /// Packed RGB copy of the frame, alpha dropped.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|pixel| [pixel[0], pixel[1], pixel[2]])
            .collect()
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.pixel_rect.contains_point(point) {
            return None;
        }

        let relative_x = (point.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (point.y - self.pixel_rect.top_left().y) as usize;

        Some((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }
}

impl DrawTarget for FrameBuffer {
    fn draw_box(&mut self, shape: &BoxShape) {
        let bounds = shape.global_bounds();
        let left = bounds.left.floor() as i32;
        let top = bounds.top.floor() as i32;
        let right = (bounds.left + bounds.width).floor() as i32;
        let bottom = (bounds.top + bounds.height).floor() as i32;
        let thickness = shape.outline_thickness().round() as i32;

        let frame_left = self.pixel_rect.top_left().x;
        let frame_top = self.pixel_rect.top_left().y;
        let frame_right = self.pixel_rect.bottom_right().x + 1;
        let frame_bottom = self.pixel_rect.bottom_right().y + 1;

        let fill = shape.fill_colour();
        let outline = shape.outline_colour();

        for y in top.max(frame_top)..bottom.min(frame_bottom) {
            for x in left.max(frame_left)..right.min(frame_right) {
                let on_outline = x < left + thickness
                    || x >= right - thickness
                    || y < top + thickness
                    || y >= bottom - thickness;

                let colour = if on_outline { outline } else { fill };

                if !colour.is_transparent() {
                    self.blend_pixel(Point { x, y }, colour);
                }
            }
        }
    }
}
