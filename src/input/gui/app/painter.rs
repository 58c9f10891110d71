use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::core::data::colour::Colour;
use crate::core::widgets::box_shape::BoxShape;
use crate::core::widgets::label::{Font, FontFamily, Label};
use crate::core::widgets::ports::draw_target::DrawTarget;

fn to_colour32(colour: Colour) -> Color32 {
    Color32::from_rgba_unmultiplied(colour.r, colour.g, colour.b, colour.a)
}

fn to_font_id(font: Font) -> FontId {
    let family = match font.family {
        FontFamily::Proportional => egui::FontFamily::Proportional,
        FontFamily::Monospace => egui::FontFamily::Monospace,
    };

    FontId::new(font.point_size, family)
}

/// Paints widgets onto an egui layer.
///
/// Widgets work in physical pixels, egui in points, so every coordinate is
/// divided by the pixels-per-point ratio on the way through.
pub struct EguiOverlayPainter<'a> {
    painter: &'a Painter,
    pixels_per_point: f32,
}

impl<'a> EguiOverlayPainter<'a> {
    pub fn new(painter: &'a Painter, pixels_per_point: f32) -> Self {
        Self {
            painter,
            pixels_per_point: pixels_per_point.max(f32::EPSILON),
        }
    }

    fn to_points(&self, x: f32, y: f32) -> Pos2 {
        Pos2::new(x / self.pixels_per_point, y / self.pixels_per_point)
    }

    pub fn paint_label(&self, label: &Label) {
        if label.text().is_empty() {
            return;
        }

        let (x, y) = label.position();
        self.painter.text(
            self.to_points(x, y),
            Align2::LEFT_TOP,
            label.text(),
            to_font_id(label.font()),
            to_colour32(label.fill_colour()),
        );
    }
}

impl DrawTarget for EguiOverlayPainter<'_> {
    fn draw_box(&mut self, shape: &BoxShape) {
        let bounds = shape.global_bounds();
        let rect = Rect::from_min_size(
            self.to_points(bounds.left, bounds.top),
            Vec2::new(
                bounds.width / self.pixels_per_point,
                bounds.height / self.pixels_per_point,
            ),
        );

        if !shape.fill_colour().is_transparent() {
            self.painter
                .rect_filled(rect, 0.0, to_colour32(shape.fill_colour()));
        }

        // egui centres strokes on the edge; shrink so the outline stays inside
        let thickness = shape.outline_thickness() / self.pixels_per_point;
        if thickness > 0.0 {
            self.painter.rect_stroke(
                rect.shrink(thickness / 2.0),
                0.0,
                Stroke::new(thickness, to_colour32(shape.outline_colour())),
            );
        }
    }
}
