use crate::core::widgets::box_shape::BoxShape;

pub trait DrawTarget {
    fn draw_box(&mut self, shape: &BoxShape);
}
