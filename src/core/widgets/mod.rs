//! On-screen widgets drawn over the fractal view.

pub mod box_shape;
pub mod input_box;
pub mod label;
pub mod label_kinds;
pub mod names;
pub mod number_format;
pub mod overlay;
pub mod ports;
pub mod settings;
pub mod tracking_box;
pub mod view_state;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;
