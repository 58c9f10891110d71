pub mod data;
pub mod geometry;
pub mod widgets;
