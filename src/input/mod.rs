//! Input adapters for the fractal explorer HUD.
//!
//! This module contains adapters that receive window and keyboard input and
//! translate them into widget updates.

#[cfg(feature = "gui")]
pub mod gui;
