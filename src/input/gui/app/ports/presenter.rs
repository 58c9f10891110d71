use egui::Context as EguiContext;

use crate::input::gui::errors::GuiError;

pub trait GuiPresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
}
