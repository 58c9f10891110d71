fn main() -> Result<(), fractal_hud::GuiError> {
    fractal_hud::init_logging();

    let command = fractal_hud::RunGuiCommand::new(fractal_hud::ZoomSettings::default());

    command.execute()
}
