fn main() -> Result<(), Box<dyn std::error::Error>> {
    fractal_hud::init_logging();

    std::fs::create_dir_all("output")?;

    let presenter = fractal_hud::PpmFilePresenter::new();
    let mut controller =
        fractal_hud::SnapshotController::new(presenter, fractal_hud::Point { x: 400, y: 300 });

    controller.generate()?;
    controller.write("output/overlay.ppm")?;

    Ok(())
}
