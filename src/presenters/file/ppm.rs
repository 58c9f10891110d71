use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::Write;
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(filepath)?);
        let width = frame.pixel_rect().width();
        let height = frame.pixel_rect().height();

        // P6: binary RGB, then width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;
        file.write_all(&frame.to_rgb())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_present_writes_header_and_rgb_payload() {
        let mut frame = FrameBuffer::new(PixelRect::from_size(3, 2).unwrap());
        frame.fill(Colour::rgb(9, 8, 7));
        let filepath = std::env::temp_dir().join(format!("fractal_hud_ppm_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&frame, &filepath).unwrap();
        let written = std::fs::read(&filepath).unwrap();
        std::fs::remove_file(&filepath).unwrap();

        let header = b"P6\n3 2\n255\n";
        assert_eq!(&written[..header.len()], header);
        assert_eq!(written.len(), header.len() + 18);
        assert_eq!(&written[header.len()..header.len() + 3], &[9, 8, 7]);
    }
}
