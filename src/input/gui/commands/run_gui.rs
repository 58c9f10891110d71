use tracing::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::core::widgets::settings::ZoomSettings;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    zoom: ZoomSettings,
}

impl RunGuiCommand {
    pub fn new(zoom: ZoomSettings) -> Self {
        Self { zoom }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Explorer")
                .with_inner_size(PhysicalSize::new(
                    self.zoom.canvas_width(),
                    self.zoom.canvas_height(),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, self.zoom)?;

        info!(
            width = self.zoom.canvas_width(),
            height = self.zoom.canvas_height(),
            zoom_factor = self.zoom.factor(),
            "window opened"
        );

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = app.update_ui(window);
                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(e) = app.render(egui_output) {
                            error!(error = %e, "render failed");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!(error = %e, "resize failed");
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.scale_factor = *scale_factor;
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
