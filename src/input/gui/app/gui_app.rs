use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::core::widgets::settings::ZoomSettings;
use crate::input::gui::app::canvas::WinitCanvas;
use crate::input::gui::app::painter::EguiOverlayPainter;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::HudState;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    canvas: WinitCanvas,
    hud: HudState,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        zoom: ZoomSettings,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        let canvas = WinitCanvas::new(size.width, size.height);
        let hud = HudState::new(&canvas, zoom)?;

        Ok(Self {
            scale_factor,
            presenter,
            canvas,
            hud,
            egui_ctx,
            egui_state,
        })
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.canvas.resize(width, height);

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.presenter.resize(width, height)
    }

    /// Runs one egui frame, painting the widgets onto the foreground layer.
    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let pixels_per_point = self.scale_factor as f32;

        self.hud.update_widgets(&self.canvas);

        let hud = &self.hud;
        let canvas = &self.canvas;
        self.egui_ctx.run(raw_input, |ctx| {
            let layer = egui::LayerId::new(egui::Order::Foreground, egui::Id::new("hud"));
            let painter = ctx.layer_painter(layer);
            let mut overlay_painter = EguiOverlayPainter::new(&painter, pixels_per_point);

            hud.tracking_box.draw_to_canvas(canvas, &mut overlay_painter);
            for label in hud.overlay.labels() {
                overlay_painter.paint_label(label);
            }
            overlay_painter.paint_label(hud.input_box.label());
        })
    }

    /// Returns true if the window needs a redraw.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        let mut repaint = response.repaint || self.canvas.handle_window_event(event);

        if response.consumed {
            return repaint;
        }

        match event {
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if self.canvas.mouse_in_view() => {
                self.hud.zoom_in();
                repaint = true;
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                self.handle_key(event);
                repaint = true;
            }
            _ => {}
        }

        repaint
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        let hud = &mut self.hud;

        if hud.is_editing() {
            match &event.logical_key {
                Key::Named(NamedKey::Enter) => hud.commit_editing(),
                Key::Named(NamedKey::Escape) => hud.cancel_editing(),
                Key::Named(NamedKey::Backspace) => hud.backspace(),
                Key::Character(text) => text.chars().for_each(|digit| hud.push_digit(digit)),
                _ => {}
            }
            return;
        }

        match &event.logical_key {
            Key::Named(NamedKey::Tab) => hud.start_editing(),
            Key::Named(NamedKey::ArrowUp) => hud.change_power(1),
            Key::Named(NamedKey::ArrowDown) => hud.change_power(-1),
            Key::Character(text) => match text.to_ascii_lowercase().as_str() {
                "r" => hud.reset(),
                "j" => hud.select_julia(&self.canvas),
                "m" => hud.select_mandelbrot(),
                "a" => hud.cycle_algorithm(),
                "c" => hud.cycle_colour_scheme(),
                _ => {}
            },
            _ => {}
        }
    }
}
