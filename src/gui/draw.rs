use super::{App, Config};
use crate::{NiceInt, Snapshot};
use eframe::egui::{load::SizedTexture, ColorImage, Image, RichText, TextureOptions, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn draw_status(&self, ui: &mut Ui, shown: &Snapshot) {
        let state = if self.is_paused { "paused" } else { "running" };
        ui.horizontal(|ui| {
            ui.label(Self::new_text(&format!(
                "Generation: {}",
                NiceInt::from(shown.generation())
            )));
            ui.separator();
            ui.label(Self::new_text(&format!(
                "Population: {}",
                NiceInt::from_usize(shown.population())
            )));
            ui.separator();
            ui.label(Self::new_text(&format!(
                "delay {} ms, {:.1} gen/s, step {:.3} ms ({state})",
                self.pacer.delay().as_millis(),
                self.pacer.tps(),
                self.last_step_duration * 1e3
            )));
        });
    }

    fn draw_field(&mut self, ui: &mut Ui, shown: &Snapshot) {
        let n = shown.dimension();
        let image = ColorImage {
            size: [n, n],
            pixels: shown
                .cells()
                .iter()
                .map(|&alive| {
                    if alive {
                        Config::ALIVE_COLOR
                    } else {
                        Config::DEAD_COLOR
                    }
                })
                .collect(),
        };
        self.texture.set(image, TextureOptions::NEAREST);

        // shrink cells when the window is too small for full size
        let area = ui.available_size();
        let size_px = (n as f32 * Config::CELL_SIZE_PX).min(area.x.min(area.y));
        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        ui.add(Image::from_texture(source));
    }

    /// Draws one settled generation; stepping afterwards cannot mix into it.
    pub fn draw(&mut self, ui: &mut Ui) {
        let shown = self.grid.snapshot();
        ui.vertical(|ui| {
            self.draw_status(ui, &shown);
            self.draw_field(ui, &shown);
        });
    }
}
