use super::Config;
use crate::{Grid, TickPacer};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
    ViewportCommand,
};
use std::time::{Duration, Instant};

/// Desktop host: renders the grid and drives one `step` per tick.
pub struct App {
    pub(super) grid: Grid,                // Current generation.
    pub(super) initial: Grid,             // Starting configuration, restored on reset.
    pub(super) is_paused: bool,           // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,         // Do one step and stay paused.
    pub(super) pacer: TickPacer,          // Delay between generations.
    pub(super) last_step_duration: f64,   // Duration of the last step in seconds.
    pub(super) texture: TextureHandle,    // One texel per cell.
}

impl App {
    pub fn new(ctx: &Context, grid: Grid, delay: Duration) -> Self {
        Self {
            initial: grid.clone(),
            grid,
            is_paused: false,
            do_one_step: false,
            pacer: TickPacer::new(delay),
            last_step_duration: 0.,
            texture: ctx.load_texture("Life field", ColorImage::default(), TextureOptions::NEAREST),
        }
    }

    pub fn reset(&mut self) {
        self.grid = self.initial.clone();
        self.do_one_step = false;
        self.last_step_duration = 0.;
        tracing::info!(
            population = self.grid.population(),
            "field reset to its initial configuration"
        );
    }

    fn handle_input(&mut self, ctx: &Context) {
        let [quit, toggle_pause, one_step, reset] = ctx.input(|input| {
            [Key::Escape, Key::E, Key::Space, Key::R].map(|key| input.key_pressed(key))
        });
        if quit {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        if toggle_pause {
            self.is_paused = !self.is_paused;
        }
        if one_step && self.is_paused {
            self.do_one_step = true;
        }
        if reset {
            self.reset();
        }
    }

    /// Steps the grid when a tick is due or a single step was requested.
    pub(super) fn update_engine(&mut self, ctx: &Context) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        if !self.is_paused && !self.pacer.is_due() {
            return;
        }

        let timer = Instant::now();
        self.grid.step();
        self.last_step_duration = timer.elapsed().as_secs_f64();

        self.pacer.mark_tick();
        if self.do_one_step {
            // no further input may arrive to show the stepped generation
            ctx.request_repaint();
            self.do_one_step = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                // the settled generation is drawn before it is replaced
                self.draw(ui);

                self.update_engine(ctx);
            });

        if !self.is_paused {
            ctx.request_repaint_after(self.pacer.until_next());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::Grid;
    use eframe::egui::Context;
    use std::time::Duration;

    fn blinker_app(delay: Duration) -> App {
        let grid = Grid::with_alive(5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        App::new(&Context::default(), grid, delay)
    }

    #[test]
    fn test_single_step_while_paused() {
        let ctx = Context::default();
        let mut app = blinker_app(Duration::from_secs(3600));
        app.is_paused = true;

        app.update_engine(&ctx);
        assert_eq!(app.grid.generation(), 0);

        app.do_one_step = true;
        app.update_engine(&ctx);
        assert_eq!(app.grid.generation(), 1);
        assert!(!app.do_one_step);

        app.update_engine(&ctx);
        assert_eq!(app.grid.generation(), 1);
    }

    #[test]
    fn test_running_waits_for_delay() {
        let ctx = Context::default();
        let mut app = blinker_app(Duration::ZERO);
        app.update_engine(&ctx);
        app.update_engine(&ctx);
        assert_eq!(app.grid.generation(), 2);

        let mut app = blinker_app(Duration::from_secs(3600));
        app.update_engine(&ctx);
        assert_eq!(app.grid.generation(), 0);
    }

    #[test]
    fn test_reset_restores_initial_field() {
        let ctx = Context::default();
        let mut app = blinker_app(Duration::ZERO);
        app.update_engine(&ctx);
        assert_ne!(app.grid, app.initial);
        app.reset();
        assert_eq!(app.grid, app.initial);
        assert_eq!(app.grid.generation(), 0);
    }
}
