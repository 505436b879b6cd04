use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_TITLE: &'static str = "Life";

    pub const CELL_SIZE_PX: f32 = 10.;
    pub const ALIVE_COLOR: Color32 = Color32::YELLOW;
    pub const DEAD_COLOR: Color32 = Color32::BLACK;

    pub const FRAME_MARGIN: f32 = 10.;
    pub const STATUS_HEIGHT: f32 = 30.;
    pub const TEXT_SIZE: f32 = 14.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BACKGROUND_COLOR: Color32 = Color32::from_gray(24);

    pub const DEFAULT_DIMENSION: usize = 64;
    pub const DEFAULT_DELAY_MS: u64 = 100;

    /// Inner window size that shows a `dimension`-wide grid at full cell size.
    pub fn window_size(dimension: usize) -> [f32; 2] {
        let field = dimension as f32 * Self::CELL_SIZE_PX + 2. * Self::FRAME_MARGIN;
        [field, field + Self::STATUS_HEIGHT]
    }
}
