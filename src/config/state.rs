// src/config/state.rs
use super::consts::DEFAULT_ROUND;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Purchase amount text (won)
    pub money_text: String,

    /// Round to fetch
    pub round_text: String,

    /// Manual winning numbers, space separated
    pub winning_text: String,

    /// Pasted QR payload
    pub qr_text: String,

    /// Show match counts next to tickets
    pub show_results: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 720,
            window_h: 900,
            money_text: s!(),
            round_text: DEFAULT_ROUND.to_string(),
            winning_text: s!(),
            qr_text: s!(),
            show_results: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
