// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use lotto_scrape::{
    config::{options::AppOptions, state::AppState},
    gui, log,
};

/// 32×32 yellow ball on transparent background.
fn app_icon() -> IconData {
    const SIZE: u32 = 32;
    let r = SIZE as f32 / 2.0;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 + 0.5 - r;
            let dy = y as f32 + 0.5 - r;
            let inside = dx * dx + dy * dy <= (r - 1.0) * (r - 1.0);
            let px = if inside { [251, 196, 0, 255] } else { [0, 0, 0, 0] };
            rgba.extend_from_slice(&px);
        }
    }
    IconData { rgba, width: SIZE, height: SIZE }
}

fn main() {
    log::init_file();

    let path = AppOptions::resolve_config_path(None);
    let state = AppState {
        options: AppOptions::load_from_path(&path),
        ..AppState::default()
    };

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
