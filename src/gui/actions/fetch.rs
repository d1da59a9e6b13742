// src/gui/actions/fetch.rs
use std::sync::atomic::Ordering;

use crate::gui::{app::App, progress::GuiProgress};

/// Fetch the round typed into the round field.
pub fn fetch_round(app: &mut App) {
    let text = app.state.gui.round_text.trim();
    match text.parse::<u32>() {
        Ok(round) if round > 0 => start_fetch(app, round),
        _ => {
            logd!("UI: bad round input {text:?}");
            app.status("Round must be a positive number");
        }
    }
}

/// Spawn a fetch on the app runtime. The UI picks the result up in `poll_fetch`;
/// a newer request makes this one stale.
pub fn start_fetch(app: &mut App, round: u32) {
    app.requested_round = Some(round);
    app.latest_request.store(round, Ordering::Relaxed);
    app.loading = true;
    app.state.gui.round_text = round.to_string();
    app.status(format!("Fetching round {round}…"));
    logf!("Fetch: begin round {round}");

    let client = app.client.clone();
    let tx = app.tx.clone();
    let ctx = app.ctx.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone(), round, app.latest_request.clone());

    app.runtime.spawn(async move {
        let results = client.fetch_many(&[round], Some(&mut prog)).await;
        // receiver gone means the window closed
        let _ = tx.send(results);
        ctx.request_repaint();
    });
}
