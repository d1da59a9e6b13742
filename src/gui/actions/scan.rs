// src/gui/actions/scan.rs
use crate::{gui::app::App, lotto::check, qr};

/// Decode the pasted QR URL. Accepted tickets go to the front of the scanned
/// list in payload order; a decoded round starts a fetch.
pub fn scan(app: &mut App) {
    let outcome = qr::decode(app.state.gui.qr_text.trim());
    if outcome.tickets.is_empty() {
        app.status("Not a valid lotto QR");
        return;
    }

    let n = outcome.tickets.len();
    app.scanned.splice(0..0, outcome.tickets);
    app.scanned_round = outcome.round;
    app.state.gui.qr_text.clear();

    match outcome.round {
        Some(round) => {
            logf!("Scan: {n} ticket(s) for round {round}");
            super::start_fetch(app, round);
        }
        None => app.status(format!("Scanned {n} ticket(s); round unreadable")),
    }
}

/// Use hand-typed winning numbers instead of a fetched draw.
pub fn set_winning_numbers(app: &mut App) {
    match check::parse_winning_numbers(&app.state.gui.winning_text) {
        Some(nums) => {
            app.winning = nums.to_vec();
            app.state.gui.show_results = true;
            logf!("UI: winning numbers set by hand {:?}", app.winning);
            app.status("Winning numbers set");
        }
        None => app.status("Enter six different numbers from 1 to 45"),
    }
}
