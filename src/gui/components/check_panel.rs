// src/gui/components/check_panel.rs
//
// Manual winning numbers, the results toggle, and the per-ticket result line
// shared by the purchased and scanned lists.

use eframe::egui::{self, Color32, Key, RichText, TextEdit};

use crate::{
    gui::{actions, app::App},
    lotto::Ticket,
};

use super::ball;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Check");

    ui.horizontal(|ui| {
        ui.label("Winning numbers:");
        let resp = ui.add(
            TextEdit::singleline(&mut app.state.gui.winning_text)
                .desired_width(180.0)
                .hint_text("1 5 7 26 28 43"),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Set").clicked() || enter {
            actions::set_winning_numbers(app);
        }
        ui.checkbox(&mut app.state.gui.show_results, "Show results");
    });

    if app.winning.is_empty() {
        ui.weak("Fetch a round or type six numbers");
        return;
    }
    ball::row(ui, &app.winning, 24.0);

    if app.state.gui.show_results {
        let winners = app
            .tickets
            .iter()
            .chain(&app.scanned)
            .filter(|t| app.result_for(t).1.is_some())
            .count();
        ui.label(format!("{winners} winning ticket(s)"));
    }
}

/// `  3  ●●●●●●  4 match · 4th`
pub fn ticket_line(ui: &mut egui::Ui, app: &App, index: usize, ticket: &Ticket) {
    let show = app.state.gui.show_results && !app.winning.is_empty();
    ui.horizontal(|ui| {
        ui.monospace(format!("{:>3}", index + 1));
        let highlight: &[u8] = if show { &app.winning } else { &[] };
        ball::ticket_row(ui, ticket, highlight, 24.0);

        if show {
            let (matches, prize) = app.result_for(ticket);
            let text = match prize {
                Some(p) => format!("{matches} match · {p}"),
                None => format!("{matches} match"),
            };
            ui.label(RichText::new(text).strong().color(result_color(matches)));
        }
    });
}

fn result_color(matches: usize) -> Color32 {
    match matches {
        6 => Color32::RED,
        5 => Color32::from_rgb(255, 165, 0),
        4 => Color32::from_rgb(60, 120, 255),
        3 => Color32::from_rgb(40, 170, 60),
        _ => Color32::GRAY,
    }
}
