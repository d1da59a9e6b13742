// src/gui/components/scan_panel.rs
//
// Pasted ticket QR URL → scanned ticket list (newest scan first).

use eframe::egui::{self, Button, Key, TextEdit};

use crate::gui::{actions, app::App};

use super::check_panel;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Scanned tickets");

    ui.horizontal(|ui| {
        ui.label("QR URL:");
        let resp = ui.add(
            TextEdit::singleline(&mut app.state.gui.qr_text)
                .desired_width(360.0)
                .hint_text("http://m.dhlottery.co.kr/?v=…"),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Scan").clicked() || enter {
            actions::scan(app);
        }
        if ui.add_enabled(!app.scanned.is_empty(), Button::new("Clear")).clicked() {
            app.scanned.clear();
            app.scanned_round = None;
        }
    });

    if let Some(r) = app.scanned_round {
        ui.label(format!("Last scan: round {r}"));
    }

    let app_ref: &App = app;
    egui::ScrollArea::vertical()
        .id_salt("scanned")
        .max_height(220.0)
        .show(ui, |ui| {
            for (i, t) in app_ref.scanned.iter().enumerate() {
                check_panel::ticket_line(ui, app_ref, i, t);
            }
        });
}
