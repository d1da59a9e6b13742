// src/gui/components/purchase_panel.rs
//
// Money input → random tickets. Change left over needs a confirmation first.

use eframe::egui::{self, Align2, Button, Key, TextEdit};

use crate::{
    config::consts::SLOT_MACHINE,
    gui::{actions, app::App},
};

use super::check_panel;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(format!("{SLOT_MACHINE} Buy tickets"));

    ui.horizontal(|ui| {
        ui.label("Amount (won):");
        let resp = ui.add(
            TextEdit::singleline(&mut app.state.gui.money_text)
                .desired_width(120.0)
                .hint_text("5000"),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        if ui.button("Buy").clicked() || enter {
            actions::buy(app);
        }
        if ui.add_enabled(!app.tickets.is_empty(), Button::new("Clear")).clicked() {
            logd!("UI: cleared {} purchased ticket(s)", app.tickets.len());
            app.tickets.clear();
        }
        ui.label(format!("{} won per ticket", app.state.options.purchase.ticket_price));
    });

    ui.horizontal(|ui| {
        ui.strong("Purchased");
        ui.label(format!("{} ticket(s)", app.tickets.len()));
    });

    let app_ref: &App = app;
    egui::ScrollArea::vertical()
        .id_salt("purchased")
        .max_height(220.0)
        .show(ui, |ui| {
            for (i, t) in app_ref.tickets.iter().enumerate() {
                check_panel::ticket_line(ui, app_ref, i, t);
            }
        });
}

/// Modal-ish confirm for purchases that leave change.
pub fn confirm_window(ctx: &egui::Context, app: &mut App) {
    let Some(p) = app.pending_purchase else {
        return;
    };

    let mut decision = None;
    egui::Window::new("Keep the change?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "{} ticket(s) leave {} won over.\nBuy anyway?",
                p.count, p.change
            ));
            ui.horizontal(|ui| {
                if ui.button("Buy").clicked() {
                    decision = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(false);
                }
            });
        });

    match decision {
        Some(true) => actions::complete_purchase(app, p),
        Some(false) => {
            app.pending_purchase = None;
            app.status("Purchase cancelled");
        }
        None => {}
    }
}
