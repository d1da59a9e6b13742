// src/gui/components/draw_panel.rs
//
// Round input, fetch button and the fetched draw: balls, winners per tier, sales.

use eframe::egui::{self, Button, Key, TextEdit, widgets::Spinner};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{actions, app::App},
    lotto::{DrawResult, Prize},
};

use super::ball;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Official results");

    ui.horizontal(|ui| {
        ui.label("Round:");
        let resp = ui.add(TextEdit::singleline(&mut app.state.gui.round_text).desired_width(60.0));
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        let fetch = ui.add_enabled(!app.loading, Button::new("Fetch")).clicked();
        if fetch || (enter && !app.loading) {
            actions::fetch_round(app);
        }
        if app.loading {
            ui.add(Spinner::new().size(16.0));
        }
    });

    match &app.draw {
        Some(d) => draw_result(ui, d),
        None => {
            ui.weak("No results loaded");
        }
    }
}

fn draw_result(ui: &mut egui::Ui, d: &DrawResult) {
    ui.label(format!("Round {} · {}", d.round, date_digits(&d.draw_date)));

    ui.horizontal(|ui| {
        ball::row(ui, &d.numbers, 30.0);
        ui.label("+");
        ball::ball(ui, d.bonus_number, 30.0);
    });

    TableBuilder::new(ui)
        .id_salt("winners")
        .striped(true)
        .vscroll(false)
        .column(Column::exact(50.0))
        .column(Column::exact(110.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Prize");
            });
            header.col(|ui| {
                ui.strong("Winners");
            });
            header.col(|ui| {
                ui.strong("Match");
            });
        })
        .body(|mut body| {
            for prize in Prize::ALL {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(prize.to_string());
                    });
                    row.col(|ui| {
                        let count = d
                            .winners(prize.tier())
                            .map(group_thousands)
                            .unwrap_or_else(|| s!("-"));
                        ui.monospace(count);
                    });
                    row.col(|ui| {
                        ui.label(prize.rule());
                    });
                });
            }
        });

    if !d.total_sales.is_empty() {
        ui.label(format!("Total sales: {} won", d.total_sales));
    }
}

/// `2025년 11월 15일` → `2025-11-15` (the default egui fonts have no Hangul).
fn date_digits(s: &str) -> String {
    let parts: Vec<&str> = s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() { s!(s) } else { parts.join("-") }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
