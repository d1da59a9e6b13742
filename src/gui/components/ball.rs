// src/gui/components/ball.rs
//
// Colored lotto balls, as printed on the official result sheet:
// 1-10 yellow, 11-20 blue, 21-30 red, 31-40 black, 41-45 green.

use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, vec2};

use crate::lotto::Ticket;

const BALL_COLORS: [Color32; 5] = [
    Color32::from_rgb(251, 196, 0),
    Color32::from_rgb(105, 200, 242),
    Color32::from_rgb(255, 114, 114),
    Color32::from_rgb(85, 85, 85),
    Color32::from_rgb(176, 216, 64),
];

pub fn ball_color(n: u8) -> Color32 {
    let idx = (n.saturating_sub(1) / 10) as usize;
    BALL_COLORS[idx.min(BALL_COLORS.len() - 1)]
}

pub fn ball(ui: &mut egui::Ui, n: u8, diameter: f32) -> egui::Response {
    paint(ui, n, diameter, ball_color(n))
}

fn paint(ui: &mut egui::Ui, n: u8, diameter: f32, fill: Color32) -> egui::Response {
    let (rect, resp) = ui.allocate_exact_size(vec2(diameter, diameter), Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle(rect.center(), diameter / 2.0, fill, Stroke::NONE);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            n.to_string(),
            FontId::proportional(diameter * 0.45),
            Color32::WHITE,
        );
    }
    resp
}

/// A row of balls in the given order.
pub fn row(ui: &mut egui::Ui, numbers: &[u8], diameter: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for &n in numbers {
            ball(ui, n, diameter);
        }
    });
}

/// A ticket, ascending; numbers missing from a non-empty `highlight` are dimmed.
pub fn ticket_row(ui: &mut egui::Ui, ticket: &Ticket, highlight: &[u8], diameter: f32) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for n in ticket.sorted() {
            if highlight.is_empty() || highlight.contains(&n) {
                ball(ui, n, diameter);
            } else {
                paint(ui, n, diameter, ball_color(n).gamma_multiply(0.3));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_bands() {
        assert_eq!(ball_color(1), BALL_COLORS[0]);
        assert_eq!(ball_color(10), BALL_COLORS[0]);
        assert_eq!(ball_color(11), BALL_COLORS[1]);
        assert_eq!(ball_color(30), BALL_COLORS[2]);
        assert_eq!(ball_color(40), BALL_COLORS[3]);
        assert_eq!(ball_color(45), BALL_COLORS[4]);
    }
}
