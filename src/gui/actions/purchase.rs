// src/gui/actions/purchase.rs
use crate::{
    config::consts::MAX_GUI_TICKETS,
    gui::app::App,
    lotto::generate::{self, Purchase},
};

/// "Buy" clicked: validate the amount, ask first if change would remain.
pub fn buy(app: &mut App) {
    let price = app.state.options.purchase.ticket_price;
    let text = app.state.gui.money_text.trim().replace(',', "");

    let Ok(amount) = text.parse::<u64>() else {
        app.status("Enter an amount in won");
        return;
    };
    let p = Purchase::from_amount(amount, price);
    if !p.is_possible() {
        app.status(format!("Minimum purchase is {price} won"));
        return;
    }
    if p.count > MAX_GUI_TICKETS {
        app.status(format!("At most {MAX_GUI_TICKETS} tickets at once"));
        return;
    }

    if p.has_change() {
        logd!("UI: purchase of {} leaves {} won, asking", p.count, p.change);
        app.pending_purchase = Some(p);
    } else {
        complete_purchase(app, p);
    }
}

/// Generate the tickets and append them to the purchased list.
pub fn complete_purchase(app: &mut App, p: Purchase) {
    app.pending_purchase = None;
    let count = usize::try_from(p.count).unwrap_or(0);
    let new = generate::tickets(&mut app.rng, count);
    app.tickets.extend(new);
    app.state.gui.money_text.clear();

    logf!("Purchase: {count} ticket(s), {} won change", p.change);
    app.status(format!("Bought {count} ticket(s)"));
}
