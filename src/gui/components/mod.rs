// src/gui/components/mod.rs
pub mod ball;
pub mod check_panel;
pub mod draw_panel;
pub mod purchase_panel;
pub mod scan_panel;
