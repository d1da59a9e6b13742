// src/gui/mod.rs
mod actions;
pub mod app;
mod components;
pub mod progress;

pub use app::run;
