// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod gui;
pub mod lotto;
pub mod progress;
pub mod qr;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
