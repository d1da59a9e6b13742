// src/gui/progress.rs
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU32, Ordering},
};

use eframe::egui;

use crate::progress::Progress;

/// Writes fetch progress into the shared status line and wakes the UI.
/// Once a newer round is requested, this fetch stops touching the status.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    round: u32,
    latest: Arc<AtomicU32>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(
        status: Arc<Mutex<String>>,
        ctx: egui::Context,
        round: u32,
        latest: Arc<AtomicU32>,
    ) -> Self {
        Self { status, ctx, round, latest, done: 0, total: 0 }
    }

    fn is_current(&self) -> bool {
        self.latest.load(Ordering::Relaxed) == self.round
    }

    fn set_status(&self, msg: impl Into<String>) {
        if !self.is_current() {
            logd!("UI: round {} superseded, status left alone", self.round);
            return;
        }
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, round: u32) {
        self.done += 1;
        self.set_status(format!("Fetched round {} ({}/{})", round, self.done, self.total));
    }
    fn item_failed(&mut self, _round: u32, reason: &str) {
        self.done += 1;
        self.set_status(s!(reason));
    }
    fn finish(&mut self) {
        self.ctx.request_repaint();
    }
}
