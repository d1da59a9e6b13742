// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, atomic::AtomicU32, mpsc},
    time::Duration,
};

use eframe::egui::{self, widgets::Spinner};
use rand::{SeedableRng, rngs::StdRng};
use tokio::runtime::Runtime;

use crate::{
    config::state::AppState,
    fetch::DrawClient,
    lotto::{DrawResult, Prize, Ticket, check, generate::Purchase},
};

use super::{actions::FetchOutcome, components};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Lotto 6/45",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(state, cc.egui_ctx.clone())?))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // purchased (generated) and scanned tickets
    pub tickets: Vec<Ticket>,
    pub scanned: Vec<Ticket>,
    pub scanned_round: Option<u32>,

    // numbers tickets are checked against: fetched draw or typed by hand
    pub winning: Vec<u8>,
    pub draw: Option<DrawResult>,

    // purchase waiting for "keep the change?" confirmation
    pub pending_purchase: Option<Purchase>,

    // status/progress (fetch tasks write here)
    pub status: Arc<Mutex<String>>,
    pub loading: bool,
    pub requested_round: Option<u32>,
    // shared with in-flight fetches so superseded ones stay quiet
    pub(super) latest_request: Arc<AtomicU32>,

    pub(super) rng: StdRng,
    pub(super) runtime: Runtime,
    pub(super) client: DrawClient,
    pub(super) tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
    pub(super) ctx: egui::Context,
}

impl App {
    pub fn new(state: AppState, ctx: egui::Context) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("lotto-fetch")
            .build()?;
        let client = DrawClient::new(&state.options)?;
        let (tx, rx) = mpsc::channel();

        logf!(
            "Init: ticket price={} won, strict parse={}",
            state.options.purchase.ticket_price,
            state.options.parse.require_six_numbers
        );

        Ok(Self {
            state,
            tickets: Vec::new(),
            scanned: Vec::new(),
            scanned_round: None,
            winning: Vec::new(),
            draw: None,
            pending_purchase: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            loading: false,
            requested_round: None,
            latest_request: Arc::new(AtomicU32::new(0)),
            rng: StdRng::from_entropy(),
            runtime,
            client,
            tx,
            rx,
            ctx,
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Matches and prize for one ticket against the current winning numbers.
    /// The bonus only counts when the numbers came from a fetched draw.
    pub fn result_for(&self, ticket: &Ticket) -> (usize, Option<Prize>) {
        let matches = check::match_count(ticket, &self.winning);
        let prize = match &self.draw {
            Some(d) if d.numbers == self.winning => ticket.prize(d),
            _ if self.winning.is_empty() => None,
            _ => Prize::from_matches(matches, false),
        };
        (matches, prize)
    }

    /// Apply finished fetches. Results for a round no longer requested are dropped.
    fn poll_fetch(&mut self) {
        while let Ok(results) = self.rx.try_recv() {
            for (round, res) in results {
                if self.requested_round != Some(round) {
                    logd!("Fetch: ignoring stale result for round {round}");
                    continue;
                }
                self.loading = false;
                self.requested_round = None;

                match res {
                    Ok(draw) => {
                        logf!("Fetch: round {} applied", draw.round);
                        self.status(format!("Round {} loaded", draw.round));
                        self.winning = draw.numbers.clone();
                        self.draw = Some(draw);
                        self.state.gui.show_results = true;
                    }
                    Err(e) => {
                        loge!("Fetch: round {round}: {e}");
                        self.status(e.user_message());
                        // don't leave the previous round on screen as if it were this one
                        if self.draw.as_ref().is_some_and(|d| d.numbers == self.winning) {
                            self.winning.clear();
                        }
                        self.draw = None;
                    }
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.loading {
                    ui.add(Spinner::new().size(14.0));
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    components::purchase_panel::draw(ui, self);
                    ui.separator();

                    components::scan_panel::draw(ui, self);
                    ui.separator();

                    components::draw_panel::draw(ui, self);
                    ui.separator();

                    components::check_panel::draw(ui, self);
                });
        });

        components::purchase_panel::confirm_window(ctx, self);

        if self.loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
