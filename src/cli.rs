// src/cli.rs
use clap::{Parser, Subcommand};
use color_eyre::eyre::{WrapErr, bail, eyre};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::config::options::AppOptions;
use crate::fetch::DrawClient;
use crate::lotto::check::{self, TicketCheck};
use crate::lotto::generate::{self, Purchase};
use crate::lotto::{DrawResult, QrParseOutcome, Ticket};
use crate::progress::Progress;
use crate::qr;

#[derive(Parser)]
#[command(name = "lotto_scrape", version, about = "Lotto 6/45 results, ticket scans and checks")]
pub struct Cli {
    /// Config file (default: $LOTTO_CONFIG, then ./lotto.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch official results for one or more rounds
    Fetch {
        #[arg(required = true)]
        rounds: Vec<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Decode a scanned ticket QR URL
    Scan {
        url: String,
        /// Also fetch the decoded round and check the tickets
        #[arg(long)]
        fetch: bool,
        #[arg(long)]
        json: bool,
    },
    /// Generate random tickets
    Generate {
        #[arg(long, conflicts_with = "amount")]
        count: Option<usize>,
        /// Spend this many won at the configured ticket price
        #[arg(long)]
        amount: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check tickets against a round's draw or hand-entered numbers
    Check {
        #[arg(long, conflicts_with = "numbers", required_unless_present = "numbers")]
        round: Option<u32>,
        /// Six winning numbers, e.g. "1 5 7 26 28 43"
        #[arg(long)]
        numbers: Option<String>,
        /// Tickets from a scanned QR URL
        #[arg(long, conflicts_with = "ticket", required_unless_present = "ticket")]
        qr: Option<String>,
        /// One ticket, e.g. "3 11 17 25 38 44"; repeatable
        #[arg(long)]
        ticket: Vec<String>,
    },
}

pub async fn run() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    crate::log::init_stderr(cli.verbose);

    let path = AppOptions::resolve_config_path(cli.config.as_deref());
    let opts = AppOptions::load_from_path(&path);

    match cli.command {
        Command::Fetch { rounds, json } => fetch(&opts, &rounds, json).await,
        Command::Scan { url, fetch, json } => scan(&opts, &url, fetch, json).await,
        Command::Generate { count, amount, seed } => generate(&opts, count, amount, seed),
        Command::Check { round, numbers, qr, ticket } => {
            check(&opts, round, numbers.as_deref(), qr.as_deref(), &ticket).await
        }
    }
}

/* ---------------- subcommands ---------------- */

async fn fetch(opts: &AppOptions, rounds: &[u32], json: bool) -> color_eyre::Result<()> {
    let client = DrawClient::new(opts)?;
    let mut progress = StderrProgress::default();
    let results = client.fetch_many(rounds, Some(&mut progress)).await;

    let mut draws: Vec<&DrawResult> = Vec::new();
    let mut failed = 0usize;
    for res in results.values() {
        match res {
            Ok(draw) => draws.push(draw),
            Err(_) => failed += 1,
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&draws)?);
    } else {
        for draw in &draws {
            print!("{draw}");
        }
    }

    if failed > 0 {
        bail!("{failed} of {} round(s) failed", results.len());
    }
    Ok(())
}

#[derive(Serialize)]
struct ScanReport<'a> {
    scan: &'a QrParseOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    draw: Option<&'a DrawResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    checks: Vec<TicketCheck>,
}

async fn scan(opts: &AppOptions, url: &str, and_fetch: bool, json: bool) -> color_eyre::Result<()> {
    let outcome = qr::decode(url);
    if outcome.is_empty() {
        bail!("no round or tickets found in {url:?}");
    }

    let draw = match (and_fetch, outcome.round) {
        (true, Some(round)) => Some(DrawClient::new(opts)?.fetch(round).await?),
        (true, None) => bail!("payload has no round to fetch"),
        (false, _) => None,
    };
    let checks = draw
        .as_ref()
        .map(|d| check::check_draw(&outcome.tickets, d))
        .unwrap_or_default();

    if json {
        let report = ScanReport { scan: &outcome, draw: draw.as_ref(), checks };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome.round {
        Some(r) => println!("Round {r}"),
        None => println!("Round: unreadable"),
    }
    if let Some(d) = &draw {
        print!("{d}");
        print_checks(&checks);
    } else {
        for (label, t) in game_labels().zip(&outcome.tickets) {
            println!("  {label}  {t}");
        }
    }
    Ok(())
}

fn generate(
    opts: &AppOptions,
    count: Option<usize>,
    amount: Option<u64>,
    seed: Option<u64>,
) -> color_eyre::Result<()> {
    let count = match amount {
        Some(won) => {
            let p = Purchase::from_amount(won, opts.purchase.ticket_price);
            if !p.is_possible() {
                bail!("{won} won buys nothing at {} won per ticket", opts.purchase.ticket_price);
            }
            if p.has_change() {
                eprintln!("{} won left over", p.change);
            }
            usize::try_from(p.count).wrap_err("ticket count too large")?
        }
        None => count.unwrap_or(1),
    };

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    for t in generate::tickets(&mut rng, count) {
        println!("{t}");
    }
    Ok(())
}

async fn check(
    opts: &AppOptions,
    round: Option<u32>,
    numbers: Option<&str>,
    qr_url: Option<&str>,
    ticket_args: &[String],
) -> color_eyre::Result<()> {
    let tickets: Vec<Ticket> = match qr_url {
        Some(url) => qr::decode(url).tickets,
        None => ticket_args
            .iter()
            .map(|s| s.parse::<Ticket>().wrap_err_with(|| format!("bad ticket {s:?}")))
            .collect::<Result<_, _>>()?,
    };
    if tickets.is_empty() {
        bail!("no valid tickets to check");
    }

    let checks = match (round, numbers) {
        (Some(r), _) => {
            let draw = DrawClient::new(opts)?.fetch(r).await?;
            print!("{draw}");
            check::check_draw(&tickets, &draw)
        }
        (None, Some(input)) => {
            let winning = check::parse_winning_numbers(input)
                .ok_or_else(|| eyre!("need six distinct numbers in 1..=45, got {input:?}"))?;
            check::check_numbers(&tickets, &winning)
        }
        (None, None) => bail!("pass --round or --numbers"),
    };
    print_checks(&checks);
    Ok(())
}

/* ---------------- output helpers ---------------- */

/// Paper tickets label games A..E; keep going past E for long lists.
fn game_labels() -> impl Iterator<Item = char> {
    ('A'..='Z').cycle()
}

fn print_checks(checks: &[TicketCheck]) {
    for (label, c) in game_labels().zip(checks) {
        let prize = c.prize.map(|p| p.to_string()).unwrap_or_else(|| s!("-"));
        println!("  {label}  {}  {} match(es)  {prize}", c.ticket, c.matches);
    }
}

#[derive(Default)]
struct StderrProgress {
    total: usize,
    seen: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, round: u32) {
        self.seen += 1;
        eprintln!("[{}/{}] round {round} ok", self.seen, self.total);
    }

    fn item_failed(&mut self, round: u32, reason: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] round {round}: {reason}", self.seen, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_needs_a_winning_source_and_tickets() {
        assert!(Cli::try_parse_from(["cli", "check", "--ticket", "1 2 3 4 5 6"]).is_err());
        assert!(Cli::try_parse_from(["cli", "check", "--round", "5"]).is_err());
        assert!(
            Cli::try_parse_from(["cli", "check", "--round", "5", "--numbers", "1 2 3 4 5 6", "--ticket", "1 2 3 4 5 6"])
                .is_err()
        );
        let ok = Cli::try_parse_from([
            "cli", "check", "--numbers", "1 2 3 4 5 6", "--ticket", "1 2 3 4 5 6", "--ticket", "7 8 9 10 11 12",
        ])
        .unwrap();
        match ok.command {
            Command::Check { ticket, .. } => assert_eq!(ticket.len(), 2),
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn generate_count_and_amount_conflict() {
        assert!(Cli::try_parse_from(["cli", "generate", "--count", "2", "--amount", "5000"]).is_err());
        assert!(Cli::try_parse_from(["cli", "-v", "generate", "--seed", "3"]).is_ok());
    }
}
