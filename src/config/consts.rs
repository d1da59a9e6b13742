// src/config/consts.rs

// Net config
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://dhlottery.co.kr/gameResult.do?method=byWin&drwNo={round}";
pub const ROUND_PLACEHOLDER: &str = "{round}";
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const USER_AGENT: &str = concat!("lotto_scrape/", env!("CARGO_PKG_VERSION"));

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_CONFIG_FILE: &str = "lotto.toml";
pub const CONFIG_ENV: &str = "LOTTO_CONFIG";

// Game rules (6/45)
pub const LOTTERY_NUMBER_SIZE: usize = 6;
pub const MINIMUM_NUMBER: u8 = 1;
pub const MAXIMUM_NUMBER: u8 = 45;
pub const PRIZE_TIERS: u8 = 5;
pub const TICKET_PRICE: u64 = 1_000; // won

// Ticket QR payload: v=<round:4><game:12>...
pub const QR_MARKER: &str = "v=";
pub const QR_ROUND_CHARS: usize = 4;
pub const QR_GAME_DIGITS: usize = 12;

// GUI
pub const DEFAULT_ROUND: u32 = 1197;
pub const SLOT_MACHINE: &str = "🎰🎰🎰";
pub const MAX_GUI_TICKETS: u64 = 1_000;
