// src/config/options.rs
//! Runtime options, optionally loaded from a TOML file.
//!
//! Config file is selected via:
//! 1. `--config <path>` (CLI)
//! 2. `LOTTO_CONFIG` environment variable
//! 3. Default: `lotto.toml` in the working directory
//!
//! Every field has a default, so an empty or partial file is valid.

use std::{env, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub parse: ParseOptions,
    pub purchase: PurchaseOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// Results page URL; `{round}` is replaced by the draw round.
    pub url_template: String,
    pub timeout_ms: u64,
    pub user_agent: String,
    /// Honor `HTTP(S)_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url_template: s!(DEFAULT_URL_TEMPLATE),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: s!(USER_AGENT),
            use_system_proxy: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Reject pages that don't yield exactly six distinct winning numbers
    /// (and a bonus outside them). Off: keep whatever balls parsed.
    pub require_six_numbers: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { require_six_numbers: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PurchaseOptions {
    /// Price of one game, in won.
    pub ticket_price: u64,
}

impl Default for PurchaseOptions {
    fn default() -> Self {
        Self { ticket_price: TICKET_PRICE }
    }
}

impl AppOptions {
    /// `--config` value if given, else `LOTTO_CONFIG`, else `lotto.toml`.
    pub fn resolve_config_path(cli_path: Option<&str>) -> String {
        if let Some(p) = cli_path {
            return s!(p);
        }
        if let Ok(p) = env::var(CONFIG_ENV) {
            if !p.trim().is_empty() {
                return p;
            }
        }
        s!(DEFAULT_CONFIG_FILE)
    }

    /// Load options from a TOML file. Errors on a missing or malformed file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let opts: AppOptions = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if !opts.fetch.url_template.contains(ROUND_PLACEHOLDER) {
            anyhow::bail!(
                "fetch.url_template in {} has no {} placeholder",
                path.display(),
                ROUND_PLACEHOLDER
            );
        }
        if opts.purchase.ticket_price == 0 {
            anyhow::bail!("purchase.ticket_price in {} must be positive", path.display());
        }
        Ok(opts)
    }

    /// Load options, falling back to defaults when the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            logd!("Config: {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(opts) => {
                logf!("Config: Loaded {}", path.display());
                opts
            }
            Err(e) => {
                logw!("Config: {e:#}; using defaults");
                Self::default()
            }
        }
    }
}
