// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{buy, complete_purchase, ...}.

mod fetch;    // src/gui/actions/fetch.rs
mod purchase; // src/gui/actions/purchase.rs
mod scan;     // src/gui/actions/scan.rs

use std::collections::BTreeMap;

use crate::{error::FetchError, lotto::DrawResult};

pub use fetch::{fetch_round, start_fetch};
pub use purchase::{buy, complete_purchase};
pub use scan::{scan, set_winning_numbers};

/// What a finished fetch task sends back to the UI thread.
pub type FetchOutcome = BTreeMap<u32, Result<DrawResult, FetchError>>;
