// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec owns one page and encodes
//! *where the ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-decoded pages. No I/O, no charset work.
//! - **Layout markers** (tag/class selectors, label strings) as constants, so a
//!   site redesign is a one-place edit.
//! - **Tolerant extraction** using `core::html` helpers: a bad cell or ball is
//!   skipped; only structurally required fields fail the parse.
//!
//! ## What does **not** live here
//! - Fetching and decoding (`fetch`, `core::net`, `core::charset`).
//! - Prize rules and ticket logic (`lotto`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → fetch::DrawClient::fetch(round)
//!               → core::net (bytes) → core::charset (EUC-KR → String)
//!               → specs::draw_result::parse_doc_with → lotto::DrawResult
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against captured fixtures (`tests/fixtures/`).
pub mod draw_result;
