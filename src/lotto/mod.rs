// src/lotto/mod.rs
//! Lottery data model and the small amount of game logic around it:
//! tickets, draw results, prizes, random generation and checking.

pub mod check;
mod draw;
pub mod generate;
mod ticket;

pub use draw::{DrawResult, Prize};
pub use ticket::{QrParseOutcome, Ticket, TicketError};
