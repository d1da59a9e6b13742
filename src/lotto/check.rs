// src/lotto/check.rs
use serde::Serialize;

use crate::config::consts::{LOTTERY_NUMBER_SIZE, MAXIMUM_NUMBER, MINIMUM_NUMBER};

use super::{DrawResult, Prize, Ticket};

/// Winning numbers typed by hand: whitespace separated, out-of-range and
/// non-numeric tokens ignored. Exactly six distinct numbers must remain.
pub fn parse_winning_numbers(input: &str) -> Option<[u8; LOTTERY_NUMBER_SIZE]> {
    let numbers: Vec<u8> = input
        .split_whitespace()
        .filter_map(|tok| tok.parse::<u8>().ok())
        .filter(|n| (MINIMUM_NUMBER..=MAXIMUM_NUMBER).contains(n))
        .collect();

    let mut arr: [u8; LOTTERY_NUMBER_SIZE] = numbers.as_slice().try_into().ok()?;
    arr.sort_unstable();
    if arr.windows(2).any(|w| w[0] == w[1]) {
        return None;
    }
    Some(arr)
}

/// Matches between a ticket and a set of winning numbers; 0 when none are set.
pub fn match_count(ticket: &Ticket, winning: &[u8]) -> usize {
    if winning.is_empty() {
        return 0;
    }
    ticket.match_count(winning)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketCheck {
    pub ticket: Ticket,
    pub matches: usize,
    pub prize: Option<Prize>,
}

/// Check against an official draw (bonus aware).
pub fn check_draw(tickets: &[Ticket], draw: &DrawResult) -> Vec<TicketCheck> {
    tickets
        .iter()
        .map(|t| TicketCheck {
            ticket: *t,
            matches: t.match_count(&draw.numbers),
            prize: t.prize(draw),
        })
        .collect()
}

/// Check against bare winning numbers (no bonus, so never 2nd).
pub fn check_numbers(tickets: &[Ticket], winning: &[u8]) -> Vec<TicketCheck> {
    tickets
        .iter()
        .map(|t| {
            let matches = match_count(t, winning);
            TicketCheck { ticket: *t, matches, prize: Prize::from_matches(matches, false) }
        })
        .collect()
}
