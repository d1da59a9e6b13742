// src/qr.rs
//! Scanned ticket payloads.
//!
//! A ticket QR encodes a URL like `http://m.dhlottery.co.kr/?v=1197q010203040506q…`:
//! four round characters after `v=`, then games of 12 digits (six 2-digit
//! numbers) separated by letters. Games that are not six distinct numbers in
//! 1..=45 are padding and get dropped.

use crate::config::consts::{LOTTERY_NUMBER_SIZE, QR_GAME_DIGITS, QR_MARKER, QR_ROUND_CHARS};
use crate::lotto::{QrParseOutcome, Ticket};

/// Decode a scanned URL. Never fails; bad input yields fewer (or no) tickets.
pub fn decode(url: &str) -> QrParseOutcome {
    let Some(at) = url.find(QR_MARKER) else {
        logd!("QR: no {QR_MARKER:?} marker");
        return QrParseOutcome::default();
    };
    let payload = &url[at + QR_MARKER.len()..];

    let Some((split, _)) = payload.char_indices().nth(QR_ROUND_CHARS) else {
        if payload.chars().count() < QR_ROUND_CHARS {
            logd!("QR: payload too short ({payload:?})");
            return QrParseOutcome::default();
        }
        // exactly the round, no games
        return QrParseOutcome {
            round: parse_round(payload),
            tickets: Vec::new(),
        };
    };

    let (head, tail) = payload.split_at(split);
    let round = parse_round(head);
    let digits: Vec<u8> = tail
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    let mut tickets = Vec::new();
    let mut dropped = 0usize;
    for (idx, chunk) in digits.chunks_exact(QR_GAME_DIGITS).enumerate() {
        match game(chunk) {
            Ok(ticket) => tickets.push(ticket),
            Err(e) => {
                dropped += 1;
                logd!("QR: game {} dropped: {e}", idx + 1);
            }
        }
    }

    let leftover = digits.len() % QR_GAME_DIGITS;
    if leftover > 0 {
        logd!("QR: ignoring {leftover} trailing digit(s)");
    }

    logf!(
        "QR: round {:?}, {} ticket(s), {} dropped",
        round,
        tickets.len(),
        dropped
    );
    QrParseOutcome { round, tickets }
}

/// Zero is not a round; treat it like garbage.
fn parse_round(head: &str) -> Option<u32> {
    head.parse::<u32>().ok().filter(|&r| r > 0)
}

/// Six two-digit numbers, kept in encoded order.
fn game(chunk: &[u8]) -> Result<Ticket, crate::lotto::TicketError> {
    let mut numbers = [0u8; LOTTERY_NUMBER_SIZE];
    for (slot, pair) in numbers.iter_mut().zip(chunk.chunks_exact(2)) {
        *slot = pair[0] * 10 + pair[1];
    }
    Ticket::new(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_game_is_dropped() {
        let out = decode("http://m.dhlottery.co.kr/?v=1197010203040506010103040506070809101112");
        assert_eq!(out.round, Some(1197));
        assert_eq!(out.tickets.len(), 2);
        assert_eq!(out.tickets[0].numbers(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(out.tickets[1].numbers(), &[7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn letters_between_games_are_ignored() {
        let out = decode("http://m.dhlottery.co.kr/?v=1197q441225110817m030405060708");
        assert_eq!(out.round, Some(1197));
        assert_eq!(out.tickets.len(), 2);
        // encoded order, not ascending
        assert_eq!(out.tickets[0].numbers(), &[44, 12, 25, 11, 8, 17]);
    }

    #[test]
    fn missing_marker_or_short_payload() {
        assert!(decode("http://example.com/?x=1197010203040506").is_empty());
        assert!(decode("?v=119").is_empty());
    }

    #[test]
    fn partial_game_is_not_emitted() {
        let out = decode("?v=11970102030");
        assert_eq!(out.round, Some(1197));
        assert!(out.tickets.is_empty());
    }

    #[test]
    fn bad_round_keeps_decoding() {
        let out = decode("?v=ab12010203040506");
        assert_eq!(out.round, None);
        assert_eq!(out.tickets.len(), 1);

        let zero = decode("?v=0000010203040506");
        assert_eq!(zero.round, None);
        assert_eq!(zero.tickets.len(), 1);
    }

    #[test]
    fn out_of_range_numbers_rejected() {
        let out = decode("?v=1197000203040506460203040506");
        assert!(out.tickets.is_empty());
    }
}
