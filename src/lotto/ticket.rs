// src/lotto/ticket.rs
use std::{fmt, hash::Hash, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::config::consts::{LOTTERY_NUMBER_SIZE, MAXIMUM_NUMBER, MINIMUM_NUMBER};

use super::{DrawResult, Prize};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("a ticket needs exactly 6 numbers, got {0}")]
    WrongLength(usize),
    #[error("{0} is outside 1..=45")]
    OutOfRange(u8),
    #[error("{0} appears more than once")]
    Duplicate(u8),
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Six distinct numbers in 1..=45.
///
/// `numbers()` keeps construction order (for scanned tickets: the order the
/// QR payload encoded them). Equality and hashing treat the ticket as a set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ticket {
    numbers: [u8; LOTTERY_NUMBER_SIZE],
}

impl Ticket {
    pub fn new(numbers: [u8; LOTTERY_NUMBER_SIZE]) -> Result<Self, TicketError> {
        for (i, &n) in numbers.iter().enumerate() {
            if !(MINIMUM_NUMBER..=MAXIMUM_NUMBER).contains(&n) {
                return Err(TicketError::OutOfRange(n));
            }
            if numbers[..i].contains(&n) {
                return Err(TicketError::Duplicate(n));
            }
        }
        Ok(Self { numbers })
    }

    pub fn from_slice(numbers: &[u8]) -> Result<Self, TicketError> {
        let arr: [u8; LOTTERY_NUMBER_SIZE] = numbers
            .try_into()
            .map_err(|_| TicketError::WrongLength(numbers.len()))?;
        Self::new(arr)
    }

    /// Caller guarantees range and distinctness.
    pub(crate) fn from_valid(numbers: [u8; LOTTERY_NUMBER_SIZE]) -> Self {
        debug_assert!(Self::new(numbers).is_ok(), "invalid ticket {numbers:?}");
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8; LOTTERY_NUMBER_SIZE] {
        &self.numbers
    }

    /// Ascending view, for display and comparison.
    pub fn sorted(&self) -> [u8; LOTTERY_NUMBER_SIZE] {
        let mut out = self.numbers;
        out.sort_unstable();
        out
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.contains(&n)
    }

    /// How many of `winning` are on this ticket (set intersection size).
    pub fn match_count(&self, winning: &[u8]) -> usize {
        self.numbers.iter().filter(|n| winning.contains(n)).count()
    }

    /// Prize against an official draw (the bonus only matters for 2nd).
    pub fn prize(&self, draw: &DrawResult) -> Option<Prize> {
        let matches = self.match_count(&draw.numbers);
        Prize::from_matches(matches, self.contains(draw.bonus_number))
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Ticket {}

impl Hash for Ticket {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.sorted().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{n:02}")?;
        }
        Ok(())
    }
}

/// `"3 11 17 25 38 44"` or `"3,11,17,25,38,44"`.
impl FromStr for Ticket {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| TicketError::NotANumber(s!(part)))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Self::from_slice(&numbers)
    }
}

/// Outcome of decoding one scanned ticket payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QrParseOutcome {
    pub round: Option<u32>,
    pub tickets: Vec<Ticket>,
}

impl QrParseOutcome {
    pub fn is_empty(&self) -> bool {
        self.round.is_none() && self.tickets.is_empty()
    }
}
