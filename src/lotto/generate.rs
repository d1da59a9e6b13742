// src/lotto/generate.rs
use rand::{Rng, seq::index};

use crate::config::consts::{LOTTERY_NUMBER_SIZE, MAXIMUM_NUMBER};

use super::Ticket;

/// Uniform over all 6-subsets of 1..=45 (Floyd sampling, no replacement).
pub fn random_ticket<R: Rng + ?Sized>(rng: &mut R) -> Ticket {
    let picks = index::sample(rng, MAXIMUM_NUMBER as usize, LOTTERY_NUMBER_SIZE);
    let mut numbers = [0u8; LOTTERY_NUMBER_SIZE];
    for (slot, i) in numbers.iter_mut().zip(picks.iter()) {
        *slot = i as u8 + 1;
    }
    Ticket::from_valid(numbers)
}

impl Ticket {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        random_ticket(rng)
    }
}

pub fn tickets<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Ticket> {
    (0..count).map(|_| random_ticket(rng)).collect()
}

/// What an amount of money buys at a given ticket price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub count: u64,
    pub change: u64,
}

impl Purchase {
    pub fn from_amount(amount: u64, price: u64) -> Self {
        if price == 0 {
            return Self { count: 0, change: amount };
        }
        Self { count: amount / price, change: amount % price }
    }

    pub fn is_possible(&self) -> bool {
        self.count > 0
    }

    pub fn has_change(&self) -> bool {
        self.is_possible() && self.change > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_tickets_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for t in tickets(&mut rng, 500) {
            assert!(Ticket::new(*t.numbers()).is_ok());
        }
    }

    #[test]
    fn every_number_gets_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 46];
        for t in tickets(&mut rng, 400) {
            for &n in t.numbers() {
                seen[n as usize] = true;
            }
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn purchase_arithmetic() {
        assert_eq!(Purchase::from_amount(5_000, 1_000), Purchase { count: 5, change: 0 });
        let p = Purchase::from_amount(3_500, 1_000);
        assert_eq!((p.count, p.change), (3, 500));
        assert!(p.has_change());
        let p = Purchase::from_amount(999, 1_000);
        assert!(!p.is_possible());
        assert!(!p.has_change());
    }
}
