// src/lotto/draw.rs
use std::{collections::BTreeMap, fmt};

use serde::Serialize;

/// One official draw, as published on the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawResult {
    pub round: u32,
    /// Publication order, not sorted.
    pub numbers: Vec<u8>,
    /// Free-form date label, e.g. `2025년 11월 15일`.
    pub draw_date: String,
    pub bonus_number: u8,
    /// Prize tier (1..=5) → winners. Tiers the page didn't yield are absent.
    pub winner_counts: BTreeMap<u8, u64>,
    /// Sales figure text with separators kept, e.g. `118,431,563,000`.
    pub total_sales: String,
}

impl DrawResult {
    pub fn winners(&self, tier: u8) -> Option<u64> {
        self.winner_counts.get(&tier).copied()
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {} ({})", self.round, self.draw_date)?;
        let nums: Vec<String> = self.numbers.iter().map(|n| format!("{n:02}")).collect();
        writeln!(f, "  Numbers: {} + {:02}", nums.join(" "), self.bonus_number)?;
        for (tier, count) in &self.winner_counts {
            writeln!(f, "  Tier {tier}: {count} winner(s)")?;
        }
        if !self.total_sales.is_empty() {
            writeln!(f, "  Total sales: {} won", self.total_sales)?;
        }
        Ok(())
    }
}

/// Prize rank for a checked ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Prize {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Prize {
    pub const ALL: [Prize; 5] = [Prize::First, Prize::Second, Prize::Third, Prize::Fourth, Prize::Fifth];

    /// 6 → 1st, 5 + bonus → 2nd, 5 → 3rd, 4 → 4th, 3 → 5th.
    pub fn from_matches(matches: usize, bonus_hit: bool) -> Option<Self> {
        match matches {
            6 => Some(Prize::First),
            5 if bonus_hit => Some(Prize::Second),
            5 => Some(Prize::Third),
            4 => Some(Prize::Fourth),
            3 => Some(Prize::Fifth),
            _ => None,
        }
    }

    pub fn tier(self) -> u8 {
        match self {
            Prize::First => 1,
            Prize::Second => 2,
            Prize::Third => 3,
            Prize::Fourth => 4,
            Prize::Fifth => 5,
        }
    }

    /// What a ticket needs to hit for this prize.
    pub fn rule(self) -> &'static str {
        match self {
            Prize::First => "6 numbers",
            Prize::Second => "5 numbers + bonus",
            Prize::Third => "5 numbers",
            Prize::Fourth => "4 numbers",
            Prize::Fifth => "3 numbers",
        }
    }
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Prize::First => "1st",
            Prize::Second => "2nd",
            Prize::Third => "3rd",
            Prize::Fourth => "4th",
            Prize::Fifth => "5th",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lotto::Ticket;

    fn draw() -> DrawResult {
        DrawResult {
            round: 1197,
            numbers: vec![1, 5, 7, 26, 28, 43],
            draw_date: s!("2025년 11월 15일"),
            bonus_number: 30,
            winner_counts: BTreeMap::from([(1, 12), (2, 80)]),
            total_sales: s!("118,431,563,000"),
        }
    }

    #[test]
    fn prize_tiers() {
        let d = draw();
        let t = |n: [u8; 6]| Ticket::new(n).unwrap().prize(&d);
        assert_eq!(t([1, 5, 7, 26, 28, 43]), Some(Prize::First));
        assert_eq!(t([1, 5, 7, 26, 28, 30]), Some(Prize::Second));
        assert_eq!(t([1, 5, 7, 26, 28, 44]), Some(Prize::Third));
        assert_eq!(t([1, 5, 7, 26, 40, 44]), Some(Prize::Fourth));
        assert_eq!(t([1, 5, 7, 30, 40, 44]), Some(Prize::Fifth));
        assert_eq!(t([1, 5, 30, 31, 40, 44]), None);
    }

    #[test]
    fn lookup_and_display() {
        let d = draw();
        assert_eq!(d.winners(2), Some(80));
        assert_eq!(d.winners(3), None);
        let out = d.to_string();
        assert!(out.starts_with("Round 1197"));
        assert!(out.contains("01 05 07 26 28 43 + 30"));
    }
}
