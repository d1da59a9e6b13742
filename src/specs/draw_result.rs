// src/specs/draw_result.rs
//! Scraping *spec* for the draw-result page (`gameResult.do?method=byWin`).
//!
//! Purpose:
//! - Parse the **decoded HTML** of one round's result page into a `DrawResult`.
//! - Every marker the page layout depends on lives in [`LAYOUT`]; a layout
//!   change upstream should only need an edit there.
//!
//! Failure policy:
//! - Round, draw date, bonus ball and the summary list are required; if any is
//!   missing the whole parse returns `None`.
//! - Winning balls, per-tier winner counts and the sales line degrade: bad
//!   entries are skipped, a missing sales line leaves `total_sales` empty.
//!
//! Tier rows are assumed to be listed 1st..5th with no gaps; the page lists a
//! tier with zero winners rather than dropping the row.

use std::collections::BTreeMap;

use crate::config::consts::{LOTTERY_NUMBER_SIZE, MAXIMUM_NUMBER, MINIMUM_NUMBER, PRIZE_TIERS};
use crate::config::options::ParseOptions;
use crate::core::html::{self, Step, step};
use crate::core::sanitize::strip_thousands;
use crate::lotto::DrawResult;

pub struct Layout {
    /// `<div class="win_result"><h4><strong>1197회</strong>`
    pub round: &'static [Step],
    pub round_unit: &'static str,
    /// `<p class="desc">(2025년 11월 15일 추첨)</p>`
    pub draw_date: &'static [Step],
    pub date_open: &'static str,
    pub date_close: &'static str,
    /// `<div class="num win"> … <span class="ball_645 …">N</span>` ×6
    pub winning_balls: &'static [Step],
    /// `<div class="num bonus"> … <span class="ball_645 …">N</span>`
    pub bonus_ball: &'static [Step],
    /// `<table class="tbl_data"><tbody><tr>` one row per tier, top = 1st
    pub tier_rows: &'static [Step],
    pub cell: Step,
    /// Zero-based column holding the winner count.
    pub count_column: usize,
    /// `<ul class="list_text_common"><li>총판매금액 : 118,431,563,000원</li>`
    pub summary_items: &'static [Step],
    pub sales_label: &'static str,
    pub currency_unit: &'static str,
}

pub const LAYOUT: Layout = Layout {
    round: &[step("div", &["win_result"]), step("h4", &[]), step("strong", &[])],
    round_unit: "회",
    draw_date: &[step("div", &["win_result"]), step("p", &["desc"])],
    date_open: "(",
    date_close: " 추첨)",
    winning_balls: &[step("div", &["num", "win"]), step("span", &["ball_645"])],
    bonus_ball: &[step("div", &["num", "bonus"]), step("span", &["ball_645"])],
    tier_rows: &[step("table", &["tbl_data"]), step("tbody", &[]), step("tr", &[])],
    cell: step("td", &[]),
    count_column: 2,
    summary_items: &[step("ul", &["list_text_common"]), step("li", &[])],
    sales_label: "총판매금액",
    currency_unit: "원",
};

/// Parse with the tolerant default policy (short ball lists are kept).
pub fn parse_doc(doc: &str) -> Option<DrawResult> {
    parse_doc_with(doc, &ParseOptions::default())
}

pub fn parse_doc_with(doc: &str, opts: &ParseOptions) -> Option<DrawResult> {
    let l = &LAYOUT;

    let Some(round) = extract_round(doc, l) else {
        logd!("Draw page: round marker missing or not numeric");
        return None;
    };
    let Some(draw_date) = extract_draw_date(doc, l) else {
        logd!("Draw page: round {round}: draw date missing");
        return None;
    };

    let numbers = extract_winning_numbers(doc, l);
    if numbers.len() < LOTTERY_NUMBER_SIZE {
        logd!("Draw page: round {round}: only {} winning ball(s)", numbers.len());
    }

    let Some(bonus_number) = extract_bonus(doc, l) else {
        logd!("Draw page: round {round}: bonus ball missing");
        return None;
    };

    if opts.require_six_numbers && !is_complete_draw(&numbers, bonus_number) {
        logd!("Draw page: round {round}: rejected {numbers:?} + {bonus_number} (strict)");
        return None;
    }

    let winner_counts = extract_winner_counts(doc, l);

    let Some(total_sales) = extract_total_sales(doc, l) else {
        logd!("Draw page: round {round}: summary list missing");
        return None;
    };

    Some(DrawResult {
        round,
        numbers,
        draw_date,
        bonus_number,
        winner_counts,
        total_sales,
    })
}

/* ---------------- helpers ---------------- */

fn extract_round(doc: &str, l: &Layout) -> Option<u32> {
    let block = html::select_first(doc, l.round)?;
    let txt = html::text(block).replace(l.round_unit, "");
    txt.trim().parse::<u32>().ok().filter(|&r| r > 0)
}

fn extract_draw_date(doc: &str, l: &Layout) -> Option<String> {
    let block = html::select_first(doc, l.draw_date)?;
    let txt = html::text(block)
        .replace(l.date_close, "")
        .replace(l.date_open, "");
    Some(s!(txt.trim()))
}

/// Balls in document order; unparsable ones skipped, at most six kept.
fn extract_winning_numbers(doc: &str, l: &Layout) -> Vec<u8> {
    html::select_all(doc, l.winning_balls)
        .into_iter()
        .filter_map(|ball| html::text(ball).parse::<u8>().ok())
        .take(LOTTERY_NUMBER_SIZE)
        .collect()
}

fn extract_bonus(doc: &str, l: &Layout) -> Option<u8> {
    let ball = html::select_first(doc, l.bonus_ball)?;
    html::text(ball).parse::<u8>().ok()
}

fn extract_winner_counts(doc: &str, l: &Layout) -> BTreeMap<u8, u64> {
    let mut counts = BTreeMap::new();

    for (idx, row) in html::select_all(doc, l.tier_rows).into_iter().enumerate() {
        let tier = idx + 1;
        if tier > PRIZE_TIERS as usize {
            break;
        }
        let cells = html::elements(html::inner(row), &l.cell);
        let Some(cell) = cells.get(l.count_column) else {
            logd!("Draw page: tier {tier}: no count column");
            continue;
        };
        match strip_thousands(&html::text(cell)).parse::<u64>() {
            Ok(n) => {
                counts.insert(tier as u8, n);
            }
            Err(_) => logd!("Draw page: tier {tier}: count {:?} not numeric", html::text(cell)),
        }
    }
    counts
}

/// `None` when the summary list is missing/empty; `Some("")` when no sales line.
fn extract_total_sales(doc: &str, l: &Layout) -> Option<String> {
    let items = html::select_all(doc, l.summary_items);
    if items.is_empty() {
        return None;
    }

    let sales = items
        .into_iter()
        .map(html::text)
        .find(|t| t.contains(l.sales_label))
        .map(|t| {
            let rest = t.replacen(l.sales_label, "", 1);
            let rest = rest.trim_start().trim_start_matches(':');
            s!(rest.replace(l.currency_unit, "").trim())
        })
        .unwrap_or_default();
    Some(sales)
}

fn is_complete_draw(numbers: &[u8], bonus: u8) -> bool {
    let in_range = |n: &u8| (MINIMUM_NUMBER..=MAXIMUM_NUMBER).contains(n);
    numbers.len() == LOTTERY_NUMBER_SIZE
        && numbers.iter().all(in_range)
        && numbers
            .iter()
            .enumerate()
            .all(|(i, n)| !numbers[..i].contains(n))
        && in_range(&bonus)
        && !numbers.contains(&bonus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(balls: &str, rows: &str, summary: &str) -> String {
        format!(
            r#"<html><body>
            <div class="win_result">
              <h4><strong>1197회</strong> 당첨결과</h4>
              <p class="desc">(2025년 11월 15일 추첨)</p>
              <div class="nums">
                <div class="num win"><strong>당첨번호</strong><p>{balls}</p></div>
                <div class="num bonus"><strong>보너스</strong><p><span class="ball_645 lrg ball4">30</span></p></div>
              </div>
            </div>
            <table class="tbl_data tbl_data_col"><thead><tr><th>순위</th></tr></thead>
            <tbody>{rows}</tbody></table>
            {summary}
            </body></html>"#
        )
    }

    fn balls(nums: &[u8]) -> String {
        nums.iter()
            .map(|n| format!(r#"<span class="ball_645 lrg ball1">{n}</span>"#))
            .collect()
    }

    fn row(tier: u8, count: &str) -> String {
        format!(r#"<tr><td>{tier}등</td><td class="tar"><strong>1,000원</strong></td><td>{count}</td><td>x</td></tr>"#)
    }

    const SUMMARY: &str = r#"<ul class="list_text_common"><li>추첨일 : 2025-11-15</li><li>총판매금액 : 118,431,563,000원</li></ul>"#;

    #[test]
    fn parses_minimal_page() {
        let rows: String = (1..=5).map(|t| row(t, "1,234")).collect();
        let doc = page(&balls(&[1, 5, 7, 26, 28, 43]), &rows, SUMMARY);
        let r = parse_doc(&doc).unwrap();
        assert_eq!(r.round, 1197);
        assert_eq!(r.draw_date, "2025년 11월 15일");
        assert_eq!(r.numbers, vec![1, 5, 7, 26, 28, 43]);
        assert_eq!(r.bonus_number, 30);
        assert_eq!(r.winner_counts.len(), 5);
        assert_eq!(r.winners(5), Some(1234));
        assert_eq!(r.total_sales, "118,431,563,000");
    }

    #[test]
    fn short_ball_list_tolerated_unless_strict() {
        let doc = page(&balls(&[1, 5, 7, 26, 28]), &row(1, "3"), SUMMARY);
        assert_eq!(parse_doc(&doc).unwrap().numbers.len(), 5);
        assert!(parse_doc_with(&doc, &ParseOptions::strict()).is_none());
    }

    #[test]
    fn strict_rejects_bonus_among_numbers() {
        let doc = page(&balls(&[1, 5, 7, 26, 28, 30]), &row(1, "3"), SUMMARY);
        assert!(parse_doc(&doc).is_some());
        assert!(parse_doc_with(&doc, &ParseOptions::strict()).is_none());
    }

    #[test]
    fn non_numeric_ball_is_skipped() {
        let doc = page(
            r#"<span class="ball_645">1</span><span class="ball_645">?</span><span class="ball_645">9</span>"#,
            "",
            SUMMARY,
        );
        assert_eq!(parse_doc(&doc).unwrap().numbers, vec![1, 9]);
    }

    #[test]
    fn extra_rows_beyond_fifth_tier_ignored() {
        let rows: String = (1..=6).map(|t| row(t, "7")).collect();
        let doc = page(&balls(&[1, 2, 3, 4, 5, 6]), &rows, SUMMARY);
        let r = parse_doc(&doc).unwrap();
        assert_eq!(r.winner_counts.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn row_without_count_cell_is_omitted() {
        let rows = format!("{}<tr><td>2등</td></tr>{}", row(1, "3"), row(3, "9"));
        let doc = page(&balls(&[1, 2, 3, 4, 5, 6]), &rows, SUMMARY);
        let r = parse_doc(&doc).unwrap();
        assert_eq!(r.winners(1), Some(3));
        assert_eq!(r.winners(2), None);
        assert_eq!(r.winners(3), Some(9));
    }

    #[test]
    fn zero_round_is_rejected() {
        let doc = page(&balls(&[1, 2, 3, 4, 5, 6]), "", SUMMARY).replace("1197회", "0회");
        assert!(parse_doc(&doc).is_none());
    }
}
