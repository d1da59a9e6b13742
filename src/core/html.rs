// src/core/html.rs
//! Low-level HTML string helpers, tailored to server-rendered result pages.
//!
//! Matching is case-insensitive on ASCII tag/attribute names. Lowercasing is
//! ASCII-only so byte offsets in the lowercase copy line up with the source.

use super::sanitize::{normalize_entities, normalize_ws};

/// One `tag.class.class` step of a descendant selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub tag: &'static str,
    pub classes: &'static [&'static str],
}

pub const fn step(tag: &'static str, classes: &'static [&'static str]) -> Step {
    Step { tag, classes }
}

pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// `<tag` at `pos`, followed by whitespace, `>` or `/` (so `<p` never hits `<pre`).
fn opens_tag_at(lc: &str, pos: usize, tag: &str) -> bool {
    let b = lc.as_bytes();
    let end = pos + 1 + tag.len();
    b.get(pos) == Some(&b'<')
        && lc.get(pos + 1..end) == Some(tag)
        && matches!(b.get(end), Some(c) if c.is_ascii_whitespace() || *c == b'>' || *c == b'/')
}

fn closes_tag_at(lc: &str, pos: usize, tag: &str) -> bool {
    let b = lc.as_bytes();
    let end = pos + 2 + tag.len();
    lc.get(pos..pos + 2) == Some("</")
        && lc.get(pos + 2..end) == Some(tag)
        && matches!(b.get(end), Some(c) if c.is_ascii_whitespace() || *c == b'>')
}

fn find_open(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let needle = format!("<{tag}");
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&needle)? + pos;
        if opens_tag_at(lc, at, tag) {
            return Some(at);
        }
        pos = at + 1;
    }
}

/// Elements whose end tag may be left out, and what closes them implicitly.
struct ImpliedEnd {
    tag: &'static str,
    /// Opening one of these ends the element.
    before_open: &'static [&'static str],
    /// Closing one of these (a parent) ends the element.
    before_close: &'static [&'static str],
    /// Containers whose contents are skipped (nested lists, tables).
    nests: &'static [&'static str],
}

const CELL: ImpliedEnd = ImpliedEnd {
    tag: "td",
    before_open: &["td", "th", "tr", "thead", "tbody", "tfoot"],
    before_close: &["tr", "thead", "tbody", "tfoot", "table"],
    nests: &["table"],
};

const IMPLIED_END: &[ImpliedEnd] = &[
    ImpliedEnd {
        tag: "li",
        before_open: &["li"],
        before_close: &["ul", "ol"],
        nests: &["ul", "ol"],
    },
    ImpliedEnd {
        tag: "p",
        before_open: &[
            "p", "div", "ul", "ol", "dl", "table", "h1", "h2", "h3", "h4", "h5", "h6",
            "pre", "form", "section", "article", "blockquote", "hr",
        ],
        before_close: &[
            "div", "td", "th", "li", "ul", "ol", "table", "section", "article", "body", "html",
        ],
        nests: &[],
    },
    CELL,
    ImpliedEnd { tag: "th", ..CELL },
    ImpliedEnd {
        tag: "tr",
        before_open: &["tr", "thead", "tbody", "tfoot"],
        before_close: &["thead", "tbody", "tfoot", "table"],
        nests: &["table"],
    },
];

/// End (exclusive) of the block whose opener starts at `start`.
/// Same-name tags nest. A missing close tag yields `None`, except for
/// elements in [`IMPLIED_END`], which end where the next sibling or the parent's
/// close tag begins (or at the end of `lc`).
fn block_end(lc: &str, tag: &str, start: usize) -> Option<usize> {
    let open_end = lc[start..].find('>')? + start + 1;
    if lc[..open_end].ends_with("/>") {
        return Some(open_end);
    }
    if let Some(rule) = IMPLIED_END.iter().find(|r| r.tag == tag) {
        return Some(implied_block_end(lc, rule, open_end));
    }

    let mut depth = 1usize;
    let mut pos = open_end;
    while depth > 0 {
        let at = lc[pos..].find('<')? + pos;
        if closes_tag_at(lc, at, tag) {
            depth -= 1;
            let gt = lc[at..].find('>')? + at + 1;
            if depth == 0 {
                return Some(gt);
            }
            pos = gt;
        } else {
            if opens_tag_at(lc, at, tag) {
                depth += 1;
            }
            pos = at + 1;
        }
    }
    None
}

fn implied_block_end(lc: &str, rule: &ImpliedEnd, from: usize) -> usize {
    let mut nest = 0usize;
    let mut pos = from;
    while let Some(rel) = lc[pos..].find('<') {
        let at = pos + rel;
        if nest == 0 {
            if closes_tag_at(lc, at, rule.tag) {
                return lc[at..].find('>').map_or(lc.len(), |gt| at + gt + 1);
            }
            let sibling_or_parent = rule.before_open.iter().any(|t| opens_tag_at(lc, at, t))
                || rule.before_close.iter().any(|t| closes_tag_at(lc, at, t));
            if sibling_or_parent {
                return at;
            }
        }
        if rule.nests.iter().any(|t| opens_tag_at(lc, at, t)) {
            nest += 1;
        } else if rule.nests.iter().any(|t| closes_tag_at(lc, at, t)) {
            nest = nest.saturating_sub(1);
        }
        pos = at + 1;
    }
    lc.len()
}

/// The `<tag …>` part of a block.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Class names of an opening tag. Tolerates `class="a b"`, `class='a b'` and `class=a`.
pub fn class_list(opener: &str) -> Vec<&str> {
    let lc = to_lower(opener);
    let b = lc.as_bytes();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find("class") {
        let at = pos + rel;
        pos = at + "class".len();
        if at == 0 || !b[at - 1].is_ascii_whitespace() {
            continue; // e.g. data-class=
        }

        let mut i = pos;
        while b.get(i).is_some_and(|c| c.is_ascii_whitespace()) {
            i += 1;
        }
        if b.get(i) != Some(&b'=') {
            continue;
        }
        i += 1;
        while b.get(i).is_some_and(|c| c.is_ascii_whitespace()) {
            i += 1;
        }

        let value = match b.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let end = lc[i + 1..]
                    .find(q as char)
                    .map(|e| i + 1 + e)
                    .unwrap_or(b.len());
                &opener[i + 1..end]
            }
            Some(_) => {
                let end = lc[i..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .map(|e| i + e)
                    .unwrap_or(b.len());
                &opener[i..end]
            }
            None => return Vec::new(),
        };
        return value.split_ascii_whitespace().collect();
    }
    Vec::new()
}

pub fn has_classes(opener: &str, classes: &[&str]) -> bool {
    if classes.is_empty() {
        return true;
    }
    let have = class_list(opener);
    classes
        .iter()
        .all(|want| have.iter().any(|h| h.eq_ignore_ascii_case(want)))
}

/// All top-level `tag` blocks in `scope` carrying every class of `st`, in document order.
/// A match's own descendants are not searched again.
pub fn elements<'a>(scope: &'a str, st: &Step) -> Vec<&'a str> {
    let lc = to_lower(scope);
    let tag = to_lower(st.tag);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(start) = find_open(&lc, &tag, pos) {
        match block_end(&lc, &tag, start) {
            Some(end) if has_classes(opener(&scope[start..end]), st.classes) => {
                out.push(&scope[start..end]);
                pos = end;
            }
            _ => pos = start + 1,
        }
    }
    out
}

/// Descendant-selector walk: `[div.a, span.b]` ≈ `div.a span.b`.
pub fn select_all<'a>(scope: &'a str, selector: &[Step]) -> Vec<&'a str> {
    let mut out = Vec::new();
    collect(scope, selector, &mut out);
    out
}

fn collect<'a>(scope: &'a str, selector: &[Step], out: &mut Vec<&'a str>) {
    let Some((first, rest)) = selector.split_first() else {
        return;
    };
    for block in elements(scope, first) {
        if rest.is_empty() {
            out.push(block);
        } else {
            collect(inner(block), rest, out);
        }
    }
}

pub fn select_first<'a>(scope: &'a str, selector: &[Step]) -> Option<&'a str> {
    select_all(scope, selector).into_iter().next()
}

/// Tag name of a block's opener, lowercased.
fn tag_name(block: &str) -> String {
    block
        .trim_start_matches('<')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Given a tag block like `<td ...>INNER</td>`, return INNER
/// (still may contain nested tags). Blocks whose end tag was left out
/// yield everything after the opener.
pub fn inner(block: &str) -> &str {
    let Some(open_end) = block.find('>') else {
        return "";
    };
    let body = &block[open_end + 1..];
    let trimmed = body.trim_end();
    if let Some(close_start) = trimmed.rfind("</") {
        let closer = to_lower(&trimmed[close_start..]);
        if closes_tag_at(&closer, 0, &tag_name(block)) && closer.find('>') == Some(closer.len() - 1) {
            return &body[..close_start];
        }
    }
    body
}

/// Visible text of a block: tags stripped, then entities decoded, whitespace collapsed.
pub fn text(block: &str) -> String {
    normalize_ws(&normalize_entities(&strip_tags(inner(block))))
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALL: Step = step("span", &["ball_645"]);

    #[test]
    fn nested_same_tag_closes_at_matching_depth() {
        let doc = r#"<div class="outer"><div class="in">a</div><span>b</span></div><div>c</div>"#;
        let blocks = elements(doc, &step("div", &["outer"]));
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].ends_with("<span>b</span></div>"));
    }

    #[test]
    fn tag_prefix_is_not_a_match() {
        let doc = "<pre>x</pre><p class=desc>y</p>";
        let blocks = elements(doc, &step("p", &[]));
        assert_eq!(blocks, vec!["<p class=desc>y</p>"]);
    }

    #[test]
    fn class_forms() {
        assert_eq!(class_list(r#"<div class="num win">"#), vec!["num", "win"]);
        assert_eq!(class_list("<div class='num bonus'>"), vec!["num", "bonus"]);
        assert_eq!(class_list("<P CLASS=desc>"), vec!["desc"]);
        assert!(class_list(r#"<div data-class="x">"#).is_empty());
    }

    #[test]
    fn descendant_walk_in_document_order() {
        let doc = r#"
            <DIV class="num win"><p><span class="ball_645 lrg ball1">3</span>
            <span class="ball_645 lrg ball2">14</span></p></DIV>
            <div class="num bonus"><span class="ball_645">22</span></div>
        "#;
        let win = select_all(doc, &[step("div", &["num", "win"]), BALL]);
        let nums: Vec<String> = win.iter().map(|b| text(b)).collect();
        assert_eq!(nums, vec!["3", "14"]);

        let bonus = select_first(doc, &[step("div", &["num", "bonus"]), BALL]).unwrap();
        assert_eq!(text(bonus), "22");
    }

    #[test]
    fn unclosed_block_is_skipped() {
        let doc = "<div class=a>broken<div class=a>ok</div>";
        let items = elements(doc, &step("div", &["a"]));
        assert_eq!(items.len(), 1);
        assert_eq!(text(items[0]), "ok");
    }

    #[test]
    fn optional_end_tags_close_at_sibling_or_parent() {
        let list = "<ul><li>a<li>b <b>x</b>\n<li>c</ul>";
        let items: Vec<String> = select_all(list, &[step("ul", &[]), step("li", &[])])
            .into_iter()
            .map(text)
            .collect();
        assert_eq!(items, vec!["a", "b x", "c"]);

        let doc = r#"<div class="r"><p class=desc>(date)<div>next</div></div>"#;
        let desc = select_first(doc, &[step("div", &["r"]), step("p", &["desc"])]).unwrap();
        assert_eq!(text(desc), "(date)");

        let rows = "<table><tr><td>1<td><strong>2</strong><td>3</tr><tr><td>4</table>";
        let cells: Vec<Vec<String>> = select_all(rows, &[step("table", &[]), step("tr", &[])])
            .into_iter()
            .map(|tr| elements(inner(tr), &step("td", &[])).into_iter().map(text).collect())
            .collect();
        assert_eq!(cells, vec![vec!["1", "2", "3"], vec!["4"]]);
    }

    #[test]
    fn nested_list_stays_inside_its_item() {
        let doc = "<ul><li>outer <ul><li>in1 <li>in2</ul><li>next</ul>";
        let items = select_all(doc, &[step("ul", &[]), step("li", &[])]);
        assert_eq!(items.len(), 2);
        assert_eq!(text(items[0]), "outer in1 in2");
        assert_eq!(text(items[1]), "next");
    }

    #[test]
    fn text_strips_and_normalizes() {
        assert_eq!(text("<td> 1,234&nbsp;<b>x</b>\n </td>"), "1,234 x");
    }

    #[test]
    fn escaped_angle_brackets_survive_as_text() {
        assert_eq!(text("<li>3 &lt; 5 &gt; 1</li>"), "3 < 5 > 1");
        assert_eq!(text("<td>&lt;b&gt;bold&lt;/b&gt;</td>"), "<b>bold</b>");
    }
}
