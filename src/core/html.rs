// src/core/html.rs
//
// Document helpers shared by the page specs. Everything that knows about the
// site's stat-block markup goes through `StatSource`, so a markup change is
// fixed in one place.

use std::sync::LazyLock;

use regex::RegexBuilder;
use scraper::{ElementRef, Html, Selector};

static STATS_LABEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.statsLabel").unwrap());
static STATS_NUMBER: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.statsNumber").unwrap());

/// "Given a document, return the value for label X."
pub trait StatSource {
    /// Text of the number block belonging to the first label that matches
    /// `label` (case-insensitive substring), if any.
    fn stat(&self, label: &str) -> Option<String>;

    /// Same as [`StatSource::stat`] with a missing label read as "".
    fn stat_text(&self, label: &str) -> String {
        self.stat(label).unwrap_or_default()
    }
}

impl StatSource for Html {
    fn stat(&self, label: &str) -> Option<String> {
        stat_in(self.root_element(), label)
    }
}

impl StatSource for ElementRef<'_> {
    fn stat(&self, label: &str) -> Option<String> {
        stat_in(*self, label)
    }
}

fn stat_in(scope: ElementRef<'_>, label: &str) -> Option<String> {
    let re = RegexBuilder::new(&regex::escape(label))
        .case_insensitive(true)
        .build()
        .ok()?;

    let label_div = scope
        .select(&STATS_LABEL)
        .find(|el| sole_string(*el).is_some_and(|s| re.is_match(&s)))?;

    let number = label_div
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| is_div_with_class(*sib, "statsNumber"))
        .or_else(|| {
            label_div
                .parent()
                .and_then(ElementRef::wrap)
                .and_then(|parent| parent.select(&STATS_NUMBER).next())
        })?;

    Some(text_of(number))
}

/// The single string an element boils down to: its only text child, or the
/// sole string of its only element child. `None` when it holds mixed content.
fn sole_string(el: ElementRef<'_>) -> Option<String> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    if let Some(text) = only.value().as_text() {
        return Some(s!(&**text));
    }
    ElementRef::wrap(only).and_then(sole_string)
}

pub fn is_div_with_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().name() == "div" && has_class(el, class)
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Visible text with each fragment trimmed and empties dropped, joined
/// without separators.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// All text of the document, untouched, in document order.
pub fn page_text(doc: &Html) -> String {
    doc.root_element().text().collect()
}
