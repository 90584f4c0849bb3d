// src/specs/season.rs

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::SEASON_PAGE;
use crate::core::html::{page_text, text_of};
use crate::core::sanitize::{contains_ci, normalize_ws, safe_int};
use crate::core::{PageSource, StatSource};
use crate::data::{RosterEntry, Season, Winner};
use crate::error::Result;

static CONTESTANT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.contestant").unwrap());
static CONTESTANT_ALT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div.contestantAlt").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static PERSON_NAME: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.personName").unwrap());

static PERSON_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"person\.php\?id=\d+").unwrap());
static ID_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"id=(\d+)").unwrap());
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4})").unwrap());
static WON_THIS_SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w[\w\s'-]+?)\s+won\s+this\s+series").unwrap());

pub fn fetch(source: &dyn PageSource, site_id: u32, host_ids: &BTreeSet<u32>) -> Result<Season> {
    let doc = source.fetch(&format!("{SEASON_PAGE}{site_id}"))?;
    Ok(parse(&doc, site_id, host_ids))
}

/// Season as the site presents it. `series_number` starts out equal to the
/// site id; the reconciler corrects it.
pub fn parse(doc: &Html, site_id: u32, host_ids: &BTreeSet<u32>) -> Season {
    let text = page_text(doc);
    let contestants = parse_roster(doc, host_ids);
    let winner = detect_winner(&text, &contestants);

    Season {
        id: site_id,
        series_number: site_id,
        year: find_year(&text),
        episodes: safe_int(&doc.stat_text("Episodes"), 0),
        contestants,
        winner,
        error: None,
    }
}

/// First four-digit run on the page, 0 if none.
pub fn find_year(text: &str) -> i64 {
    YEAR.captures(text)
        .map(|cap| safe_int(&cap[1], 0))
        .unwrap_or(0)
}

/// Contestant cards in page order, hosts dropped, first occurrence of each id kept.
pub fn parse_roster(doc: &Html, host_ids: &BTreeSet<u32>) -> Vec<RosterEntry> {
    let mut cards: Vec<ElementRef> = doc.select(&CONTESTANT).collect();
    if cards.is_empty() {
        // Some season pages use the alternate card class
        cards = doc.select(&CONTESTANT_ALT).collect();
    }

    let mut roster: Vec<RosterEntry> = Vec::new();
    for card in cards {
        let Some((id, link)) = person_link(card) else { continue };
        if host_ids.contains(&id) || roster.iter().any(|c| c.id == id) {
            continue;
        }
        let name = card
            .select(&PERSON_NAME)
            .next()
            .map(text_of)
            .unwrap_or_else(|| text_of(link));
        roster.push(RosterEntry::new(id, normalize_ws(&name)));
    }
    roster
}

/// First `person.php?id=N` link in a card, with the parsed id.
fn person_link(card: ElementRef<'_>) -> Option<(u32, ElementRef<'_>)> {
    let link = card
        .select(&LINK)
        .find(|a| a.value().attr("href").is_some_and(|h| PERSON_HREF.is_match(h)))?;
    let href = link.value().attr("href")?;
    let id = ID_PARAM.captures(href)?[1].parse().ok()?;
    Some((id, link))
}

/// "<name> won this series" in the page text, matched against the roster.
pub fn detect_winner(text: &str, roster: &[RosterEntry]) -> Option<Winner> {
    let cap = WON_THIS_SERIES.captures(text)?;
    let name = cap[1].trim();
    roster
        .iter()
        .find(|c| contains_ci(&c.name, name))
        .map(|c| Winner { id: c.id, name: c.name.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = include_str!("../../tests/fixtures/season_1.html");

    fn hosts() -> BTreeSet<u32> {
        BTreeSet::from([19, 32])
    }

    #[test]
    fn parses_fixture_season() {
        let s = parse(&Html::parse_document(PAGE), 1, &hosts());
        assert_eq!(s.id, 1);
        assert_eq!(s.series_number, 1);
        assert_eq!(s.year, 2015);
        assert_eq!(s.episodes, 6);
        let ids: Vec<u32> = s.contestants.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 69, 44, 70, 71]);
        assert_eq!(s.winner, Some(Winner { id: 69, name: s!("Josh Widdicombe") }));
    }

    #[test]
    fn name_falls_back_to_link_text() {
        let s = parse(&Html::parse_document(PAGE), 1, &hosts());
        assert_eq!(s.contestants[0].name, "Frank Skinner");
        assert_eq!(s.contestants[1].name, "Josh Widdicombe");
    }

    #[test]
    fn alternate_card_class_is_used_when_primary_absent() {
        let html = r#"
            <div class="contestantAlt"><a href="person.php?id=112">Atle Antonsen</a></div>
            <div class="contestantAlt"><a href="/person.php?id=113"><p class="personName">Bård Tufte Johansen</p></a></div>"#;
        let roster = parse_roster(&Html::parse_document(html), &hosts());
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].name, "Bård Tufte Johansen");
    }

    #[test]
    fn winner_needs_roster_match() {
        let roster = vec![RosterEntry::new(69, "Josh Widdicombe"), RosterEntry::new(8, "Rob Beckett")];
        assert_eq!(detect_winner("Notes: rob beckett won this series.", &roster).map(|w| w.id), Some(8));
        assert_eq!(detect_winner("Notes: Someone Else won this series.", &roster), None);
        assert_eq!(detect_winner("No winner text here", &roster), None);
    }

    #[test]
    fn year_defaults_to_zero() {
        assert_eq!(find_year("Series 12 aired in 2021"), 2021);
        assert_eq!(find_year("no digits"), 0);
    }
}
