use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::feed::extract::{extract_tag, first_capture};
use crate::feed::image::extract_image_url;
use crate::util::{clean_text, strip_html};

/// A single normalized article extracted from an RSS or Atom feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Display title; `"Untitled"` when the source carried none.
    pub title: String,
    /// Canonical article URL, possibly empty.
    pub link: String,
    /// Plain-text summary: markup stripped, entities decoded, whitespace
    /// collapsed.
    pub description: String,
    /// The date string exactly as found in the source, kept for display
    /// and diagnostics.
    pub date_str: String,
    /// Epoch milliseconds parsed from `date_str`; `0` when absent or
    /// unparsable.
    pub timestamp: i64,
    /// Caller-supplied label identifying the feed this item came from.
    pub source: String,
    /// Resolved representative image URL, possibly empty.
    pub image_url: String,
}

impl FeedItem {
    /// The published instant, when one was successfully parsed.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

// Block segmentation is non-greedy to stop at the innermost closing tag.
static RSS_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<item[\s>](.*?)</item>").unwrap());
static ATOM_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<entry[\s>](.*?)</entry>").unwrap());
static ATOM_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<link[^>]*href=["']([^"']+)["'][^>]*>"#).unwrap());
static ATOM_ALTERNATE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<link[^>]*rel=["']alternate["'][^>]*href=["']([^"']+)["'][^>]*>"#).unwrap()
});

/// Parses a feed document, sniffing RSS vs Atom by shape.
///
/// The check is a literal substring heuristic, not validation: any
/// document containing `<feed` is handed to the Atom parser, everything
/// else to the RSS parser.
pub fn parse_feed(xml: &str, source: &str) -> Vec<FeedItem> {
    if xml.contains("<feed") {
        tracing::debug!(source, "dispatching document to atom parser");
        parse_atom_feed(xml, source)
    } else {
        tracing::debug!(source, "dispatching document to rss parser");
        parse_rss_feed(xml, source)
    }
}

/// Parses an RSS 2.0-ish document into items, preserving document order.
///
/// Extraction is best-effort: a block missing both its title and link is
/// dropped, every other missing field degrades to an empty value.
pub fn parse_rss_feed(xml: &str, source: &str) -> Vec<FeedItem> {
    RSS_ITEM
        .captures_iter(xml)
        .filter_map(|caps| {
            let block = caps.get(1).map_or("", |m| m.as_str());
            let title = extract_tag(block, "title");
            let link = extract_tag(block, "link");
            let description = extract_tag(block, "description");
            let pub_date = extract_tag(block, "pubDate");

            if title.is_empty() && link.is_empty() {
                return None;
            }

            Some(FeedItem {
                title: clean_text(non_empty_or(&title, "Untitled")),
                description: clean_text(&strip_html(&description)),
                image_url: extract_image_url(block, &description),
                timestamp: parse_timestamp(&pub_date),
                date_str: pub_date,
                link,
                source: source.to_string(),
            })
        })
        .collect()
}

/// Parses an Atom-ish document into items, preserving document order.
///
/// Field sources fall back in fixed order: description from `summary`
/// then `content`, date from `updated` then `published`, link from the
/// `rel="alternate"` link then the first `<link>` of any kind.
pub fn parse_atom_feed(xml: &str, source: &str) -> Vec<FeedItem> {
    ATOM_ENTRY
        .captures_iter(xml)
        .filter_map(|caps| {
            let block = caps.get(1).map_or("", |m| m.as_str());
            let title = extract_tag(block, "title");
            let summary = first_tag(block, &["summary", "content"]);
            let updated = first_tag(block, &["updated", "published"]);
            let link = first_capture(&ATOM_ALTERNATE_LINK, block)
                .or_else(|| first_capture(&ATOM_LINK, block))
                .unwrap_or_default();

            if title.is_empty() && link.is_empty() {
                return None;
            }

            Some(FeedItem {
                title: clean_text(non_empty_or(&title, "Untitled")),
                description: clean_text(&strip_html(&summary)),
                image_url: extract_image_url(block, &summary),
                timestamp: parse_timestamp(&updated),
                date_str: updated,
                link,
                source: source.to_string(),
            })
        })
        .collect()
}

/// Evaluates an ordered list of candidate tags, returning the content of
/// the first one that is present and non-empty.
fn first_tag(block: &str, tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| extract_tag(block, tag))
        .find(|content| !content.is_empty())
        .unwrap_or_default()
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn parse_timestamp(date_str: &str) -> i64 {
    parse_date(date_str).map_or(0, |dt| dt.timestamp_millis())
}

/// Best-effort date parsing across the formats feeds actually emit.
///
/// RFC 2822 covers RSS `pubDate`, RFC 3339 covers Atom `updated`; the
/// remaining forms show up in feeds that never read either spec.
fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    tracing::debug!(date = trimmed, "unrecognized date format");
    None
}
