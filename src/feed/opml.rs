use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::feed::extract::first_capture;

/// A feed subscription extracted from an OPML document.
///
/// One per `<outline>` element carrying an `xmlUrl` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSubscription {
    /// Display name. Sourced from the `title` attribute, falling back to
    /// `text`, then to the feed URL itself.
    pub name: String,
    /// URL of the feed XML.
    pub url: String,
}

static OUTLINE_WITH_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<outline[^>]*xmlUrl=["']([^"']+)["'][^>]*>"#).unwrap());
static TITLE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)title=["']([^"']+)["']"#).unwrap());
static TEXT_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)text=["']([^"']+)["']"#).unwrap());

/// Extracts feed subscriptions from an OPML document, in document order.
///
/// Matching is attribute-driven rather than hierarchy-driven, so nested
/// outlines are handled transparently: category outlines without an
/// `xmlUrl` contribute nothing themselves but never block discovery of
/// their descendants, at any nesting depth.
///
/// Only `&amp;` is decoded in names and URLs; OPML attribute values are
/// not run through the full character-reference decoder.
///
/// # Examples
///
/// ```
/// use scour::feed::parse_opml;
///
/// let subs = parse_opml(r#"<opml><body>
///     <outline text="News">
///         <outline text="BBC World" xmlUrl="https://feeds.bbci.co.uk/news/world/rss.xml"/>
///     </outline>
/// </body></opml>"#);
///
/// assert_eq!(subs.len(), 1);
/// assert_eq!(subs[0].name, "BBC World");
/// ```
pub fn parse_opml(xml: &str) -> Vec<FeedSubscription> {
    OUTLINE_WITH_URL
        .captures_iter(xml)
        .filter_map(|caps| {
            let outline = caps.get(0).map_or("", |m| m.as_str());
            let url = decode_amp(caps.get(1)?.as_str());
            let name = first_capture(&TITLE_ATTR, outline)
                .or_else(|| first_capture(&TEXT_ATTR, outline))
                .map(|name| decode_amp(&name))
                .unwrap_or_else(|| url.clone());
            Some(FeedSubscription { name, url })
        })
        .collect()
}

fn decode_amp(value: &str) -> String {
    value.replace("&amp;", "&")
}
