//! Tolerant, regex-driven extraction of RSS, Atom, and OPML data.
//!
//! Real-world feeds are frequently malformed, mix namespaces, and bury
//! HTML-escaped markup inside text nodes. This crate trades XML
//! conformance for tolerance: every operation is a pure function over raw
//! document text that degrades field-by-field instead of rejecting the
//! document. Missing elements become empty strings, unparsable dates
//! become zero timestamps, and fully empty fragments are skipped.
//!
//! Fetching, caching, and rendering are deliberately out of scope; this
//! crate only turns document text into normalized records.
//!
//! # Example
//!
//! ```
//! use scour::{parse_feed, parse_opml};
//!
//! let xml = r#"<rss><channel><item>
//!     <title>Hello</title>
//!     <link>https://example.com/hello</link>
//! </item></channel></rss>"#;
//!
//! let items = parse_feed(xml, "Example");
//! assert_eq!(items[0].title, "Hello");
//!
//! let subs = parse_opml(r#"<outline text="Example" xmlUrl="https://example.com/feed"/>"#);
//! assert_eq!(subs[0].url, "https://example.com/feed");
//! ```

pub mod feed;
pub mod util;

pub use feed::{
    extract_image_url, extract_tag, parse_atom_feed, parse_feed, parse_opml, parse_rss_feed,
    FeedItem, FeedSubscription,
};
pub use util::{clean_text, relative_time, relative_time_at, strip_html};
