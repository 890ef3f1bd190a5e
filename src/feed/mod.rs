//! Tolerant extraction of articles and subscriptions from raw feed XML.
//!
//! Real-world RSS and Atom feeds are routinely malformed: inconsistent
//! namespaces, HTML-escaped markup inside text nodes, stray CDATA, mixed
//! encodings. A conforming XML parser rejects exactly the documents this
//! crate exists for, so extraction is instead a set of independent,
//! tolerant pattern matches per field — a bad field degrades to an empty
//! value rather than failing the whole document.
//!
//! The module is organized into four submodules:
//!
//! - [`parser`] - RSS/Atom item extraction and format dispatch
//! - [`image`] - representative-image resolution for items
//! - [`opml`] - subscription extraction from OPML outlines
//! - [`extract`] - the shared tolerant tag extractor
//!
//! # Example
//!
//! ```
//! use scour::feed::parse_feed;
//!
//! let xml = r#"<rss><channel>
//!     <item><title>Hello</title><link>https://example.com/1</link></item>
//! </channel></rss>"#;
//!
//! let items = parse_feed(xml, "Example");
//! assert_eq!(items[0].title, "Hello");
//! ```

mod extract;
mod image;
mod opml;
mod parser;

pub use extract::extract_tag;
pub use image::extract_image_url;
pub use opml::{parse_opml, FeedSubscription};
pub use parser::{parse_atom_feed, parse_feed, parse_rss_feed, FeedItem};
