//! Text and time utilities shared by the feed parsers.
//!
//! This module provides the leaf operations the parsers compose:
//!
//! - **Text cleanup**: character-reference decoding and markup stripping
//!   for feed text nodes
//! - **Relative time**: coarse human-readable age labels for article lists
//!
//! # Examples
//!
//! ```
//! use scour::util::{clean_text, strip_html};
//!
//! let text = clean_text(&strip_html("<p>Tom &amp; Jerry</p>"));
//! assert_eq!(text, "Tom & Jerry");
//! ```

mod text;
mod time;

pub use text::{clean_text, strip_html};
pub use time::{relative_time, relative_time_at};
