use once_cell::sync::Lazy;
use regex::Regex;

use crate::feed::extract::first_capture;

// Media RSS and enclosure conventions, roughly in order of how often each
// carries the actual article image. Enclosures are matched in both
// attribute orders; real feeds use both.
static MEDIA_THUMBNAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<media:thumbnail[^>]*url=["']([^"']+)["']"#).unwrap());
static MEDIA_CONTENT_IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<media:content[^>]*url=["']([^"']+)["'][^>]*type=["']image/"#).unwrap()
});
static MEDIA_CONTENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<media:content[^>]*url=["']([^"']+)["']"#).unwrap());
static ENCLOSURE_TYPE_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<enclosure[^>]*type=["']image/[^"']*["'][^>]*url=["']([^"']+)["']"#).unwrap()
});
static ENCLOSURE_URL_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<enclosure[^>]*url=["']([^"']+)["'][^>]*type=["']image/"#).unwrap()
});
static INLINE_IMG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]*src=["']([^"']+)["']"#).unwrap());

/// Resolves the most likely representative image for an item or entry.
///
/// `block` is the raw item/entry fragment; `content` is the raw, still
/// entity-encoded description or summary text. Conventions are tried in
/// priority order, first match wins:
///
/// 1. `media:thumbnail` url attribute
/// 2. `media:content` with an `image/*` type
/// 3. any `media:content` url
/// 4. `enclosure` with an `image/*` type, either attribute order
/// 5. an inline `<img>` tag inside the entity-decoded content
///
/// The winning URL is entity-decoded before return, since feed URLs
/// frequently escape query-string separators (`&amp;q=85`). Returns an
/// empty string when nothing matches.
pub fn extract_image_url(block: &str, content: &str) -> String {
    let url = first_capture(&MEDIA_THUMBNAIL, block)
        .or_else(|| first_capture(&MEDIA_CONTENT_IMAGE, block))
        .or_else(|| first_capture(&MEDIA_CONTENT, block))
        .or_else(|| first_capture(&ENCLOSURE_TYPE_FIRST, block))
        .or_else(|| first_capture(&ENCLOSURE_URL_FIRST, block))
        .or_else(|| inline_img_src(content));

    match url {
        Some(url) => decode_url(&url),
        None => String::new(),
    }
}

/// Last resort: descriptions often embed escaped HTML with a leading
/// `<img>`. Decode just enough markup to see it.
fn inline_img_src(content: &str) -> Option<String> {
    let decoded = content
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    first_capture(&INLINE_IMG, &decoded)
}

fn decode_url(url: &str) -> String {
    url.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}
