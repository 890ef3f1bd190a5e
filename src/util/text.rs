use once_cell::sync::Lazy;
use regex::Regex;

/// Literal `<...>` markup, including self-closing tags. An empty `<>` is
/// not a tag and is left alone.
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Named character references decoded by [`clean_text`], in decode order.
const NAMED_REFERENCES: [(&str, char); 6] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
    ("&apos;", '\''),
];

/// Decodes HTML/XML character references and normalizes whitespace.
///
/// Handles the named entities feeds actually use (`&amp;`, `&lt;`, `&gt;`,
/// `&quot;`, `&#39;`, `&apos;`) plus hexadecimal (`&#x2019;`) and decimal
/// (`&#8212;`) numeric references. Decoding is a single left-to-right pass:
/// decoded output is never rescanned, so doubly-escaped input such as
/// `&amp;amp;` comes out as `&amp;` rather than collapsing to `&`.
///
/// After decoding, every run of whitespace (newlines and tabs included)
/// collapses to a single space and the result is trimmed.
///
/// # Examples
///
/// ```
/// use scour::util::clean_text;
///
/// assert_eq!(clean_text("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(clean_text("&#x2019;"), "\u{2019}");
/// assert_eq!(clean_text("  hello   world  \n  foo  "), "hello world foo");
/// ```
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let decoded = decode_references(text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes literal `<tag>` markup from text.
///
/// Operates purely on real angle-bracket tags. Markup that was
/// entity-encoded (`&lt;b&gt;`) is untouched here; that is [`clean_text`]'s
/// job.
///
/// # Examples
///
/// ```
/// use scour::util::strip_html;
///
/// assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
/// assert_eq!(strip_html("&lt;b&gt;not markup&lt;/b&gt;"), "&lt;b&gt;not markup&lt;/b&gt;");
/// ```
pub fn strip_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    TAG.replace_all(text, "").into_owned()
}

/// Single left-to-right decode pass over the fixed reference set.
fn decode_references(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match decode_reference(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes the reference at the start of `tail` (which begins with `&`).
/// Returns the character and the byte length consumed, or `None` when the
/// text is not a recognized reference and the `&` should pass through.
fn decode_reference(tail: &str) -> Option<(char, usize)> {
    for (name, ch) in NAMED_REFERENCES {
        if tail.starts_with(name) {
            return Some((ch, name.len()));
        }
    }

    let body = tail.strip_prefix("&#")?;
    let hex = body.strip_prefix('x').or_else(|| body.strip_prefix('X'));
    let (digits, radix, prefix_len) = match hex {
        Some(digits) => (digits, 16, 3),
        None => (body, 10, 2),
    };
    let end = digits.find(';')?;
    let value = u32::from_str_radix(&digits[..end], radix).ok()?;
    // References naming invalid code points stay literal.
    let ch = char::from_u32(value)?;
    Some((ch, prefix_len + end + 1))
}
