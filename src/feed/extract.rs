use regex::Regex;

/// Returns the inner text of the first `tag` element in `fragment`, or an
/// empty string when the tag is absent.
///
/// Matching is case-insensitive and tolerates attributes on the opening
/// tag. Content wrapped in a CDATA section is returned verbatim, entities
/// and embedded markup intact; otherwise the raw inner text is returned
/// with leading/trailing whitespace trimmed and interior newlines
/// preserved. Only the first occurrence is considered, and a missing tag
/// is not an error: an empty string is the standard miss signal.
///
/// # Examples
///
/// ```
/// use scour::feed::extract_tag;
///
/// assert_eq!(extract_tag("<title>Hello World</title>", "title"), "Hello World");
/// assert_eq!(extract_tag("<title type=\"html\">My Title</title>", "title"), "My Title");
/// assert_eq!(
///     extract_tag("<description><![CDATA[Some <b>bold</b> text]]></description>", "description"),
///     "Some <b>bold</b> text",
/// );
/// assert_eq!(extract_tag("<item></item>", "title"), "");
/// ```
pub fn extract_tag(fragment: &str, tag: &str) -> String {
    let tag = regex::escape(tag);
    let pattern = format!(r"(?is)<{tag}[^>]*>\s*(?:<!\[CDATA\[(.*?)\]\]>|(.*?))\s*</{tag}>");
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return String::new(),
    };

    let Some(caps) = re.captures(fragment) else {
        return String::new();
    };
    // CDATA payload when that branch matched, raw inner text otherwise.
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First capture group of `re` in `text`, as an owned string.
pub(crate) fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_simple_tag() {
        assert_eq!(
            extract_tag("<title>Hello World</title>", "title"),
            "Hello World"
        );
    }

    #[test]
    fn test_extracts_tag_with_attributes() {
        assert_eq!(
            extract_tag("<title type=\"html\">My Title</title>", "title"),
            "My Title"
        );
    }

    #[test]
    fn test_extracts_cdata_verbatim() {
        assert_eq!(
            extract_tag(
                "<description><![CDATA[Some <b>bold</b> text]]></description>",
                "description"
            ),
            "Some <b>bold</b> text"
        );
    }

    #[test]
    fn test_missing_tag_is_empty() {
        assert_eq!(
            extract_tag("<item><link>http://x.com</link></item>", "title"),
            ""
        );
    }

    #[test]
    fn test_preserves_interior_newlines() {
        let xml = "<description>\n  Line 1\n  Line 2\n</description>";
        assert_eq!(extract_tag(xml, "description"), "Line 1\n  Line 2");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_tag("<Title>Test</Title>", "title"), "Test");
        assert_eq!(extract_tag("<TITLE>Test</TITLE>", "title"), "Test");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let xml = "<title>First</title><title>Second</title>";
        assert_eq!(extract_tag(xml, "title"), "First");
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(extract_tag("<title></title>", "title"), "");
        assert_eq!(extract_tag("<title>   </title>", "title"), "");
    }

    #[test]
    fn test_empty_cdata() {
        assert_eq!(
            extract_tag("<title><![CDATA[]]></title>", "title"),
            ""
        );
    }

    #[test]
    fn test_namespaced_tag_name() {
        assert_eq!(
            extract_tag("<dc:creator>Jane Doe</dc:creator>", "dc:creator"),
            "Jane Doe"
        );
    }
}
