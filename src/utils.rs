//! Utility functions for HTML escaping and secret masking.

/// Escape text for interpolation into HTML element content or attributes.
///
/// The search and summarization APIs return arbitrary text; anything
/// interpolated into the digest markup goes through this first.
///
/// # Arguments
///
/// * `s` - The raw text to escape
///
/// # Returns
///
/// The text with `&`, `<`, `>`, `"`, and `'` replaced by entities.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Mask a secret for diagnostic output.
///
/// Keeps the first 4 characters so a misconfigured key can be recognized in
/// logs without exposing it. Values of 4 characters or fewer are fully
/// masked.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(mask_secret("sk-abcdef123"), "sk-a...");
/// assert_eq!(mask_secret("abc"), "***");
/// ```
pub fn mask_secret(value: &str) -> String {
    if value.chars().count() > 4 {
        let prefix: String = value.chars().take(4).collect();
        format!("{prefix}...")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("West Seattle news"), "West Seattle news");
    }

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(
            escape_html(r#"<b>"bold" & 'loud'</b>"#),
            "&lt;b&gt;&quot;bold&quot; &amp; &#39;loud&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_mask_secret_long_value() {
        assert_eq!(mask_secret("sk-abcdef123"), "sk-a...");
    }

    #[test]
    fn test_mask_secret_short_value() {
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("abcd"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_mask_secret_multibyte() {
        // 5 chars, 10 bytes; must not split mid-character
        assert_eq!(mask_secret("ééééé"), "éééé...");
    }
}
