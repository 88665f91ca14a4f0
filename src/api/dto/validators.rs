//! Field validators shared by request DTOs.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

/// Identifiers are restricted to ASCII letters, digits, underscore and hyphen.
pub static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("identifier regex is valid"));

/// Accepts only URLs with an `http://` or `https://` scheme prefix.
///
/// The prefix check is case-sensitive; the rest of the URL is not inspected.
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("url_scheme")
            .with_message(Cow::Borrowed("URL must start with http:// or https://")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_prefixes() {
        assert!(validate_http_url("http://example.com/deck.pptx").is_ok());
        assert!(validate_http_url("https://x/y.pptx").is_ok());
        assert!(validate_http_url("ftp://example.com/deck.pptx").is_err());
        assert!(validate_http_url("javascript:alert(1)").is_err());
        assert!(validate_http_url("example.com/deck.pptx").is_err());
        assert!(validate_http_url("").is_err());
    }

    #[test]
    fn test_identifier_regex() {
        assert!(IDENTIFIER_REGEX.is_match("abc123"));
        assert!(IDENTIFIER_REGEX.is_match("Deck_2024-Q3"));
        assert!(!IDENTIFIER_REGEX.is_match(""));
        assert!(!IDENTIFIER_REGEX.is_match("deck 1"));
        assert!(!IDENTIFIER_REGEX.is_match("../etc"));
        assert!(!IDENTIFIER_REGEX.is_match("déck"));
    }
}
