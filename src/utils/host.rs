//! Host header parsing and allow-list matching.

use axum::http::{HeaderMap, Uri, header};

/// Extracts the host name from the `Host` header, falling back to the URI
/// authority (HTTP/2 requests carry it there).
///
/// Port numbers are stripped; IPv6 literals keep their brackets. The result is
/// lowercased.
///
/// Returns `None` when no host is present or the header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "API.example.com:8080".parse().unwrap());
///
/// let host = request_host(&headers, &Uri::from_static("/health")).unwrap();
/// assert_eq!(host, "api.example.com");
/// ```
pub fn request_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let host = match headers.get(header::HOST) {
        Some(value) => value.to_str().ok()?,
        None => uri.authority()?.as_str(),
    };

    let host = if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        // IPv4, hostname, or localhost - strip port if present
        host.split(':').next().unwrap_or(host)
    };

    if host.is_empty() {
        return None;
    }

    Some(host.to_ascii_lowercase())
}

/// Returns true if `host` matches any of the allowed patterns.
///
/// A pattern `*.example.com` matches `api.example.com` and
/// `a.b.example.com`, but not `example.com` itself. A lone `*` matches
/// everything. Other patterns must match exactly (case-insensitive).
pub fn host_is_allowed(host: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|pattern| {
        if pattern == "*" {
            return true;
        }

        match pattern.strip_prefix("*.") {
            Some(suffix) => host
                .len()
                .checked_sub(suffix.len() + 1)
                .is_some_and(|dot| {
                    host.as_bytes()[dot] == b'.' && host[dot + 1..].eq_ignore_ascii_case(suffix)
                }),
            None => host.eq_ignore_ascii_case(pattern),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_request_host_simple() {
        let host = request_host(&headers_with_host("example.com"), &Uri::from_static("/"));
        assert_eq!(host.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_request_host_strips_port_and_lowercases() {
        let host = request_host(
            &headers_with_host("API.Example.com:3000"),
            &Uri::from_static("/"),
        );
        assert_eq!(host.as_deref(), Some("api.example.com"));
    }

    #[test]
    fn test_request_host_ipv6_with_port() {
        let host = request_host(&headers_with_host("[::1]:8080"), &Uri::from_static("/"));
        assert_eq!(host.as_deref(), Some("[::1]"));
    }

    #[test]
    fn test_request_host_falls_back_to_uri() {
        let host = request_host(
            &HeaderMap::new(),
            &Uri::from_static("https://deck.vercel.app:443/analyze"),
        );
        assert_eq!(host.as_deref(), Some("deck.vercel.app"));
    }

    #[test]
    fn test_request_host_missing() {
        assert!(request_host(&HeaderMap::new(), &Uri::from_static("/health")).is_none());
    }

    #[test]
    fn test_request_host_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);
            assert!(request_host(&headers, &Uri::from_static("/")).is_none());
        }
    }

    #[test]
    fn test_wildcard_matches_subdomains_only() {
        let allowed = patterns(&["*.vercel.app"]);

        assert!(host_is_allowed("deck.vercel.app", &allowed));
        assert!(host_is_allowed("a.b.vercel.app", &allowed));
        assert!(host_is_allowed("DECK.VERCEL.APP", &allowed));
        assert!(!host_is_allowed("vercel.app", &allowed));
        assert!(!host_is_allowed("evilvercel.app", &allowed));
        assert!(!host_is_allowed("deck.vercel.app.evil.com", &allowed));
    }

    #[test]
    fn test_exact_and_star_patterns() {
        let allowed = patterns(&["localhost", "127.0.0.1"]);

        assert!(host_is_allowed("localhost", &allowed));
        assert!(host_is_allowed("127.0.0.1", &allowed));
        assert!(!host_is_allowed("example.com", &allowed));

        assert!(host_is_allowed("anything.test", &patterns(&["*"])));
        assert!(!host_is_allowed("anything.test", &[]));
    }
}
