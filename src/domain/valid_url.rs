//! Syntactic URL acceptance.
//!
//! A submitted string is accepted when it parses as an absolute URL whose
//! scheme is exactly `http` or `https` and whose host is non-empty. Accepted
//! input is kept verbatim: nothing is lowercased, re-encoded or stripped.

use std::fmt;
use url::{Host, Url};

/// Longest accepted input, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a string is rejected as a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL is {0} bytes long (max {MAX_URL_LENGTH})")]
    TooLong(usize),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported scheme '{0}': only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("URL has no hostname")]
    MissingHost,

    #[error("Hostname '{0}' does not resolve")]
    Unresolvable(String),
}

/// A URL string that passed syntactic validation.
///
/// Only constructible through [`ValidUrl::parse`], so holding one proves the
/// check happened. [`ValidUrl::as_str`] returns the input exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUrl {
    raw: String,
    host: String,
}

impl ValidUrl {
    /// Checks `input` is an absolute http/https URL with a hostname.
    ///
    /// # Errors
    ///
    /// - [`UrlValidationError::Empty`] / [`UrlValidationError::TooLong`] on length
    /// - [`UrlValidationError::InvalidFormat`] if `input` does not parse as an absolute URL
    /// - [`UrlValidationError::UnsupportedScheme`] for anything but `http` and `https`
    /// - [`UrlValidationError::MissingHost`] if the host is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use link_shortener::domain::valid_url::ValidUrl;
    ///
    /// let url = ValidUrl::parse("https://www.freecodecamp.org").unwrap();
    /// assert_eq!(url.as_str(), "https://www.freecodecamp.org");
    /// assert_eq!(url.host(), "www.freecodecamp.org");
    ///
    /// assert!(ValidUrl::parse("ftp://example.com").is_err());
    /// assert!(ValidUrl::parse("not a url").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, UrlValidationError> {
        if input.is_empty() {
            return Err(UrlValidationError::Empty);
        }
        if input.len() > MAX_URL_LENGTH {
            return Err(UrlValidationError::TooLong(input.len()));
        }

        let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
        }

        let host = match url.host() {
            Some(Host::Domain(d)) if !d.is_empty() => d.to_string(),
            Some(Host::Ipv4(ip)) => ip.to_string(),
            Some(Host::Ipv6(ip)) => ip.to_string(),
            _ => return Err(UrlValidationError::MissingHost),
        };

        Ok(Self {
            raw: input.to_string(),
            host,
        })
    }

    /// The URL exactly as submitted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Hostname (or IP literal, without brackets) of the URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(ValidUrl::parse("http://example.com").is_ok());
        assert!(ValidUrl::parse("https://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_keeps_input_verbatim() {
        let url = ValidUrl::parse("https://EXAMPLE.COM:443/Path").unwrap();
        assert_eq!(url.as_str(), "https://EXAMPLE.COM:443/Path");
        assert_eq!(url.into_inner(), "https://EXAMPLE.COM:443/Path");
    }

    #[test]
    fn test_host_is_extracted() {
        let url = ValidUrl::parse("https://www.freecodecamp.org/news").unwrap();
        assert_eq!(url.host(), "www.freecodecamp.org");
    }

    #[test]
    fn test_ip_hosts() {
        assert_eq!(ValidUrl::parse("http://127.0.0.1:8080").unwrap().host(), "127.0.0.1");
        assert_eq!(ValidUrl::parse("http://[::1]/").unwrap().host(), "::1");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(ValidUrl::parse(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        for input in [
            "ftp://example.com",
            "javascript:alert(1)",
            "mailto:someone@example.com",
            "file:///etc/passwd",
            "data:text/plain,hello",
        ] {
            assert!(
                matches!(
                    ValidUrl::parse(input),
                    Err(UrlValidationError::UnsupportedScheme(_))
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        for input in ["not a url", "/relative/path", "example.com", "://missing"] {
            assert!(
                matches!(
                    ValidUrl::parse(input),
                    Err(UrlValidationError::InvalidFormat(_))
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(ValidUrl::parse("http://").is_err());
        assert!(ValidUrl::parse("https://:443/").is_err());
    }

    #[test]
    fn test_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            ValidUrl::parse(&long),
            Err(UrlValidationError::TooLong(_))
        ));
    }
}
