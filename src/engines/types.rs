//! Engine model and URL helpers

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use url::Url;

/// Placeholder substituted with the encoded query in URL templates
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Domain label used when a template's host cannot be determined
pub const FALLBACK_DOMAIN: &str = "custom";

/// A search engine definition, preset or custom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    /// Unique display name
    pub name: String,
    /// Either a prefix the encoded query is appended to, or a template
    /// containing one or more `{query}` placeholders
    pub url: String,
    /// Short domain shown next to the name
    pub domain: String,
}

impl Engine {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            domain: domain.into(),
        }
    }

    /// Whether the URL is a `{query}` template rather than a plain prefix
    pub fn is_template(&self) -> bool {
        self.url.contains(QUERY_PLACEHOLDER)
    }

    /// Build the search URL for an unencoded query
    pub fn search_url(&self, query: &str) -> String {
        let encoded = encode_query(query);
        if self.is_template() {
            self.url.replace(QUERY_PLACEHOLDER, &encoded)
        } else {
            format!("{}{}", self.url, encoded)
        }
    }
}

/// Percent-encode a query for inclusion in a URL.
///
/// Everything except ASCII alphanumerics and `-_.~` is escaped, so spaces
/// become `%20` rather than `+`.
pub fn encode_query(query: &str) -> Cow<'_, str> {
    urlencoding::encode(query)
}

/// Whether the input starts with an `http://` or `https://` scheme
pub fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Prefix `https://` unless an HTTP scheme is already present
pub fn with_default_scheme(input: &str) -> Cow<'_, str> {
    if has_http_scheme(input) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(format!("https://{}", input))
    }
}

/// Parse a URL template as an absolute URL with a host.
///
/// Placeholders are replaced with a sample value first.
pub fn parse_template(template: &str) -> Result<Url, String> {
    let sample = template.replace(QUERY_PLACEHOLDER, "test");
    let url = Url::parse(&with_default_scheme(&sample)).map_err(|e| e.to_string())?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err("missing host".to_string());
    }
    Ok(url)
}

/// Derive the display domain of a URL template: its hostname without a
/// leading `www.`, or [`FALLBACK_DOMAIN`] when it cannot be parsed.
pub fn domain_of(template: &str) -> String {
    match parse_template(template) {
        Ok(url) => url
            .host_str()
            .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
            .unwrap_or_else(|| FALLBACK_DOMAIN.to_string()),
        Err(_) => FALLBACK_DOMAIN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_prefix() {
        let engine = Engine::new("Bing", "https://www.bing.com/search?q=", "bing.com");
        assert!(!engine.is_template());
        assert_eq!(
            engine.search_url("hello world"),
            "https://www.bing.com/search?q=hello%20world"
        );
    }

    #[test]
    fn test_search_url_template_replaces_every_placeholder() {
        let engine = Engine::new("Dup", "https://a.com/{query}?again={query}", "a.com");
        assert_eq!(engine.search_url("c++"), "https://a.com/c%2B%2B?again=c%2B%2B");
    }

    #[test]
    fn test_default_scheme() {
        assert_eq!(with_default_scheme("example.com"), "https://example.com");
        assert_eq!(with_default_scheme("http://example.com"), "http://example.com");
        assert_eq!(with_default_scheme("HTTPS://example.com"), "HTTPS://example.com");
    }

    #[test]
    fn test_domain_of() {
        assert_eq!(domain_of("https://www.github.com/search?q={query}"), "github.com");
        assert_eq!(domain_of("docs.rs/releases/search?query={query}"), "docs.rs");
        assert_eq!(domain_of("https://exa mple.com/{query}"), FALLBACK_DOMAIN);
    }

    #[test]
    fn test_parse_template_rejects_bad_hosts() {
        assert!(parse_template("https://example.com/?q={query}").is_ok());
        assert!(parse_template("https://exa mple.com/?q={query}").is_err());
        assert!(parse_template("https://").is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let engine = Engine::new("a", "https://a.com/{query}", "a.com");
        let json = serde_json::to_string(&engine).unwrap();
        assert_eq!(json, r#"{"name":"a","url":"https://a.com/{query}","domain":"a.com"}"#);
    }
}
