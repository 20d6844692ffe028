//! Links and images, in `[[...]]` directives and as bare URLs.

use std::sync::OnceLock;

use regex::Regex;

use crate::document::{Inline, InlineSegment};
use crate::error::MarkupError;

/// Domain whose links are treated as internal unless configured otherwise.
pub const DEFAULT_SITE_DOMAIN: &str = "ashes.live";

/// `[*][display text ]url` where the URL may omit its scheme.
fn directive_regex() -> &'static Regex {
    static DIRECTIVE_LINK: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE_LINK.get_or_init(|| {
        Regex::new(
            r"(?i)^(\*)?(?:(.+?)\s+)?((?:https?://)?(?:[a-z0-9-]+\.)+[a-z]{2,}(?::\d+)?(?:/\S*)?)$",
        )
        .expect("Invalid link directive regex")
    })
}

fn bare_url_regex() -> &'static Regex {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    URL_REGEX.get_or_init(|| Regex::new(r"(?i)https?://[^\s<>\[\]]+").expect("Invalid URL regex"))
}

/// Resolves URLs against the site domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkResolver {
    site_domain: String,
}

impl Default for LinkResolver {
    fn default() -> Self {
        Self {
            site_domain: DEFAULT_SITE_DOMAIN.to_string(),
        }
    }
}

impl LinkResolver {
    pub fn new(site_domain: &str) -> Result<Self, MarkupError> {
        let site_domain = site_domain.trim();
        if site_domain.is_empty() {
            return Err(MarkupError::EmptySiteDomain);
        }
        Ok(Self {
            site_domain: site_domain.to_ascii_lowercase(),
        })
    }

    pub fn site_domain(&self) -> &str {
        &self.site_domain
    }

    /// True when the URL's host is the site domain, optionally followed by
    /// a path, query or fragment.
    pub fn is_internal(&self, url: &str) -> bool {
        let rest = strip_scheme(url);
        let Some(host) = rest.get(..self.site_domain.len()) else {
            return false;
        };
        host.eq_ignore_ascii_case(&self.site_domain)
            && matches!(
                rest[self.site_domain.len()..].chars().next(),
                None | Some('/' | '?' | '#')
            )
    }

    /// Fully qualified href for a URL as typed, and whether it is internal.
    ///
    /// Internal links always use https. External links without a scheme get
    /// `http://`.
    pub fn href(&self, url: &str) -> (String, bool) {
        if self.is_internal(url) {
            (format!("https://{}", strip_scheme(url)), true)
        } else if has_scheme(url) {
            (url.to_string(), false)
        } else {
            (format!("http://{url}"), false)
        }
    }

    /// Resolve directive content as a link, or as an image when it starts
    /// with `*`. Returns `None` when the content does not end in a URL.
    pub fn resolve_directive(&self, content: &str) -> Option<InlineSegment> {
        let caps = directive_regex().captures(content.trim())?;
        let url = caps.get(3)?.as_str();
        let text = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|text| !text.is_empty());
        let (href, internal) = self.href(url);

        let segment = if caps.get(1).is_some() {
            InlineSegment::Image {
                href,
                alt: text.unwrap_or_default().to_string(),
                internal,
            }
        } else {
            InlineSegment::Link {
                href,
                text: text.unwrap_or(url).to_string(),
                internal,
            }
        };
        Some(segment)
    }

    /// Split plain text into text and links for every `http(s)://` URL in it.
    pub fn split_bare_urls(&self, text: &str, out: &mut Inline) {
        let mut last = 0;

        for found in bare_url_regex().find_iter(text) {
            let url = trim_url_end(found.as_str());
            if strip_scheme(url).is_empty() {
                continue;
            }

            let start = found.start();
            if start > last {
                out.push(InlineSegment::Text(text[last..start].to_string()));
            }
            let (href, internal) = self.href(url);
            out.push(InlineSegment::Link {
                href,
                text: url.to_string(),
                internal,
            });
            last = start + url.len();
        }

        if last < text.len() {
            out.push(InlineSegment::Text(text[last..].to_string()));
        }
    }
}

fn strip_scheme(url: &str) -> &str {
    for scheme in ["https://", "http://"] {
        if let Some(prefix) = url.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                return &url[scheme.len()..];
            }
        }
    }
    url
}

fn has_scheme(url: &str) -> bool {
    strip_scheme(url).len() != url.len()
}

/// Drop sentence punctuation and escaped quotes from the end of a bare URL.
fn trim_url_end(url: &str) -> &str {
    let mut url = url;
    loop {
        if let Some(stripped) = ["&quot;", "&#x27;", "&#39;"]
            .iter()
            .find_map(|entity| url.strip_suffix(entity))
        {
            url = stripped;
            continue;
        }
        match url.strip_suffix(['.', ',', ';', ':', '!', '?', ')']) {
            Some(stripped) => url = stripped,
            None => return url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn link(href: &str, text: &str, internal: bool) -> InlineSegment {
        InlineSegment::Link {
            href: href.to_string(),
            text: text.to_string(),
            internal,
        }
    }

    fn text(s: &str) -> InlineSegment {
        InlineSegment::Text(s.to_string())
    }

    #[rstest]
    #[case::internal_with_text(
        "Decks https://ashes.live/decks/",
        link("https://ashes.live/decks/", "Decks", true)
    )]
    #[case::internal_http_upgraded("http://ashes.live", link("https://ashes.live", "http://ashes.live", true))]
    #[case::internal_without_scheme("ashes.live/cards", link("https://ashes.live/cards", "ashes.live/cards", true))]
    #[case::internal_any_case("ASHES.LIVE/x", link("https://ASHES.LIVE/x", "ASHES.LIVE/x", true))]
    #[case::external_without_scheme("example.com", link("http://example.com", "example.com", false))]
    #[case::external_keeps_scheme(
        "Docs https://example.com:8080/a?b",
        link("https://example.com:8080/a?b", "Docs", false)
    )]
    #[case::lookalike_domain(
        "ashes.live.example.com",
        link("http://ashes.live.example.com", "ashes.live.example.com", false)
    )]
    fn resolves_link_directives(#[case] content: &str, #[case] expected: InlineSegment) {
        let resolver = LinkResolver::default();
        assert_eq!(resolver.resolve_directive(content), Some(expected));
    }

    #[test]
    fn star_makes_image_with_alt_text() {
        let resolver = LinkResolver::default();
        assert_eq!(
            resolver.resolve_directive("*Deck art https://cdn.example.com/art.png"),
            Some(InlineSegment::Image {
                href: "https://cdn.example.com/art.png".to_string(),
                alt: "Deck art".to_string(),
                internal: false,
            })
        );
        assert_eq!(
            resolver.resolve_directive("*https://ashes.live/a.png"),
            Some(InlineSegment::Image {
                href: "https://ashes.live/a.png".to_string(),
                alt: String::new(),
                internal: true,
            })
        );
    }

    #[rstest]
    #[case::card_name("Hammer Knight")]
    #[case::dice("fire:power")]
    #[case::no_tld("http://localhost")]
    #[case::empty("")]
    fn non_urls_are_not_links(#[case] content: &str) {
        assert_eq!(LinkResolver::default().resolve_directive(content), None);
    }

    #[test]
    fn configured_domain_is_internal() {
        let resolver = LinkResolver::new(" Example.org ").unwrap();
        assert_eq!(resolver.site_domain(), "example.org");
        assert!(resolver.is_internal("https://example.org/x"));
        assert!(!resolver.is_internal("https://ashes.live/x"));
    }

    #[test]
    fn empty_domain_is_rejected() {
        assert_eq!(LinkResolver::new("  "), Err(MarkupError::EmptySiteDomain));
    }

    #[rstest]
    #[case::trailing_period(
        "see https://example.com/a.",
        vec![text("see "), link("https://example.com/a", "https://example.com/a", false), text(".")]
    )]
    #[case::in_parens(
        "(https://example.com)",
        vec![text("("), link("https://example.com", "https://example.com", false), text(")")]
    )]
    #[case::escaped_quotes(
        "&quot;https://ashes.live/x&quot;",
        vec![text("&quot;"), link("https://ashes.live/x", "https://ashes.live/x", true), text("&quot;")]
    )]
    #[case::two_urls(
        "http://a.com and http://b.com",
        vec![
            link("http://a.com", "http://a.com", false),
            text(" and "),
            link("http://b.com", "http://b.com", false),
        ]
    )]
    #[case::scheme_only("http:// nothing", vec![text("http:// nothing")])]
    #[case::no_url("plain text", vec![text("plain text")])]
    fn splits_bare_urls(#[case] input: &str, #[case] expected: Vec<InlineSegment>) {
        let mut out = Vec::new();
        LinkResolver::default().split_bare_urls(input, &mut out);
        assert_eq!(out, expected);
    }
}
