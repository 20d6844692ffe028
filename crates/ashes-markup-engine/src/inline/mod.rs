//! # Inline Resolution
//!
//! The parser only marks where a `[[...]]` directive is; this module decides
//! what it means. Alternatives are tried in order:
//!
//! 1. link or image ([`LinkResolver::resolve_directive`])
//! 2. card code ([`CardCodeTable::resolve`])
//! 3. neither: the caller keeps the directive as literal text
//!
//! Bare `http(s)://` URLs in plain text are turned into links here too.

mod card_codes;
mod links;

pub use card_codes::{CardCodeTable, DEFAULT_DICE, stub};
pub use links::{DEFAULT_SITE_DOMAIN, LinkResolver};

use crate::document::{Inline, InlineSegment};
use crate::error::MarkupError;

/// Site-specific resolution of directives and URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineResolver {
    links: LinkResolver,
    card_codes: CardCodeTable,
}

impl InlineResolver {
    pub fn new<I, S>(site_domain: &str, dice: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            links: LinkResolver::new(site_domain)?,
            card_codes: CardCodeTable::new(dice)?,
        })
    }

    pub fn links(&self) -> &LinkResolver {
        &self.links
    }

    pub fn card_codes(&self) -> &CardCodeTable {
        &self.card_codes
    }

    /// Resolve the content between `[[` and `]]`.
    pub fn resolve_directive(&self, content: &str, legacy: bool) -> Option<InlineSegment> {
        self.links
            .resolve_directive(content)
            .or_else(|| self.card_codes.resolve(content, legacy))
    }

    /// Append plain text to `out`, turning bare URLs into links.
    pub fn push_text(&self, text: &str, out: &mut Inline) {
        self.links.split_bare_urls(text, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn links_take_precedence_over_card_codes() {
        let resolver = InlineResolver::default();
        assert!(matches!(
            resolver.resolve_directive("Ashes ashes.live", false),
            Some(InlineSegment::Link { .. })
        ));
        assert!(matches!(
            resolver.resolve_directive("Ashes", false),
            Some(InlineSegment::CardReference { .. })
        ));
    }

    #[test]
    fn unresolvable_directive() {
        let resolver = InlineResolver::default();
        assert_eq!(resolver.resolve_directive("50% off!", false), None);
    }

    #[test]
    fn construction_validates_both_parts() {
        assert_eq!(
            InlineResolver::new("", DEFAULT_DICE),
            Err(MarkupError::EmptySiteDomain)
        );
        assert_eq!(
            InlineResolver::new("ashes.live", ["Fire"]),
            Err(MarkupError::InvalidDiceKeyword {
                keyword: "Fire".to_string()
            })
        );

        let resolver = InlineResolver::new("Example.org", ["astral"]).unwrap();
        assert_eq!(resolver.links().site_domain(), "example.org");
        assert!(resolver.card_codes().is_dice("astral"));
    }
}
