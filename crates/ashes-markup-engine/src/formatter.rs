//! The formatting entry points.

use std::sync::OnceLock;

use crate::document::{Document, lower};
use crate::effect;
use crate::error::MarkupError;
use crate::escape::escape_html;
use crate::inline::InlineResolver;
use crate::render::render_document;

/// Per-call formatting switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Wrap a lone paragraph in `<p>` instead of returning it bare.
    pub ensure_paragraphs: bool,
    /// Mark card references as legacy cards.
    pub legacy: bool,
}

/// Converts markup to sanitized HTML for one site configuration.
///
/// Immutable once built and safe to share between threads. Formatting is
/// total: any string produces HTML, unrecognised markup stays as text.
///
/// Output is not meant to be fed back in: formatting already formatted HTML
/// escapes it a second time.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    resolver: InlineResolver,
}

impl Formatter {
    /// Build a formatter for `site_domain` (whose links count as internal)
    /// recognising the given dice names.
    pub fn new<I, S>(site_domain: &str, dice: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let resolver = InlineResolver::new(site_domain, dice)?;
        log::debug!(
            "Formatter for {} with dice {:?}",
            resolver.links().site_domain(),
            resolver.card_codes().dice()
        );
        Ok(Self { resolver })
    }

    pub fn resolver(&self) -> &InlineResolver {
        &self.resolver
    }

    /// Escape and parse `text` into the typed document tree.
    pub fn parse(&self, text: &str, legacy: bool) -> Document {
        let escaped = escape_html(text);
        let tree = ashes_markup_syntax::parse(&escaped);
        log::trace!("Parsed {} bytes into {:?}", escaped.len(), tree);
        lower(&tree, &self.resolver, legacy)
    }

    /// Format a forum post or other general text.
    pub fn format(&self, text: &str, options: FormatOptions) -> String {
        let document = self.parse(text, options.legacy);
        render_document(&document, options.ensure_paragraphs)
    }

    /// Format card effect text: always in paragraphs, lists as effect boxes,
    /// ability names in bold.
    pub fn format_effect(&self, text: &str, legacy: bool) -> String {
        let document = effect::augment(self.parse(text, legacy));
        render_document(&document, true)
    }
}

fn default_formatter() -> &'static Formatter {
    static DEFAULT: OnceLock<Formatter> = OnceLock::new();
    DEFAULT.get_or_init(Formatter::default)
}

/// [`Formatter::format`] with the default site configuration.
///
/// ```
/// use ashes_markup_engine::{format, FormatOptions};
///
/// assert_eq!(format("**Hello**", FormatOptions::default()), "<b>Hello</b>");
/// ```
pub fn format(text: &str, options: FormatOptions) -> String {
    default_formatter().format(text, options)
}

/// [`Formatter::format_effect`] with the default site configuration.
pub fn format_effect(text: &str, legacy: bool) -> String {
    default_formatter().format_effect(text, legacy)
}
