//! # ashes-markup-engine
//!
//! Turns the markup used in Ashes forum posts and card text into sanitized
//! HTML.
//!
//! ## Pipeline
//!
//! ```text
//! Raw Text → escape_html → ashes_markup_syntax::parse → lower → Document
//!          → [effect::augment] → render_document → HTML
//! ```
//!
//! 1. [`escape`]: `& < " '` become entities before anything else happens,
//!    so no tag in the input can survive.
//! 2. The syntax crate builds a lossless tree: blockquotes, `* ` and `~ `
//!    lists, paragraphs, `[[...]]` directives, emphasis runs, dividers.
//! 3. [`document`]: the tree is lowered into typed blocks and inline
//!    segments. [`inline`] decides what each directive is (link, image,
//!    card code) and finds bare URLs.
//! 4. [`effect`]: card effect text only; lists become effect boxes and
//!    ability names are bolded.
//! 5. [`render`]: one pass writes the HTML.
//!
//! ## Quick Start
//!
//! ```
//! use ashes_markup_engine::{format, format_effect, FormatOptions};
//!
//! assert_eq!(
//!     format("Roll [[fire]]", FormatOptions::default()),
//!     r#"Roll <span class="phg-fire-power"><span class="alt-text">[[fire]]</span></span>"#
//! );
//!
//! assert_eq!(
//!     format_effect("* Ability: Draw a card", false),
//!     r#"<div class="inexhaustible-effects"><div><b>Ability:</b> Draw a card</div></div>"#
//! );
//! ```

pub mod document;
pub mod effect;
pub mod error;
pub mod escape;
pub mod formatter;
pub mod inline;
pub mod render;

pub use document::{BlockNode, Document, EffectKind, Inline, InlineSegment};
pub use error::MarkupError;
pub use escape::escape_html;
pub use formatter::{FormatOptions, Formatter, format, format_effect};
pub use inline::{DEFAULT_DICE, DEFAULT_SITE_DOMAIN, InlineResolver};
pub use render::render_document;
