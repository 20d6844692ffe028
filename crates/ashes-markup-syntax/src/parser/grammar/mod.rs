//! # Grammar Rules
//!
//! Each function takes a `&mut Parser` and uses its methods to inspect the
//! current token, consume tokens, and build tree structure with markers.
//!
//! ## Module Structure
//!
//! - [`block`] - Line-level structure (blockquotes, lists, paragraphs)
//! - [`inline`] - Directives, dividers and plain text within a line
//! - [`emphasis`] - Asterisk runs: italic, bold and their mixed forms
//!
//! ## Error Recovery
//!
//! There is no invalid input. Every rule decides by lookahead whether its
//! construct is complete (a closed `[[...]]`, a paired emphasis run) and
//! otherwise consumes the leading token as plain text, so the tree always
//! covers every input byte.

mod block;
mod emphasis;
mod inline;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root document.
pub fn root(p: &mut Parser<'_, '_>) {
    let m = p.start();
    block::blocks(p, block::Container::Root);
    m.complete(p, SyntaxKind::ROOT);
}
