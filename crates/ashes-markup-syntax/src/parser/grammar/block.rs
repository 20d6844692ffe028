//! Block-level grammar rules.
//!
//! Blocks are line-oriented. What a line starts decides its block:
//!
//! | Line start | Block |
//! |------------|-------|
//! | `> ` or `>` alone | blockquote (top level only) |
//! | `* ` | unordered list item |
//! | `~ ` | ordered list item |
//! | blank | separator |
//! | anything else | paragraph text |
//!
//! Inside a blockquote every line carries a `>` prefix that is consumed as a
//! `QUOTE_PREFIX` token before the line is classified, so lists and
//! paragraphs parse the same way in both containers.

use crate::parser::{CompletedMarker, Parser};
use crate::syntax_kind::SyntaxKind;

use super::inline;

/// The block container a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Container {
    Root,
    Quote,
}

/// What the content of a line starts, after its container prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStart {
    Blank,
    Quote,
    Item(SyntaxKind),
    Text,
}

/// Parse blocks until the container's lines run out.
///
/// Expects to be at the start of a line's content (prefix already consumed)
/// and returns at the NEWLINE or EOF that ends the container.
pub(super) fn blocks(p: &mut Parser<'_, '_>, container: Container) {
    loop {
        match line_start(p, 0, container) {
            LineStart::Blank => {
                p.eat(SyntaxKind::WHITESPACE);
            }
            LineStart::Quote => blockquote(p),
            LineStart::Item(marker) => list(p, container, marker),
            LineStart::Text => paragraph(p, container),
        }

        if !next_line(p, container) {
            break;
        }
    }
}

/// Classify the line content starting `i` tokens ahead.
fn line_start(p: &Parser<'_, '_>, i: usize, container: Container) -> LineStart {
    match p.nth(i) {
        SyntaxKind::NEWLINE | SyntaxKind::EOF => LineStart::Blank,
        SyntaxKind::WHITESPACE if is_line_end(p.nth(i + 1)) => LineStart::Blank,
        SyntaxKind::GT
            if container == Container::Root
                && (p.nth(i + 1) == SyntaxKind::WHITESPACE || is_line_end(p.nth(i + 1))) =>
        {
            LineStart::Quote
        }
        marker @ (SyntaxKind::STAR | SyntaxKind::TILDE)
            if p.nth(i + 1) == SyntaxKind::WHITESPACE =>
        {
            LineStart::Item(marker)
        }
        _ => LineStart::Text,
    }
}

fn is_line_end(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::NEWLINE | SyntaxKind::EOF)
}

/// Number of prefix tokens the container requires on the line starting `i`
/// tokens ahead, or `None` if that line is outside the container.
fn prefix_len(p: &Parser<'_, '_>, i: usize, container: Container) -> Option<usize> {
    match container {
        Container::Root => Some(0),
        Container::Quote => match (p.nth(i), p.nth(i + 1)) {
            (SyntaxKind::GT, SyntaxKind::WHITESPACE) => Some(2),
            (SyntaxKind::GT, next) if is_line_end(next) => Some(1),
            _ => None,
        },
    }
}

/// Move from a NEWLINE to the content of the next line of the container.
///
/// Returns false (consuming nothing) at EOF or when the next line does not
/// belong to the container.
fn next_line(p: &mut Parser<'_, '_>, container: Container) -> bool {
    if !p.at(SyntaxKind::NEWLINE) {
        return false;
    }
    match prefix_len(p, 1, container) {
        Some(n) => {
            p.bump();
            p.bump_n(n, SyntaxKind::QUOTE_PREFIX);
            true
        }
        None => false,
    }
}

/// Parse a blockquote: a run of `>`-prefixed lines holding paragraphs and lists.
fn blockquote(p: &mut Parser<'_, '_>) {
    let m = p.start();

    let n = prefix_len(p, 0, Container::Quote).unwrap_or(1);
    p.bump_n(n, SyntaxKind::QUOTE_PREFIX);
    blocks(p, Container::Quote);

    m.complete(p, SyntaxKind::BLOCK_QUOTE);
}

/// Parse a list of items sharing one marker.
///
/// Items separated only by blank lines stay in the same list. A different
/// marker, or any other line, ends it.
fn list(p: &mut Parser<'_, '_>, container: Container, marker: SyntaxKind) {
    let kind = match marker {
        SyntaxKind::TILDE => SyntaxKind::ORDERED_LIST,
        _ => SyntaxKind::UNORDERED_LIST,
    };

    let first = list_item(p);
    let m = first.precede(p);

    while next_item_follows(p, container, marker) {
        skip_to_item(p, container);
        list_item(p);
    }

    m.complete(p, kind);
}

/// Parse a single `* ` or `~ ` item up to the end of its line.
fn list_item(p: &mut Parser<'_, '_>) -> CompletedMarker {
    let m = p.start();

    p.bump_n(2, SyntaxKind::LIST_MARKER);
    inline::inline_until_newline(p);

    m.complete(p, SyntaxKind::LIST_ITEM)
}

/// Look past the current NEWLINE and any blank lines for an item with the
/// same marker.
fn next_item_follows(p: &Parser<'_, '_>, container: Container, marker: SyntaxKind) -> bool {
    let mut i = 0;

    while p.nth(i) == SyntaxKind::NEWLINE {
        let Some(n) = prefix_len(p, i + 1, container) else {
            return false;
        };
        let start = i + 1 + n;

        match line_start(p, start, container) {
            LineStart::Item(next) if next == marker => return true,
            LineStart::Blank => {
                i = if p.nth(start) == SyntaxKind::WHITESPACE {
                    start + 1
                } else {
                    start
                };
            }
            _ => return false,
        }
    }

    false
}

/// Consume the line breaks, prefixes and blank lines before the next item.
fn skip_to_item(p: &mut Parser<'_, '_>, container: Container) {
    while p.at(SyntaxKind::NEWLINE) {
        let n = prefix_len(p, 1, container).unwrap_or(0);
        p.bump();
        p.bump_n(n, SyntaxKind::QUOTE_PREFIX);

        if matches!(line_start(p, 0, container), LineStart::Item(_)) {
            break;
        }
        p.eat(SyntaxKind::WHITESPACE);
    }
}

/// Parse a paragraph: consecutive text lines of the same container.
///
/// The NEWLINE tokens between its lines stay inside the paragraph (they are
/// its line breaks); the one ending its last line does not.
fn paragraph(p: &mut Parser<'_, '_>, container: Container) {
    let m = p.start();

    loop {
        inline::inline_until_newline(p);

        if !p.at(SyntaxKind::NEWLINE) {
            break;
        }
        let Some(n) = prefix_len(p, 1, container) else {
            break;
        };
        if line_start(p, 1 + n, container) != LineStart::Text {
            break;
        }

        p.bump();
        p.bump_n(n, SyntaxKind::QUOTE_PREFIX);
    }

    m.complete(p, SyntaxKind::PARAGRAPH);
}
