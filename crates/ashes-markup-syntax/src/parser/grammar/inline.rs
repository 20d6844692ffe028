//! Inline grammar rules.
//!
//! Inline parsing works within a bound expressed as a `remaining()` value:
//! the end of the line for block content, the position of the closing
//! delimiter for emphasis content. No rule consumes past its bound.
//!
//! Directives and bare URLs are atomic: their tokens are never read as
//! emphasis or dividers.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::emphasis;

/// Parse inline content up to (not including) the end of the current line.
pub(super) fn inline_until_newline(p: &mut Parser<'_, '_>) {
    let stop = line_stop(p);
    inline_until(p, stop);
}

/// The `remaining()` value at the NEWLINE or EOF ending the current line.
fn line_stop(p: &Parser<'_, '_>) -> usize {
    let mut i = 0;
    while !matches!(p.nth(i), SyntaxKind::NEWLINE | SyntaxKind::EOF) {
        i += 1;
    }
    p.remaining() - i
}

/// Parse inline elements until `remaining()` drops to `stop`.
pub(super) fn inline_until(p: &mut Parser<'_, '_>, stop: usize) {
    while p.remaining() > stop {
        inline_element(p, stop);
    }
}

/// Parse one inline element. Always consumes at least one token.
fn inline_element(p: &mut Parser<'_, '_>, stop: usize) {
    match p.current() {
        SyntaxKind::LBRACKET => match directive_len(p, 0, stop) {
            Some(len) => directive(p, len),
            None => p.bump(),
        },
        SyntaxKind::TEXT => match url_len(p, 0, stop) {
            Some(len) => url(p, len),
            None => p.bump(),
        },
        SyntaxKind::STAR => emphasis::emphasis(p, stop),
        SyntaxKind::DASH
            if p.prev() == SyntaxKind::WHITESPACE && p.nth(1) == SyntaxKind::WHITESPACE =>
        {
            divider(p)
        }
        _ => p.bump(),
    }
}

/// Token length of a closed `[[...]]` directive starting `i` tokens ahead.
///
/// The directive must close on the same line before `stop`, and may not
/// contain another `[[`. With `[[[` the directive starts one bracket later.
pub(super) fn directive_len(p: &Parser<'_, '_>, i: usize, stop: usize) -> Option<usize> {
    if p.nth(i) != SyntaxKind::LBRACKET
        || p.nth(i + 1) != SyntaxKind::LBRACKET
        || p.nth(i + 2) == SyntaxKind::LBRACKET
    {
        return None;
    }

    let limit = p.remaining().saturating_sub(stop);
    let mut j = i + 2;
    while j + 1 < limit {
        match (p.nth(j), p.nth(j + 1)) {
            (SyntaxKind::RBRACKET, SyntaxKind::RBRACKET) => return Some(j + 2 - i),
            (SyntaxKind::LBRACKET, SyntaxKind::LBRACKET) => return None,
            (SyntaxKind::NEWLINE | SyntaxKind::EOF, _) => return None,
            _ => j += 1,
        }
    }
    None
}

/// Parse a `[[...]]` directive of known token length.
///
/// The content is kept as raw tokens; what it means (link, image, card code)
/// is decided after parsing.
fn directive(p: &mut Parser<'_, '_>, len: usize) {
    let m = p.start();

    p.bump_n(2, SyntaxKind::DIRECTIVE_OPEN);
    for _ in 0..len.saturating_sub(4) {
        p.bump();
    }
    p.bump_n(2, SyntaxKind::DIRECTIVE_CLOSE);

    m.complete(p, SyntaxKind::DIRECTIVE);
}

/// Token length of a bare URL whose scheme is in the TEXT token `i` ahead.
///
/// The URL runs until whitespace, a line end, a bracket or `>`, as long as
/// it stays before `stop`.
pub(super) fn url_len(p: &Parser<'_, '_>, i: usize, stop: usize) -> Option<usize> {
    if p.nth(i) != SyntaxKind::TEXT || !has_scheme(p.nth_text(i)) {
        return None;
    }

    let limit = p.remaining().saturating_sub(stop);
    let mut j = i + 1;
    while j < limit
        && matches!(
            p.nth(j),
            SyntaxKind::TEXT | SyntaxKind::STAR | SyntaxKind::TILDE | SyntaxKind::DASH
        )
    {
        j += 1;
    }
    Some(j - i)
}

fn has_scheme(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("http://") || lower.contains("https://")
}

/// Parse a bare URL of known token length.
fn url(p: &mut Parser<'_, '_>, len: usize) {
    let m = p.start();
    for _ in 0..len {
        p.bump();
    }
    m.complete(p, SyntaxKind::URL);
}

/// A `-` standing alone between spaces.
fn divider(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump();
    m.complete(p, SyntaxKind::DIVIDER);
}
