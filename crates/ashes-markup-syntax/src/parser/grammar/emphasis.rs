//! Emphasis grammar.
//!
//! Asterisk runs pair up within a single line:
//!
//! | Opener | Closer | Node |
//! |--------|--------|------|
//! | `*` | first single `*` | `EMPHASIS` |
//! | `**` | first run of two or more | `STRONG` |
//! | `***` | `*` then later `**` | `STRONG` wrapping a leading `EMPHASIS` |
//! | `***` | `**` then later `*` | `EMPHASIS` wrapping a leading `STRONG` |
//! | `***` | run of three or more | `STRONG_EMPHASIS` |
//!
//! A single `*` with whitespace (or the line edge) on both sides never opens
//! or closes anything. Runs longer than three, and openers with no closer,
//! give up their first asterisk as literal text and the rest is retried.
//! Directives and bare URLs are skipped whole while looking for a closer.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

use super::inline;

/// Parse emphasis starting at the current `*`. Always consumes at least one token.
pub(super) fn emphasis(p: &mut Parser<'_, '_>, stop: usize) {
    let run = star_run(p, 0, stop);
    if run == 1 && is_lone(p, 0) {
        p.bump();
        return;
    }

    let paired = match run {
        1 => italic(p, stop),
        2 => bold(p, stop),
        3 => mixed(p, stop),
        _ => false,
    };

    if !paired {
        p.bump();
    }
}

/// `*text*`
fn italic(p: &mut Parser<'_, '_>, stop: usize) -> bool {
    let Some((close, _)) = find_run(p, 1, stop, |run| run == 1) else {
        return false;
    };
    let start = p.remaining();

    let m = p.start();
    p.bump_n(1, SyntaxKind::EMPHASIS_DELIMITER);
    inline::inline_until(p, start - close);
    p.bump_n(1, SyntaxKind::EMPHASIS_DELIMITER);
    m.complete(p, SyntaxKind::EMPHASIS);
    true
}

/// `**text**`
fn bold(p: &mut Parser<'_, '_>, stop: usize) -> bool {
    let Some((close, _)) = find_run(p, 2, stop, |run| run >= 2) else {
        return false;
    };
    let start = p.remaining();

    let m = p.start();
    p.bump_n(2, SyntaxKind::EMPHASIS_DELIMITER);
    inline::inline_until(p, start - close);
    p.bump_n(2, SyntaxKind::EMPHASIS_DELIMITER);
    m.complete(p, SyntaxKind::STRONG);
    true
}

/// `***...`: the first run after the opener decides the nesting.
fn mixed(p: &mut Parser<'_, '_>, stop: usize) -> bool {
    let Some((mid, mid_run)) = find_run(p, 3, stop, |_| true) else {
        return false;
    };
    let start = p.remaining();

    match mid_run {
        1 => {
            let Some((close, _)) = find_run(p, mid + 1, stop, |run| run >= 2) else {
                return false;
            };
            let outer = p.start();
            p.bump_n(2, SyntaxKind::EMPHASIS_DELIMITER);
            let inner = p.start();
            p.bump_n(1, SyntaxKind::EMPHASIS_DELIMITER);
            inline::inline_until(p, start - mid);
            p.bump_n(1, SyntaxKind::EMPHASIS_DELIMITER);
            inner.complete(p, SyntaxKind::EMPHASIS);
            inline::inline_until(p, start - close);
            p.bump_n(2, SyntaxKind::EMPHASIS_DELIMITER);
            outer.complete(p, SyntaxKind::STRONG);
        }
        2 => {
            let Some((close, _)) = find_run(p, mid + 2, stop, |_| true) else {
                return false;
            };
            let outer = p.start();
            p.bump_n(1, SyntaxKind::EMPHASIS_DELIMITER);
            let inner = p.start();
            p.bump_n(2, SyntaxKind::EMPHASIS_DELIMITER);
            inline::inline_until(p, start - mid);
            p.bump_n(2, SyntaxKind::EMPHASIS_DELIMITER);
            inner.complete(p, SyntaxKind::STRONG);
            inline::inline_until(p, start - close);
            p.bump_n(1, SyntaxKind::EMPHASIS_DELIMITER);
            outer.complete(p, SyntaxKind::EMPHASIS);
        }
        _ => {
            let m = p.start();
            p.bump_n(3, SyntaxKind::EMPHASIS_DELIMITER);
            inline::inline_until(p, start - mid);
            p.bump_n(3, SyntaxKind::EMPHASIS_DELIMITER);
            m.complete(p, SyntaxKind::STRONG_EMPHASIS);
        }
    }
    true
}

/// Number of consecutive `*` tokens starting `i` ahead, within `stop`.
fn star_run(p: &Parser<'_, '_>, i: usize, stop: usize) -> usize {
    let limit = p.remaining().saturating_sub(stop);
    let mut n = 0;
    while i + n < limit && p.nth(i + n) == SyntaxKind::STAR {
        n += 1;
    }
    n
}

/// A single `*` `i` tokens ahead with whitespace or a line edge on both sides.
fn is_lone(p: &Parser<'_, '_>, i: usize) -> bool {
    let before = match i {
        0 => p.prev(),
        _ => p.nth(i - 1),
    };
    let after = p.nth(i + 1);
    is_space_or_edge(before) && is_space_or_edge(after)
}

fn is_space_or_edge(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::WHITESPACE | SyntaxKind::NEWLINE | SyntaxKind::EOF
    )
}

/// Find the first star run at or after `from` (relative to the current
/// token) that `accept` takes, returning its offset and length.
///
/// Stops at the end of the line or at `stop`. Lone stars never match.
fn find_run(
    p: &Parser<'_, '_>,
    from: usize,
    stop: usize,
    accept: impl Fn(usize) -> bool,
) -> Option<(usize, usize)> {
    let limit = p.remaining().saturating_sub(stop);
    let mut i = from;

    while i < limit {
        match p.nth(i) {
            SyntaxKind::NEWLINE | SyntaxKind::EOF => return None,
            SyntaxKind::STAR => {
                let run = star_run(p, i, stop);
                let lone = run == 1 && is_lone(p, i);
                if !lone && accept(run) {
                    return Some((i, run));
                }
                i += run;
            }
            SyntaxKind::LBRACKET => i += inline::directive_len(p, i, stop).unwrap_or(1),
            SyntaxKind::TEXT => i += inline::url_len(p, i, stop).unwrap_or(1),
            _ => i += 1,
        }
    }
    None
}
