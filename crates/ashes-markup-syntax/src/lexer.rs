//! # Lexer - Tokenizing Markup Source
//!
//! This module provides the first stage of parsing: breaking (already escaped)
//! source text into tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token**:
//!
//! ```
//! use ashes_markup_syntax::lexer::lex;
//!
//! let input = "* [[fire]] or **more**\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are minimal and context-free. The lexer doesn't know whether `*`
//! opens a list item, an emphasis run or is a literal asterisk, or whether
//! `[[` opens a directive that will ever be closed. That's the parser's job.
//!
//! - `>` → `GT` (blockquote lines)
//! - `*` → `STAR` (unordered list items, emphasis)
//! - `~` → `TILDE` (ordered list items)
//! - `-` → `DASH` (dividers)
//! - `[`, `]` → bracket tokens (directives)
//!
//! Everything else becomes `TEXT`, grouped into runs. URLs are not tokens:
//! they can contain any of the characters above and are recognized later in
//! plain-text runs.

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// Token kinds produced by the Logos lexer.
///
/// This enum exists separately from [`SyntaxKind`] because Logos needs to
/// derive on it. Each variant maps to a corresponding `SyntaxKind` token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// `>` for blockquotes
    #[token(">")]
    Gt,

    /// `*` for list items and emphasis
    #[token("*")]
    Star,

    /// `~` for ordered list items
    #[token("~")]
    Tilde,

    /// `-` for dividers
    #[token("-")]
    Dash,

    /// `[` for directives
    #[token("[")]
    LBracket,

    /// `]` for directives
    #[token("]")]
    RBracket,

    /// Plain text - anything not matched by other rules
    #[regex(r"[^\s\[\]>*~-]+")]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Gt => SyntaxKind::GT,
            TokenKind::Star => SyntaxKind::STAR,
            TokenKind::Tilde => SyntaxKind::TILDE,
            TokenKind::Dash => SyntaxKind::DASH,
            TokenKind::LBracket => SyntaxKind::LBRACKET,
            TokenKind::RBracket => SyntaxKind::RBRACKET,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unrecognized character (lone `\r`, non-ASCII whitespace) - treat as TEXT
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
