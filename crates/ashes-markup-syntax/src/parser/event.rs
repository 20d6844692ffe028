//! # Parser Events
//!
//! The grammar never builds tree nodes itself. It appends events to a flat
//! list and the [`Sink`](super::sink::Sink) replays them into a Rowan tree:
//!
//! ```text
//! Start(PARAGRAPH)
//!   Token(TEXT)
//!   Start(STRONG)
//!     Token(EMPHASIS_DELIMITER, 2 raw tokens)
//!     Token(TEXT)
//!     Token(EMPHASIS_DELIMITER, 2 raw tokens)
//!   Finish
//! Finish
//! ```
//!
//! `Start` pushes a node, `Finish` pops it, `Token` attaches the next raw
//! token(s) to the innermost open node.
//!
//! A `Start` may carry a `forward_parent` link: the index of another `Start`
//! that must be opened around it. This is how a list node is wrapped around
//! its first item after the item has already been parsed.

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node, optionally inside a forward parent.
    Start {
        kind: SyntaxKind,
        forward_parent: Option<usize>,
    },

    /// Attach `n_raw_tokens` lexer tokens to the current node as one token
    /// of `kind`.
    Token { kind: SyntaxKind, n_raw_tokens: u8 },

    /// Close the innermost open node.
    Finish,

    /// Reserved slot for a `Start`; ignored by the Sink if never filled.
    Placeholder,
}

impl Event {
    /// Create a start event with no forward parent.
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start {
            kind,
            forward_parent: None,
        }
    }

    /// Create a token event for a single raw token.
    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token {
            kind,
            n_raw_tokens: 1,
        }
    }
}
