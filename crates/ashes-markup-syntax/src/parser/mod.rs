//! # Parser - Event-Based Tree Construction
//!
//! This module implements the core parsing logic, transforming a token stream
//! into a syntax tree using the **event-based** architecture from rust-analyzer.
//!
//! ## Why Event-Based Parsing?
//!
//! The grammar emits a flat list of **events** ([`Event`]) that describe the
//! tree structure, and the [`Sink`] builds the actual Rowan tree from them.
//! Grammar code never touches Rowan, and speculative constructs (an emphasis
//! run that turns out to be unpaired, a `[[` that is never closed) are decided
//! by lookahead before any event is pushed.
//!
//! ## The Event Model
//!
//! Parsing `* [[fire]]` produces:
//! ```text
//! Start(UNORDERED_LIST)
//!   Start(LIST_ITEM)
//!     Token(LIST_MARKER, 2 raw tokens)
//!     Start(DIRECTIVE)
//!       Token(DIRECTIVE_OPEN, 2 raw tokens)
//!       Token(TEXT)
//!       Token(DIRECTIVE_CLOSE, 2 raw tokens)
//!     Finish
//!   Finish
//! Finish
//! ```
//!
//! ## The Marker System
//!
//! When you call `parser.start()`, you get a [`Marker`]. It **must** be
//! completed with `marker.complete(parser, KIND)`. Dropping it otherwise
//! panics, so a grammar bug can never silently produce a corrupt tree.
//!
//! ```ignore
//! let m = p.start();
//! p.bump();
//! m.complete(p, SyntaxKind::PARAGRAPH);
//! ```
//!
//! ## Composite Tokens
//!
//! Markup syntax (`> `, `* `, `**`, `[[`) is emitted with [`Parser::bump_n`]
//! as a single token of a dedicated kind (`QUOTE_PREFIX`, `LIST_MARKER`,
//! `EMPHASIS_DELIMITER`, ...). Consumers can then tell syntax apart from
//! literal characters without re-deriving the grammar's decisions.
//!
//! ## Public API
//!
//! ```
//! use ashes_markup_syntax::parse;
//!
//! let tree = parse("* item\n");
//! println!("{:#?}", tree);
//! ```

pub mod event;
pub mod sink;

mod grammar;

use crate::lexer::{Token, lex};
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use event::Event;
use sink::Sink;

/// The parser state machine.
///
/// Holds the token stream, current position, and accumulated events.
/// Grammar functions receive `&mut Parser` and use its methods to:
///
/// - Inspect tokens: `current()`, `nth()`, `nth_text()`, `prev()`, `at()`, `at_end()`
/// - Consume tokens: `bump()`, `bump_n()`, `eat()`
/// - Build structure: `start()` → `Marker` → `complete()`
pub struct Parser<'t, 'input> {
    tokens: &'t [Token<'input>],
    pos: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Parser<'t, 'input> {
    /// Create a new parser from a slice of tokens.
    pub fn new(tokens: &'t [Token<'input>]) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
        }
    }

    /// Parse the tokens and return a syntax tree.
    pub fn parse(mut self) -> SyntaxNode {
        grammar::root(&mut self);
        let sink = Sink::new(self.tokens, self.events);
        sink.finish()
    }

    /// Start a new node and return a marker.
    pub fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            completed: false,
        }
    }

    /// Current token kind, or EOF if past end.
    pub fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Look ahead n tokens.
    pub fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Text of the token `n` ahead, or empty past the end.
    pub fn nth_text(&self, n: usize) -> &'input str {
        self.tokens.get(self.pos + n).map(|t| t.text).unwrap_or("")
    }

    /// Kind of the token before the current one, or EOF at the start of input.
    pub fn prev(&self) -> SyntaxKind {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::EOF)
    }

    /// Check if at end of input.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if current token is of given kind.
    pub fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume the current token unconditionally.
    pub fn bump(&mut self) {
        if !self.at_end() {
            let kind = self.current();
            self.events.push(Event::token(kind));
            self.pos += 1;
        }
    }

    /// Consume n tokens as a single composite token.
    pub fn bump_n(&mut self, n: usize, kind: SyntaxKind) {
        if n > 0 && self.pos + n <= self.tokens.len() {
            self.events.push(Event::Token {
                kind,
                n_raw_tokens: n as u8,
            });
            self.pos += n;
        }
    }

    /// Remaining tokens count.
    ///
    /// Grammar rules use this as a position: "stop when `remaining()` drops
    /// to N" bounds a nested rule without exposing the raw index.
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }
}

/// A marker for a node being constructed.
///
/// When you call `parser.start()`, a `Placeholder` event is pushed and you get
/// a `Marker` pointing to it.
///
/// ## The Must-Use Contract
///
/// The `#[must_use]` attribute and the `Drop` impl together enforce that
/// every marker is completed via `marker.complete(parser, KIND)`, which
/// converts the placeholder to a `Start` event and pushes a `Finish` event.
///
/// If you drop a marker without completing it, **the program panics**.
#[must_use = "Markers must be completed, dropping them is a bug"]
pub struct Marker {
    /// Position in the events vector where our Placeholder lives
    pos: usize,
    /// Tracks whether complete() was called
    completed: bool,
}

impl Marker {
    /// Complete this marker, creating a node of the given kind.
    pub fn complete(mut self, p: &mut Parser<'_, '_>, kind: SyntaxKind) -> CompletedMarker {
        self.completed = true;
        let event_at_pos = &mut p.events[self.pos];
        assert!(matches!(event_at_pos, Event::Placeholder));
        *event_at_pos = Event::start(kind);
        p.events.push(Event::Finish);
        CompletedMarker { pos: self.pos }
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        if !self.completed && !std::thread::panicking() {
            panic!("Marker must be completed");
        }
    }
}

/// A marker for a node that has been completed.
///
/// The only thing you can do with a `CompletedMarker` is call `precede()`
/// to wrap the completed node in a new parent.
#[derive(Debug, Clone, Copy)]
pub struct CompletedMarker {
    /// Position of the Start event for this completed node
    pos: usize,
}

impl CompletedMarker {
    /// Create a new parent node that will contain this node.
    pub fn precede(self, p: &mut Parser<'_, '_>) -> Marker {
        let new_pos = p.events.len();
        p.events.push(Event::Placeholder);

        // Update the original Start event to point to this new parent
        if let Event::Start { forward_parent, .. } = &mut p.events[self.pos] {
            *forward_parent = Some(new_pos);
        }

        Marker {
            pos: new_pos,
            completed: false,
        }
    }
}

/// Parse (already escaped) markup source into a syntax tree.
pub fn parse(source: &str) -> SyntaxNode {
    let tokens = lex(source);
    let parser = Parser::new(&tokens);
    parser.parse()
}
