//! # ashes-markup-syntax
//!
//! A lossless syntax tree for Ashes card and deck markup using [Rowan] +
//! [Logos], following the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## Architecture Overview
//!
//! ```text
//! Escaped Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!                (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! The input is expected to be HTML-escaped already; this crate only knows
//! about the markup characters (`>`, `*`, `~`, `-`, `[`, `]`) and treats
//! everything else as text.
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! ```text
//! "* [[fire]]" → [STAR, WHITESPACE, LBRACKET, LBRACKET, TEXT, RBRACKET, RBRACKET]
//! ```
//!
//! ### 2. Parser ([`parser`] module)
//!
//! The parser consumes tokens and emits **events**. Markup syntax is grouped
//! into composite tokens (`QUOTE_PREFIX`, `LIST_MARKER`,
//! `EMPHASIS_DELIMITER`, `DIRECTIVE_OPEN`, `DIRECTIVE_CLOSE`) so it can be
//! told apart from literal characters.
//!
//! ### 3. Sink ([`parser::sink`] module)
//!
//! The sink replays events into a Rowan green tree.
//!
//! ## Module Structure
//!
//! ```text
//! ashes-markup-syntax/
//! ├── lib.rs           # This file - public API and tree snapshots
//! ├── syntax_kind.rs   # SyntaxKind enum and Rowan integration
//! ├── lexer.rs         # Logos-based tokenizer
//! └── parser/
//!     ├── mod.rs       # Parser struct, Marker system, public parse()
//!     ├── event.rs     # Event enum (Start, Token, Finish, Placeholder)
//!     ├── sink.rs      # Converts events to Rowan GreenNode
//!     └── grammar/
//!         ├── mod.rs      # Root document
//!         ├── block.rs    # Blockquotes, lists, paragraphs
//!         ├── inline.rs   # Directives, bare URLs, dividers
//!         └── emphasis.rs # Italic and bold runs
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ashes_markup_syntax::{parse, SyntaxKind};
//!
//! let tree = parse("* [[fire]] power\n");
//!
//! // The tree preserves all text
//! assert_eq!(tree.text().to_string(), "* [[fire]] power\n");
//!
//! assert_eq!(tree.kind(), SyntaxKind::ROOT);
//! let list = tree.children().next().unwrap();
//! assert_eq!(list.kind(), SyntaxKind::UNORDERED_LIST);
//! ```

pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::parse;
pub use syntax_kind::{MarkupLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
