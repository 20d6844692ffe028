//! SyntaxKind enum for all tokens and nodes in the markup CST.
//!
//! Following the rust-analyzer model, all tokens and nodes share a single enum.
//! Every byte in the source must appear as a token in the tree.

/// All syntax kinds for the markup CST.
///
/// This enum represents both tokens (lexer and parser output) and composite
/// nodes (parser output). The `repr(u16)` ensures efficient storage in rowan's
/// green tree.
///
/// We use SCREAMING_CASE following the rust-analyzer convention for SyntaxKind.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// Plain text content
    TEXT,
    /// `>` character for blockquotes
    GT,
    /// `*` character for unordered lists and emphasis
    STAR,
    /// `~` character for ordered lists
    TILDE,
    /// `-` character for dividers
    DASH,
    /// `[` for directives
    LBRACKET,
    /// `]` for directives
    RBRACKET,

    // === Composite tokens (parser output, built from several raw tokens) ===
    /// `> ` prefix of a blockquote line
    QUOTE_PREFIX,
    /// `* ` or `~ ` prefix of a list item
    LIST_MARKER,
    /// Asterisks that open or close emphasis
    EMPHASIS_DELIMITER,
    /// `[[` opening a directive
    DIRECTIVE_OPEN,
    /// `]]` closing a directive
    DIRECTIVE_CLOSE,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root document node
    ROOT,
    /// Blockquote container (`> ...`)
    BLOCK_QUOTE,
    /// Unordered list (`* ` items)
    UNORDERED_LIST,
    /// Ordered list (`~ ` items)
    ORDERED_LIST,
    /// Individual list item
    LIST_ITEM,
    /// Paragraph block
    PARAGRAPH,
    /// `[[...]]` directive: link, image or card code
    DIRECTIVE,
    /// ` - ` divider between clauses
    DIVIDER,
    /// Bare `http://` or `https://` URL, opaque to emphasis
    URL,
    /// Emphasis `*text*`
    EMPHASIS,
    /// Strong emphasis `**text**`
    STRONG,
    /// Strong and emphasized `***text***`
    STRONG_EMPHASIS,
}

impl SyntaxKind {
    /// The last variant; used to bounds-check raw kinds coming back from rowan.
    const LAST: SyntaxKind = SyntaxKind::STRONG_EMPHASIS;

    /// Returns true if this token is markup syntax with no rendered text of
    /// its own (prefixes, delimiters and brackets consumed by the grammar).
    pub fn is_markup(self) -> bool {
        matches!(
            self,
            Self::QUOTE_PREFIX
                | Self::LIST_MARKER
                | Self::EMPHASIS_DELIMITER
                | Self::DIRECTIVE_OPEN
                | Self::DIRECTIVE_CLOSE
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkupLang {}

impl rowan::Language for MarkupLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::LAST as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<MarkupLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<MarkupLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<MarkupLang>;
