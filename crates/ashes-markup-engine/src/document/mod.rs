//! # Document Model
//!
//! The typed tree a formatted text is lowered into before rendering:
//!
//! ```text
//! Document
//! └── BlockNode (Paragraph | UnorderedList | OrderedList | Blockquote | EffectBox)
//!     └── InlineSegment (Text | Link | Icon | CardReference | Emphasis(..) | ...)
//! ```
//!
//! All text held by the tree is already HTML-escaped, so rendering never
//! escapes again.

mod lower;

pub(crate) use lower::lower;

/// A run of inline content.
pub type Inline = Vec<InlineSegment>;

/// One piece of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSegment {
    /// Escaped plain text
    Text(String),
    /// Line break between two lines of the same paragraph
    LineBreak,
    /// Anchor with a fully qualified href
    Link {
        href: String,
        text: String,
        internal: bool,
    },
    /// Image opening in a new tab
    Image {
        href: String,
        alt: String,
        internal: bool,
    },
    /// Game icon such as `phg-fire-power`, with the directive text as fallback
    Icon {
        primary: String,
        secondary: Option<String>,
        fallback: String,
    },
    /// Reference to a card by name, rendered as `<card-link>`
    CardReference {
        name: String,
        stub: String,
        legacy: bool,
    },
    /// Stand-alone ` - `
    Divider,
    Emphasis(Inline),
    Strong(Inline),
    StrongEmphasis(Inline),
}

/// Which effect box a list becomes in card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// From `* ` lists
    Inexhaustible,
    /// From `~ ` lists
    Reaction,
}

impl EffectKind {
    /// CSS class of the box.
    pub fn class_name(self) -> &'static str {
        match self {
            EffectKind::Inexhaustible => "inexhaustible-effects",
            EffectKind::Reaction => "reaction-effects",
        }
    }
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    Paragraph(Inline),
    UnorderedList(Vec<Inline>),
    OrderedList(Vec<Inline>),
    Blockquote(Vec<BlockNode>),
    /// Only produced for card effect text.
    EffectBox { kind: EffectKind, items: Vec<Inline> },
}

/// A parsed text: its blocks in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
    /// Top-level units: runs of blocks separated by blank lines.
    pub units: usize,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// True for a single unit that starts with text rather than a list or
    /// blockquote. Such a document may be returned without paragraphs.
    pub fn is_single_text_unit(&self) -> bool {
        self.units == 1 && matches!(self.blocks.first(), Some(BlockNode::Paragraph(_)))
    }
}
