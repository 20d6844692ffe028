//! Lowering the lossless syntax tree into a [`Document`].
//!
//! Markup tokens (`QUOTE_PREFIX`, `LIST_MARKER`, `EMPHASIS_DELIMITER`,
//! `DIRECTIVE_OPEN`, `DIRECTIVE_CLOSE`) are dropped; every other token is
//! text. Consecutive text tokens are gathered before bare URLs are searched,
//! since a URL spans several tokens (`-`, `*`, `~` are tokens of their own).

use ashes_markup_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
use rowan::NodeOrToken;

use super::{BlockNode, Document, Inline, InlineSegment};
use crate::inline::InlineResolver;

/// Lower a parsed tree, resolving directives with `resolver`.
pub(crate) fn lower(root: &SyntaxNode, resolver: &InlineResolver, legacy: bool) -> Document {
    let lowering = Lowering { resolver, legacy };
    Document {
        blocks: lowering.blocks(root),
        units: count_units(root),
    }
}

/// Count the runs of top-level blocks separated by at least one blank line.
///
/// The NEWLINE ending a block's last line sits at the top level, so two of
/// them between blocks mean a blank line. Blank lines inside a list belong
/// to the list node and do not separate units.
fn count_units(root: &SyntaxNode) -> usize {
    let mut units = 0;
    let mut newlines = 0;

    for element in root.children_with_tokens() {
        match element {
            NodeOrToken::Node(_) => {
                if units == 0 || newlines > 1 {
                    units += 1;
                }
                newlines = 0;
            }
            NodeOrToken::Token(token) if token.kind() == SyntaxKind::NEWLINE => newlines += 1,
            NodeOrToken::Token(_) => {}
        }
    }
    units
}

struct Lowering<'a> {
    resolver: &'a InlineResolver,
    legacy: bool,
}

impl Lowering<'_> {
    fn blocks(&self, node: &SyntaxNode) -> Vec<BlockNode> {
        node.children()
            .filter_map(|child| self.block(&child))
            .collect()
    }

    fn block(&self, node: &SyntaxNode) -> Option<BlockNode> {
        let block = match node.kind() {
            SyntaxKind::PARAGRAPH => BlockNode::Paragraph(self.line_content(node)),
            SyntaxKind::UNORDERED_LIST => BlockNode::UnorderedList(self.items(node)),
            SyntaxKind::ORDERED_LIST => BlockNode::OrderedList(self.items(node)),
            SyntaxKind::BLOCK_QUOTE => BlockNode::Blockquote(self.blocks(node)),
            _ => return None,
        };
        Some(block)
    }

    fn items(&self, list: &SyntaxNode) -> Vec<Inline> {
        list.children()
            .filter(|item| item.kind() == SyntaxKind::LIST_ITEM)
            .map(|item| self.line_content(&item))
            .collect()
    }

    /// Inline content of a paragraph or list item, trimmed at both ends.
    fn line_content(&self, node: &SyntaxNode) -> Inline {
        let mut segments = self.inline(node);
        trim_edges(&mut segments);
        segments
    }

    fn inline(&self, node: &SyntaxNode) -> Inline {
        let mut builder = InlineBuilder::new(self.resolver);
        self.walk(node, &mut builder);
        builder.finish()
    }

    fn walk(&self, node: &SyntaxNode, builder: &mut InlineBuilder<'_>) {
        for element in node.children_with_tokens() {
            match element {
                NodeOrToken::Token(token) => Self::token(&token, builder),
                NodeOrToken::Node(child) => match child.kind() {
                    SyntaxKind::DIRECTIVE => self.directive(&child, builder),
                    SyntaxKind::DIVIDER => builder.push(InlineSegment::Divider),
                    SyntaxKind::EMPHASIS => {
                        builder.push(InlineSegment::Emphasis(self.inline(&child)))
                    }
                    SyntaxKind::STRONG => builder.push(InlineSegment::Strong(self.inline(&child))),
                    SyntaxKind::STRONG_EMPHASIS => {
                        builder.push(InlineSegment::StrongEmphasis(self.inline(&child)))
                    }
                    _ => self.walk(&child, builder),
                },
            }
        }
    }

    fn token(token: &SyntaxToken, builder: &mut InlineBuilder<'_>) {
        match token.kind() {
            SyntaxKind::NEWLINE => builder.line_break(),
            kind if kind.is_markup() => {}
            _ => builder.push_text(token.text()),
        }
    }

    fn directive(&self, node: &SyntaxNode, builder: &mut InlineBuilder<'_>) {
        let content: String = node
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .filter(|token| !token.kind().is_markup())
            .map(|token| token.text().to_string())
            .collect();

        match self.resolver.resolve_directive(&content, self.legacy) {
            Some(segment) => builder.push(segment),
            None => {
                log::debug!("Unrecognised directive [[{content}]] kept as text");
                builder.push_text(&node.text().to_string());
            }
        }
    }
}

/// Collects segments, buffering text so URL detection sees whole runs.
struct InlineBuilder<'a> {
    resolver: &'a InlineResolver,
    segments: Inline,
    text: String,
    /// Nothing but whitespace seen since the last line break.
    line_start: bool,
}

impl<'a> InlineBuilder<'a> {
    fn new(resolver: &'a InlineResolver) -> Self {
        Self {
            resolver,
            segments: Vec::new(),
            text: String::new(),
            line_start: false,
        }
    }

    fn push_text(&mut self, text: &str) {
        let text = if self.line_start {
            text.trim_start()
        } else {
            text
        };
        if !text.is_empty() {
            self.line_start = false;
            self.text.push_str(text);
        }
    }

    fn push(&mut self, segment: InlineSegment) {
        self.flush();
        self.segments.push(segment);
        self.line_start = false;
    }

    /// Line break; whitespace on either side of it is dropped.
    fn line_break(&mut self) {
        let kept = self.text.trim_end().len();
        self.text.truncate(kept);
        self.push(InlineSegment::LineBreak);
        self.line_start = true;
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.resolver.push_text(&text, &mut self.segments);
        }
    }

    fn finish(mut self) -> Inline {
        self.flush();
        self.segments
    }
}

/// Drop leading whitespace of the first segment and trailing whitespace of
/// the last, when they are text.
fn trim_edges(segments: &mut Inline) {
    if let Some(InlineSegment::Text(text)) = segments.first_mut() {
        *text = text.trim_start().to_string();
        if text.is_empty() {
            segments.remove(0);
        }
    }
    if let Some(InlineSegment::Text(text)) = segments.last_mut() {
        *text = text.trim_end().to_string();
        if text.is_empty() {
            segments.pop();
        }
    }
}
