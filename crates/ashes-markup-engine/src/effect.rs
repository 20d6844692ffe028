//! Card effect text: effect boxes and bold ability names.
//!
//! Runs on the parsed [`Document`], after directives are resolved:
//!
//! - `* ` lists become inexhaustible effect boxes, `~ ` lists reaction boxes;
//! - a paragraph or effect starting `Ability Name:` followed by a word or an
//!   icon gets the name in bold.

use std::sync::OnceLock;

use regex::Regex;

use crate::document::{BlockNode, Document, EffectKind, Inline, InlineSegment};

fn ability_regex() -> &'static Regex {
    static ABILITY: OnceLock<Regex> = OnceLock::new();
    ABILITY.get_or_init(|| {
        Regex::new(r"(?i)^([a-z0-9 ]+:)(\s*)(.*)$").expect("Invalid ability name regex")
    })
}

/// Apply effect formatting to a document.
pub fn augment(document: Document) -> Document {
    Document {
        blocks: document.blocks.into_iter().map(augment_block).collect(),
        units: document.units,
    }
}

fn augment_block(block: BlockNode) -> BlockNode {
    match block {
        BlockNode::Paragraph(inline) => BlockNode::Paragraph(bold_ability(inline)),
        BlockNode::UnorderedList(items) => effect_box(EffectKind::Inexhaustible, items),
        BlockNode::OrderedList(items) => effect_box(EffectKind::Reaction, items),
        BlockNode::Blockquote(children) => {
            BlockNode::Blockquote(children.into_iter().map(augment_block).collect())
        }
        effect @ BlockNode::EffectBox { .. } => effect,
    }
}

fn effect_box(kind: EffectKind, items: Vec<Inline>) -> BlockNode {
    BlockNode::EffectBox {
        kind,
        items: items.into_iter().map(bold_ability).collect(),
    }
}

/// Bold a leading `Ability Name:` when a word or an icon follows it.
pub fn bold_ability(inline: Inline) -> Inline {
    let Some(InlineSegment::Text(first)) = inline.first() else {
        return inline;
    };
    let Some(caps) = ability_regex().captures(first) else {
        return inline;
    };

    let rest = &caps[3];
    let applies = match rest.chars().next() {
        Some(c) => c.is_alphanumeric() || c == '_',
        None => matches!(inline.get(1), Some(InlineSegment::Icon { .. })),
    };
    if !applies {
        return inline;
    }

    let name = InlineSegment::Strong(vec![InlineSegment::Text(caps[1].to_string())]);
    let tail = format!("{}{}", &caps[2], rest);

    let mut bolded = vec![name];
    if !tail.is_empty() {
        bolded.push(InlineSegment::Text(tail));
    }
    bolded.extend(inline.into_iter().skip(1));
    bolded
}
