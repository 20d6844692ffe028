//! HTML rendering of a [`Document`] in a single pass.
//!
//! Text in the tree is already escaped, so it is written out verbatim.

use crate::document::{BlockNode, Document, InlineSegment};

/// Render a document.
///
/// A single unit starting with text comes back bare unless
/// `ensure_paragraphs` is set: its text is not wrapped in `<p>`, its line
/// breaks stay plain newlines, and any list or blockquote after the text
/// follows on the next line. Everything else is wrapped, with blocks joined
/// by a blank line.
pub fn render_document(document: &Document, ensure_paragraphs: bool) -> String {
    if document.is_single_text_unit() && !ensure_paragraphs {
        return document
            .blocks
            .iter()
            .map(render_bare_block)
            .collect::<Vec<_>>()
            .join("\n");
    }

    document
        .blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_bare_block(block: &BlockNode) -> String {
    match block {
        BlockNode::Paragraph(inline) => render_inline_with_breaks(inline, "\n"),
        block => render_block(block),
    }
}

pub fn render_block(block: &BlockNode) -> String {
    match block {
        BlockNode::Paragraph(inline) => {
            let open = if is_standalone_image(inline) {
                r#"<p class="text-center">"#
            } else {
                "<p>"
            };
            format!("{open}{}</p>", render_inline(inline))
        }
        BlockNode::UnorderedList(items) => format!("<ul>{}</ul>", render_items(items, "li")),
        BlockNode::OrderedList(items) => format!("<ol>{}</ol>", render_items(items, "li")),
        BlockNode::Blockquote(children) => {
            let inner = children
                .iter()
                .map(render_block)
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("<blockquote>{inner}</blockquote>")
        }
        BlockNode::EffectBox { kind, items } => format!(
            r#"<div class="{}">{}</div>"#,
            kind.class_name(),
            render_items(items, "div")
        ),
    }
}

fn render_items(items: &[Vec<InlineSegment>], tag: &str) -> String {
    items
        .iter()
        .map(|item| format!("<{tag}>{}</{tag}>", render_inline(item)))
        .collect()
}

fn is_standalone_image(inline: &[InlineSegment]) -> bool {
    matches!(inline, [InlineSegment::Image { .. }])
}

/// Render inline content as it appears inside a paragraph.
pub fn render_inline(inline: &[InlineSegment]) -> String {
    render_inline_with_breaks(inline, "<br>\n")
}

fn render_inline_with_breaks(inline: &[InlineSegment], line_break: &str) -> String {
    let mut html = String::new();
    for segment in inline {
        render_segment(segment, line_break, &mut html);
    }
    html
}

fn render_segment(segment: &InlineSegment, line_break: &str, html: &mut String) {
    match segment {
        InlineSegment::Text(text) => html.push_str(text),
        InlineSegment::LineBreak => html.push_str(line_break),
        InlineSegment::Link {
            href,
            text,
            internal: true,
        } => html.push_str(&format!(r#"<a href="{href}">{text}</a>"#)),
        InlineSegment::Link { href, text, .. } => {
            html.push_str(&format!(r#"<a href="{href}" rel="nofollow">{text}</a>"#))
        }
        InlineSegment::Image {
            href,
            alt,
            internal,
        } => {
            let rel = if *internal {
                ""
            } else {
                r#" rel="nofollow external""#
            };
            html.push_str(&format!(
                r#"<a href="{href}" target="_blank"{rel}><img src="{href}" alt="{alt}"></a>"#
            ));
        }
        InlineSegment::Icon {
            primary,
            secondary,
            fallback,
        } => {
            let class = match secondary {
                Some(secondary) => format!("phg-{primary}-{secondary}"),
                None => format!("phg-{primary}"),
            };
            html.push_str(&format!(
                r#"<span class="{class}"><span class="alt-text">{fallback}</span></span>"#
            ));
        }
        InlineSegment::CardReference { name, stub, legacy } => html.push_str(&format!(
            r#"<card-link name="{name}" stub="{stub}" is_legacy="{legacy}"></card-link>"#
        )),
        InlineSegment::Divider => {
            html.push_str(r#"<span class="divider"><span class="alt-text">-</span></span>"#)
        }
        InlineSegment::Emphasis(children) => wrap("i", children, line_break, html),
        InlineSegment::Strong(children) => wrap("b", children, line_break, html),
        InlineSegment::StrongEmphasis(children) => {
            html.push_str("<b>");
            wrap("i", children, line_break, html);
            html.push_str("</b>");
        }
    }
}

fn wrap(tag: &str, children: &[InlineSegment], line_break: &str, html: &mut String) {
    html.push_str(&format!("<{tag}>"));
    for child in children {
        render_segment(child, line_break, html);
    }
    html.push_str(&format!("</{tag}>"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::EffectKind;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineSegment {
        InlineSegment::Text(s.to_string())
    }

    fn image(internal: bool) -> InlineSegment {
        InlineSegment::Image {
            href: "https://example.com/a.png".to_string(),
            alt: "Art".to_string(),
            internal,
        }
    }

    #[test]
    fn empty_document_renders_nothing() {
        assert_eq!(render_document(&Document::default(), true), "");
        assert_eq!(render_document(&Document::default(), false), "");
    }

    #[test]
    fn single_paragraph_is_bare_unless_forced() {
        let doc = Document {
            blocks: vec![BlockNode::Paragraph(vec![text("plain text")])],
            units: 1,
        };
        assert_eq!(render_document(&doc, false), "plain text");
        assert_eq!(render_document(&doc, true), "<p>plain text</p>");
    }

    #[test]
    fn bare_unit_keeps_plain_line_breaks() {
        let doc = Document {
            blocks: vec![
                BlockNode::Paragraph(vec![
                    text("intro"),
                    InlineSegment::LineBreak,
                    InlineSegment::Strong(vec![text("more")]),
                ]),
                BlockNode::UnorderedList(vec![vec![text("item")]]),
            ],
            units: 1,
        };
        assert_eq!(
            render_document(&doc, false),
            "intro\n<b>more</b>\n<ul><li>item</li></ul>"
        );
        assert_eq!(
            render_document(&doc, true),
            "<p>intro<br>\n<b>more</b></p>\n\n<ul><li>item</li></ul>"
        );
    }

    #[test]
    fn unit_starting_with_container_is_wrapped() {
        let doc = Document {
            blocks: vec![
                BlockNode::Blockquote(vec![BlockNode::Paragraph(vec![text("quoted")])]),
                BlockNode::Paragraph(vec![text("after")]),
            ],
            units: 1,
        };
        assert_eq!(
            render_document(&doc, false),
            "<blockquote><p>quoted</p></blockquote>\n\n<p>after</p>"
        );
    }

    #[test]
    fn separate_paragraphs_are_wrapped() {
        let doc = Document {
            blocks: vec![
                BlockNode::Paragraph(vec![text("one")]),
                BlockNode::Paragraph(vec![text("two")]),
            ],
            units: 2,
        };
        assert_eq!(render_document(&doc, false), "<p>one</p>\n\n<p>two</p>");
    }

    #[test]
    fn standalone_image_is_centered() {
        assert_eq!(
            render_block(&BlockNode::Paragraph(vec![image(false)])),
            r#"<p class="text-center"><a href="https://example.com/a.png" target="_blank" rel="nofollow external"><img src="https://example.com/a.png" alt="Art"></a></p>"#
        );
        assert_eq!(
            render_block(&BlockNode::Paragraph(vec![text("see "), image(true)])),
            r#"<p>see <a href="https://example.com/a.png" target="_blank"><img src="https://example.com/a.png" alt="Art"></a></p>"#
        );
    }

    #[test]
    fn links_carry_nofollow_when_external() {
        let inline = vec![
            InlineSegment::Link {
                href: "https://ashes.live/x".to_string(),
                text: "here".to_string(),
                internal: true,
            },
            text(" and "),
            InlineSegment::Link {
                href: "http://example.com".to_string(),
                text: "there".to_string(),
                internal: false,
            },
        ];
        assert_eq!(
            render_inline(&inline),
            r#"<a href="https://ashes.live/x">here</a> and <a href="http://example.com" rel="nofollow">there</a>"#
        );
    }

    #[test]
    fn nested_emphasis() {
        let inline = vec![
            InlineSegment::Strong(vec![InlineSegment::Emphasis(vec![text("a")]), text("b")]),
            InlineSegment::StrongEmphasis(vec![text("c")]),
        ];
        assert_eq!(render_inline(&inline), "<b><i>a</i>b</b><b><i>c</i></b>");
    }

    #[test]
    fn snapshot_all_blocks() {
        let doc = Document {
            blocks: vec![
                BlockNode::Paragraph(vec![
                    text("Roll"),
                    InlineSegment::LineBreak,
                    InlineSegment::Icon {
                        primary: "fire".to_string(),
                        secondary: Some("power".to_string()),
                        fallback: "[[fire]]".to_string(),
                    },
                    InlineSegment::Divider,
                    InlineSegment::Icon {
                        primary: "discard".to_string(),
                        secondary: None,
                        fallback: "[[discard]]".to_string(),
                    },
                ]),
                BlockNode::UnorderedList(vec![vec![InlineSegment::CardReference {
                    name: "Spark Hammer".to_string(),
                    stub: "spark-hammer".to_string(),
                    legacy: false,
                }]]),
                BlockNode::OrderedList(vec![vec![text("one")], vec![text("two")]]),
                BlockNode::Blockquote(vec![
                    BlockNode::Paragraph(vec![text("quoted")]),
                    BlockNode::UnorderedList(vec![vec![text("item")]]),
                ]),
                BlockNode::EffectBox {
                    kind: EffectKind::Reaction,
                    items: vec![vec![text("effect")]],
                },
            ],
            units: 5,
        };

        assert_snapshot!(render_document(&doc, false), @r#"
        <p>Roll<br>
        <span class="phg-fire-power"><span class="alt-text">[[fire]]</span></span><span class="divider"><span class="alt-text">-</span></span><span class="phg-discard"><span class="alt-text">[[discard]]</span></span></p>

        <ul><li><card-link name="Spark Hammer" stub="spark-hammer" is_legacy="false"></card-link></li></ul>

        <ol><li>one</li><li>two</li></ol>

        <blockquote><p>quoted</p>

        <ul><li>item</li></ul></blockquote>

        <div class="reaction-effects"><div>effect</div></div>
        "#);
    }
}
