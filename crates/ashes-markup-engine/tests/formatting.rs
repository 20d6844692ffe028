use ashes_markup_engine::{FormatOptions, Formatter, format, format_effect};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn bare(text: &str) -> String {
    format(text, FormatOptions::default())
}

fn wrapped(text: &str) -> String {
    format(
        text,
        FormatOptions {
            ensure_paragraphs: true,
            legacy: false,
        },
    )
}

#[rstest]
#[case::script_tag(r#"<script>alert("x")</script>"#)]
#[case::attribute_injection(r#"[[Name" onclick="x https://example.com]]"#)]
#[case::inside_directive("[[<img src=x>]]")]
#[case::inside_emphasis("*<b>* **'quoted'**")]
#[case::inside_quote("> <i>quoted</i>\n> * <li>")]
#[case::inside_url("https://example.com/<script>")]
fn no_raw_markup_survives(#[case] input: &str) {
    for html in [bare(input), wrapped(input), format_effect(input, false)] {
        let stripped = html
            .replace("<p>", "")
            .replace("</p>", "")
            .replace("<br>", "");
        assert!(!stripped.contains("<script"), "{html}");
        assert!(!stripped.contains("<img src=x"), "{html}");
        assert!(!stripped.contains("<li><li>"), "{html}");
        assert!(!stripped.contains("<i>quoted"), "{html}");
        assert!(!stripped.contains("onclick=\""), "{html}");
        assert!(!stripped.contains('\''), "{html}");
    }
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(bare("plain text"), "plain text");
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(
        bare("line one\n\nline two"),
        "<p>line one</p>\n\n<p>line two</p>"
    );
}

#[test]
fn consecutive_items_share_one_list() {
    let html = bare("* item one\n* item two");
    assert_eq!(html, "<ul><li>item one</li><li>item two</li></ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn dice_code_is_power_icon() {
    assert!(bare("[[fire]]").contains(r#"class="phg-fire-power""#));
}

#[rstest]
#[case("[[discard]]")]
#[case("[[discard:power]]")]
#[case("[[Discard:side]]")]
fn discard_ignores_secondary(#[case] input: &str) {
    let html = bare(input);
    assert!(html.starts_with(r#"<span class="phg-discard">"#), "{html}");
}

#[test]
fn unknown_name_is_card_reference() {
    let html = bare("[[Spark Hammer]]");
    assert!(html.contains(r#"name="Spark Hammer""#));
    assert!(html.contains(r#"stub="spark-hammer""#));
}

#[test]
fn bold_has_no_asterisks() {
    let html = bare("**a**");
    assert!(html.contains("<b>a</b>"));
    assert!(!html.contains('*'));
}

#[test]
fn internal_url_is_followed() {
    let html = bare("https://ashes.live/x");
    assert!(html.contains(r#"href="https://ashes.live/x""#));
    assert!(!html.contains(r#"rel="nofollow""#));
}

#[test]
fn effect_list_becomes_inexhaustible_box() {
    let html = format_effect("* Ability: do a thing", false);
    assert_eq!(
        html,
        r#"<div class="inexhaustible-effects"><div><b>Ability:</b> do a thing</div></div>"#
    );
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(bare(""), "");
    assert_eq!(wrapped(""), "");
    assert_eq!(format_effect("", false), "");
}

#[rstest]
#[case::plain_break("line one\nline two", "line one\nline two")]
#[case::indented_continuation("a  \n  b", "a\nb")]
#[case::list_after_text("intro\n* item", "intro\n<ul><li>item</li></ul>")]
#[case::quote_after_text(
    "intro\n> quoted",
    "intro\n<blockquote><p>quoted</p></blockquote>"
)]
fn single_unit_is_bare(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(bare(input), expected);
}

#[rstest]
#[case::plain_break("one\ntwo", "<p>one<br>\ntwo</p>")]
#[case::indented_continuation("a  \n  b", "<p>a<br>\nb</p>")]
#[case::list_after_text("intro\n* item", "<p>intro</p>\n\n<ul><li>item</li></ul>")]
fn single_unit_wrapped_on_request(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(wrapped(input), expected);
}

#[test]
fn breaks_inside_later_paragraphs() {
    assert_eq!(
        bare("one\ntwo\n\nthree"),
        "<p>one<br>\ntwo</p>\n\n<p>three</p>"
    );
}

#[rstest]
#[case::separate_markers("* a\n~ b", "<ul><li>a</li></ul>\n\n<ol><li>b</li></ol>")]
#[case::gap_between_items("~ a\n\n  \n~ b", "<ol><li>a</li><li>b</li></ol>")]
#[case::text_after_list("* a\nafter", "<ul><li>a</li></ul>\n\n<p>after</p>")]
#[case::quote_then_text(
    "> quoted\n\nafter",
    "<blockquote><p>quoted</p></blockquote>\n\n<p>after</p>"
)]
#[case::quote_paragraphs(
    "> one\n> two\n>\n> three",
    "<blockquote><p>one<br>\ntwo</p>\n\n<p>three</p></blockquote>"
)]
#[case::list_in_quote(
    "> * a\n> * b",
    "<blockquote><ul><li>a</li><li>b</li></ul></blockquote>"
)]
fn block_structure(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(bare(input), expected);
}

#[rstest]
#[case::link_text_falls_back_to_url(
    "[[example.com/a]]",
    r#"<a href="http://example.com/a" rel="nofollow">example.com/a</a>"#
)]
#[case::internal_link_forced_https(
    "[[Cards http://ashes.live/cards]]",
    r#"<a href="https://ashes.live/cards">Cards</a>"#
)]
#[case::divider("a - b", r#"a <span class="divider"><span class="alt-text">-</span></span> b"#)]
#[case::hyphen_is_not_divider("well-known", "well-known")]
#[case::italic_phrase("[[Phoenixborn:Unique]]", "<i>Phoenixborn Unique</i>")]
#[case::nature_alias(
    "[[nature]]",
    r#"<span class="phg-natural-power"><span class="alt-text">[[nature]]</span></span>"#
)]
#[case::basic_magic(
    "[[basic]]",
    r#"<span class="phg-basic-magic"><span class="alt-text">[[basic]]</span></span>"#
)]
#[case::side_action(
    "[[side]]",
    r#"<span class="phg-side-action"><span class="alt-text">[[side]]</span></span>"#
)]
#[case::stars_inside_bare_url(
    "see https://example.com/a*b*c ok",
    r#"see <a href="https://example.com/a*b*c" rel="nofollow">https://example.com/a*b*c</a> ok"#
)]
#[case::emphasis_around_url(
    "*go https://ashes.live/x now*",
    r#"<i>go <a href="https://ashes.live/x">https://ashes.live/x</a> now</i>"#
)]
#[case::unterminated_directive("[[fire", "[[fire")]
#[case::lone_star("2 * 3", "2 * 3")]
#[case::url_with_trailing_period(
    "Go to https://example.com.",
    r#"Go to <a href="https://example.com" rel="nofollow">https://example.com</a>."#
)]
fn inline_rules(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(bare(input), expected);
}

#[test]
fn custom_formatter_dice() {
    let formatter = Formatter::new("ashes.live", ["astral"]).unwrap();
    assert_eq!(
        formatter.format("[[astral]]", FormatOptions::default()),
        r#"<span class="phg-astral-power"><span class="alt-text">[[astral]]</span></span>"#
    );
    assert!(
        formatter
            .format("[[fire]]", FormatOptions::default())
            .starts_with("<card-link")
    );
}

#[test]
fn formatter_shared_across_threads() {
    let formatter = std::sync::Arc::new(Formatter::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let formatter = std::sync::Arc::clone(&formatter);
            std::thread::spawn(move || {
                formatter.format(&format!("**{i}**"), FormatOptions::default())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<b>{i}</b>"));
    }
}
