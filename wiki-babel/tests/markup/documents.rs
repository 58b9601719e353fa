//! Document tests for the wiki formatter

use insta::assert_snapshot;
use wiki_babel::{format_markup, FormatOptions, WikiFormatter};

const KITCHENSINK: &str = include_str!("fixtures/kitchensink.wiki");

fn to_html(markup: &str) -> String {
    format_markup(markup, false)
}

// ============================================================================
// BASIC BLOCK TESTS
// ============================================================================

#[test]
fn test_heading() {
    assert_eq!(to_html("!! Title"), "<h3>Title</h3>");
}

#[test]
fn test_heading_needs_text() {
    assert_eq!(to_html("!!"), "<p>!!</p>");
}

#[test]
fn test_paragraph_lines_are_joined() {
    assert_eq!(to_html("one\ntwo\n\nthree"), "<p>onetwo</p><p>three</p>");
}

#[test]
fn test_table_spans() {
    assert_snapshot!(
        to_html("||!A||^>B"),
        @r#"<table border="1"><tr><th>A</th><td rowspan='2' colspan='2'>B</td></tr></table>"#
    );
}

#[test]
fn test_comment_only_document() {
    assert_eq!(to_html("// nothing\n// to see"), "");
}

#[test]
fn test_rule_between_paragraphs() {
    assert_eq!(to_html("a\n----\nb"), "<p>a----b</p>");
    assert_eq!(to_html("a\n\n----\n\nb"), "<p>a</p><hr /><p>b</p>");
}

#[test]
fn test_whitespace_only_lines_separate_blocks() {
    assert_eq!(to_html("a\n   \nb"), "<p>a</p><p>b</p>");
}

#[test]
fn test_list_then_paragraph() {
    assert_snapshot!(
        to_html("* a\n** b\n\nafter"),
        @"<ul><li>a<ul><li>b</li></ul></li></ul><p>after</p>"
    );
}

#[test]
fn test_block_pre_keeps_markup_characters_escaped() {
    assert_snapshot!(
        to_html("<<<\nif a < b && c\n>>>"),
        @"<pre>if a &lt; b &amp;&amp; c</pre>"
    );
}

#[test]
fn test_indented_lines_then_block_opener_stay_one_pre() {
    assert_eq!(to_html(" one\n<<<\ntwo"), "<pre>one\n&lt;&lt;&lt;</pre><p>two</p>");
}

// ============================================================================
// KITCHENSINK
// ============================================================================

#[test]
fn test_kitchensink() {
    let html = to_html(KITCHENSINK);
    assert_snapshot!(
        html,
        @r#"<h2>Kitchen Sink</h2><p>See <a href='http://example.com/docs' target='_blank'>http://example.com/docs</a> or <a href='#' class='wikiPage' title='FrontPage'>FrontPage</a> today</p><ul><li>first<ul><li>nested <em>item</em></li></ul></li><li>second</li></ul><ol><li>one</li><li>two</li></ol><dl><dt>Term</dt><dd>Definition with <strong>bold</strong></dd></dl><table border="1"><tr><th>Name</th><th>Value</th></tr><tr><td>a</td><td rowspan='2'>b</td></tr></table><hr /><pre>indented &lt; code</pre><pre>block line</pre><p>last paragraphcontinues here</p>"#
    );
}

#[test]
fn test_formatter_is_reusable() {
    let formatter = WikiFormatter::new(FormatOptions::default());
    let first = formatter.format(KITCHENSINK);
    let second = formatter.format(KITCHENSINK);
    assert_eq!(first, second);
}
