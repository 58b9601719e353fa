//! Link and image handling inside documents

use wiki_babel::format_markup;

#[test]
fn test_image_autolink() {
    assert_eq!(
        format_markup("http://x/y.png", false),
        "<p><img src='http://x/y.png' alt='http://x/y.png' title='http://x/y.png'/></p>"
    );
}

#[test]
fn test_bracket_image_uses_literal_as_alt() {
    assert_eq!(
        format_markup("[[logo|http://x/logo.GIF]]", false),
        "<p><img src='http://x/logo.GIF' alt='logo' title='logo'/></p>"
    );
}

#[test]
fn test_wiki_name_in_list_item() {
    assert_eq!(
        format_markup("* FrontPage", false),
        "<ul><li><a href='#' class='wikiPage' title='FrontPage'>FrontPage</a></li></ul>"
    );
}

#[test]
fn test_only_first_link_pattern_splits_text() {
    // text in front of a URL is not searched for wiki names
    assert_eq!(
        format_markup("FrontPage http://x", false),
        "<p><a href='#' class='wikiPage' title='FrontPage'>FrontPage</a> <a href='http://x' target='_blank'>http://x</a></p>"
    );
    assert_eq!(
        format_markup("see FrontPage and http://x", false),
        "<p>see FrontPage and <a href='http://x' target='_blank'>http://x</a></p>"
    );
}

#[test]
fn test_file_scheme_toggle() {
    let markup = "[[notes|file:///tmp/notes.txt]]";
    assert_eq!(
        format_markup(markup, false),
        "<p>[[notes|file:///tmp/notes.txt]]</p>"
    );
    assert_eq!(
        format_markup(markup, true),
        "<p><a href='file:///tmp/notes.txt' target='_blank'>notes</a></p>"
    );
}

#[test]
fn test_markup_inside_table_cell() {
    assert_eq!(
        format_markup("||[[home|FrontPage]]||''x''", false),
        "<table border=\"1\"><tr><td><a href='#' class='wikiPage' title='FrontPage'>home</a></td><td><em>x</em></td></tr></table>"
    );
}
