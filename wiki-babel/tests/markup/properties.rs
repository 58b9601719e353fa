//! Properties of the formatter that hold for any input

use proptest::prelude::*;
use wiki_babel::format_markup;
use wiki_babel::html::escape;

proptest! {
    #[test]
    fn formatting_never_panics(content in "\\PC*", allow_file in any::<bool>()) {
        let _ = format_markup(&content, allow_file);
    }

    #[test]
    fn formatting_never_panics_on_markup_heavy_input(
        content in "[!#*:|^>/ \\-<'=\\[\\]a-zA-Z\n]{0,80}"
    ) {
        let _ = format_markup(&content, false);
    }

    #[test]
    fn plain_words_become_one_paragraph(text in "[a-z][a-z ]{0,40}") {
        prop_assert_eq!(format_markup(&text, false), format!("<p>{}</p>", text.trim()));
    }

    #[test]
    fn blank_input_produces_nothing(content in "[ \t\n]{0,20}") {
        prop_assert_eq!(format_markup(&content, false), "");
    }

    #[test]
    fn markup_free_text_is_escaped_verbatim(text in "[a-z][a-z<>&\"]{0,30}") {
        prop_assert_eq!(format_markup(&text, false), format!("<p>{}</p>", escape(text.trim())));
    }
}
