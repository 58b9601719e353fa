//! Inline text formatting
//!
//! Converts one logical line (or the merged text of a paragraph) into an HTML
//! fragment. The text is first split into phrases around auto-links and wiki
//! names, then each phrase is resolved in priority order:
//!
//! 1. A phrase that is exactly a wiki name becomes a wiki page link.
//! 2. A phrase that is a complete URL becomes a link, or an image when the
//!    URL points at a `.jpg`, `.jpeg`, `.gif` or `.png` resource.
//! 3. Anything else goes through bracket, decoration and escape resolution.
//!
//! Malformed constructs never fail: they fall back to escaped literal text.

use crate::format::FormatOptions;
use crate::html::{element, empty_tag, end_tag, escape, start_tag};
use once_cell::sync::Lazy;
use regex::Regex;

static WIKI_NAME_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[A-Z][a-z0-9]+){2,}").expect("valid wiki name pattern"));

static WIKI_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z][a-z0-9]+){2,}$").expect("valid wiki name pattern"));

static HTTP_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?:").expect("valid scheme pattern"));

static HTTP_OR_FILE_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:https?|file):").expect("valid scheme pattern"));

static HTTP_AUTOLINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+$").expect("valid autolink pattern"));

static HTTP_OR_FILE_AUTOLINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:https?|file)://.+$").expect("valid autolink pattern"));

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".gif", ".png"];

/// Decoration delimiters in priority order.
const DECORATIONS: &[(&str, &str)] = &[("'''", "strong"), ("''", "em"), ("==", "del")];

/// Returns true when `phrase` consists only of two or more CamelCase segments.
///
/// ```
/// use wiki_babel::inline::is_wiki_name;
///
/// assert!(is_wiki_name("FooBar"));
/// assert!(!is_wiki_name("Foo"));
/// assert!(!is_wiki_name("fooBar"));
/// ```
pub fn is_wiki_name(phrase: &str) -> bool {
    WIKI_NAME.is_match(phrase)
}

/// Translates inline markup into HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineFormatter {
    options: FormatOptions,
}

impl InlineFormatter {
    pub fn new(options: FormatOptions) -> Self {
        InlineFormatter { options }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Format a piece of text. Leading and trailing whitespace is dropped.
    pub fn format(&self, text: &str) -> String {
        self.split_phrases(text.trim())
            .into_iter()
            .filter(|phrase| !phrase.trim().is_empty())
            .map(|phrase| self.format_phrase(phrase))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn scheme_pattern(&self) -> &'static Regex {
        if self.options.allow_file_scheme {
            &HTTP_OR_FILE_SCHEME
        } else {
            &HTTP_SCHEME
        }
    }

    fn autolink_pattern(&self) -> &'static Regex {
        if self.options.allow_file_scheme {
            &HTTP_OR_FILE_AUTOLINK
        } else {
            &HTTP_AUTOLINK
        }
    }

    /// Splits text around URL and wiki name phrases.
    ///
    /// Only the first occurrence of each pattern is considered per round; a
    /// match that does not start a word ends the scan.
    fn split_phrases<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut phrases = Vec::new();
        let mut rest = text;
        while let Some((start, end)) = self
            .find_url_phrase(rest)
            .or_else(|| find_wiki_name_phrase(rest))
        {
            phrases.push(rest[..start].trim());
            phrases.push(&rest[start..end]);
            rest = rest[end..].trim();
        }
        phrases.push(rest);
        phrases
    }

    fn find_url_phrase(&self, text: &str) -> Option<(usize, usize)> {
        let start = self.scheme_pattern().find(text)?.start();
        if !starts_word(text, start) {
            return None;
        }
        let end = text[start..]
            .find(' ')
            .map_or(text.len(), |offset| start + offset);
        Some((start, end))
    }

    fn is_outer_link(&self, target: &str) -> bool {
        self.scheme_pattern()
            .find(target)
            .is_some_and(|found| found.start() == 0)
    }

    fn format_phrase(&self, phrase: &str) -> String {
        if is_wiki_name(phrase) {
            wiki_link(phrase, phrase)
        } else if self.autolink_pattern().is_match(phrase) {
            link_or_image(phrase, phrase)
        } else {
            self.format_text(phrase)
        }
    }

    fn format_text(&self, text: &str) -> String {
        self.format_bracket(text)
            .or_else(|| self.format_decoration(text))
            .unwrap_or_else(|| escape(text))
    }

    /// Resolves the first `[[literal|target]]` in `text`.
    fn format_bracket(&self, text: &str) -> Option<String> {
        let start = text.find("[[")?;
        let inner_start = start + 2;
        let end = inner_start + text[inner_start..].find("]]")?;
        let (literal, target) = text[inner_start..end].split_once('|')?;
        if literal.is_empty() {
            return None;
        }

        let anchor = if is_wiki_name(target) {
            wiki_link(target, literal)
        } else if self.is_outer_link(target) {
            link_or_image(target, literal)
        } else {
            return None;
        };

        Some(format!(
            "{}{}{}",
            self.format_text(&text[..start]),
            anchor,
            self.format_text(&text[end + 2..])
        ))
    }

    /// Applies the first decoration whose opening and closing delimiters both
    /// appear in `text`.
    fn format_decoration(&self, text: &str) -> Option<String> {
        DECORATIONS.iter().find_map(|(delimiter, tag)| {
            let start = text.find(delimiter)?;
            let inner_start = start + delimiter.len();
            let end = inner_start + text[inner_start..].find(delimiter)?;
            Some(format!(
                "{}{}{}",
                self.format_text(&text[..start]),
                element(tag, &self.format_text(&text[inner_start..end])),
                self.format_text(&text[end + delimiter.len()..])
            ))
        })
    }
}

fn starts_word(text: &str, start: usize) -> bool {
    start == 0 || text[..start].ends_with(' ')
}

fn find_wiki_name_phrase(text: &str) -> Option<(usize, usize)> {
    let found = WIKI_NAME_TOKEN.find(text)?;
    let ends_word = found.end() == text.len() || text[found.end()..].starts_with(' ');
    (starts_word(text, found.start()) && ends_word).then(|| (found.start(), found.end()))
}

fn is_image_url(url: &str) -> bool {
    match url.rfind('.') {
        Some(pos) if pos > 0 => {
            let extension = url[pos..].to_lowercase();
            IMAGE_EXTENSIONS.contains(&extension.as_str())
        }
        _ => false,
    }
}

fn wiki_link(name: &str, literal: &str) -> String {
    let open = start_tag("a", &[("href", "#"), ("class", "wikiPage"), ("title", name)]);
    format!("{open}{}{}", escape(literal), end_tag("a"))
}

fn link_or_image(url: &str, literal: &str) -> String {
    if is_image_url(url) {
        empty_tag("img", &[("src", url), ("alt", literal), ("title", literal)])
    } else {
        let open = start_tag("a", &[("href", url), ("target", "_blank")]);
        format!("{open}{}{}", escape(literal), end_tag("a"))
    }
}
