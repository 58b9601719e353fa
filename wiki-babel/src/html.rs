//! Small HTML building helpers shared by the inline and block formatters.
//!
//! Output is a fragment, never a full document. Attribute values are quoted
//! with single quotes and escaped exactly once.

/// Escapes the five XHTML special characters.
///
/// Not idempotent: escaping an already escaped string escapes the `&` again.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Counts how many times `marker` repeats at the beginning of `text`.
pub fn count_start_char(text: &str, marker: char) -> usize {
    text.chars().take_while(|ch| *ch == marker).count()
}

/// Builds `<name a='v' ...>`.
pub fn start_tag(name: &str, attributes: &[(&str, &str)]) -> String {
    let mut tag = format!("<{name}");
    push_attributes(&mut tag, attributes);
    tag.push('>');
    tag
}

/// Builds `<name a='v' .../>`.
pub fn empty_tag(name: &str, attributes: &[(&str, &str)]) -> String {
    let mut tag = format!("<{name}");
    push_attributes(&mut tag, attributes);
    tag.push_str("/>");
    tag
}

pub fn end_tag(name: &str) -> String {
    format!("</{name}>")
}

/// Wraps already formatted HTML in an element without attributes.
pub fn element(name: &str, inner: &str) -> String {
    format!("<{name}>{inner}</{name}>")
}

fn push_attributes(tag: &mut String, attributes: &[(&str, &str)]) {
    for (name, value) in attributes {
        tag.push(' ');
        tag.push_str(&escape(name));
        tag.push_str("='");
        tag.push_str(&escape(value));
        tag.push('\'');
    }
}
