//! Keyword search over wiki pages
//!
//! Keywords are plain substrings. A search line like
//! `New "two words" Keyword` yields three keywords; a page is a hit when any
//! of them occurs in its name, its title or one of its content lines.

use crate::html::escape;
use regex::Regex;
use serde::Serialize;

/// A page as seen by the searcher. Where pages come from is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub title: String,
    pub content: String,
}

impl Page {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Page {
            name: name.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub title: String,
    /// First content line containing the matching keyword, if any.
    pub line: Option<String>,
}

/// Splits a search line into keywords.
///
/// Text between double quotes is kept as one keyword; everything else is
/// split on spaces. Empty quoted phrases are dropped. A quote without a
/// closing partner is treated as part of a word.
pub fn split_keywords(input: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    let mut rest = input.trim();

    while let Some(open) = rest.find('"') {
        let Some(close) = rest[open + 1..].find('"').map(|pos| open + 1 + pos) else {
            break;
        };
        push_words(&rest[..open], &mut keywords);
        let phrase = &rest[open + 1..close];
        if !phrase.is_empty() {
            keywords.push(phrase.to_string());
        }
        rest = &rest[close + 1..];
    }
    push_words(rest, &mut keywords);
    keywords
}

fn push_words(text: &str, keywords: &mut Vec<String>) {
    keywords.extend(
        text.split(' ')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string),
    );
}

/// Finds pages containing any of `keywords`.
///
/// Keywords are tried in order and the first one found decides the hit, so
/// each page appears at most once. Hits keep the order of `pages`.
pub fn search<S: AsRef<str>>(pages: &[Page], keywords: &[S]) -> Vec<SearchHit> {
    let hits: Vec<SearchHit> = pages
        .iter()
        .filter_map(|page| {
            keywords
                .iter()
                .map(AsRef::as_ref)
                .filter(|keyword| !keyword.is_empty())
                .find_map(|keyword| match_page(page, keyword))
        })
        .collect();
    tracing::debug!(pages = pages.len(), hits = hits.len(), "searched pages");
    hits
}

fn match_page(page: &Page, keyword: &str) -> Option<SearchHit> {
    let line = page
        .content
        .lines()
        .find(|line| line.contains(keyword))
        .map(str::to_string);
    let in_header = page.name.contains(keyword) || page.title.contains(keyword);

    (in_header || line.is_some()).then(|| SearchHit {
        name: page.name.clone(),
        title: page.title.clone(),
        line,
    })
}

/// Escapes `text` for HTML and wraps every occurrence of `words` in
/// `<strong>`. Where words overlap, the longest one wins.
pub fn emphasize<S: AsRef<str>>(text: &str, words: &[S]) -> String {
    let mut words: Vec<&str> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        return escape(text);
    }
    words.sort_by_key(|word| std::cmp::Reverse(word.len()));

    let pattern = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(matcher) = Regex::new(&pattern) else {
        return escape(text);
    };

    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    for found in matcher.find_iter(text) {
        output.push_str(&escape(&text[last..found.start()]));
        output.push_str("<strong>");
        output.push_str(&escape(found.as_str()));
        output.push_str("</strong>");
        last = found.end();
    }
    output.push_str(&escape(&text[last..]));
    output
}
