//! Loading pages from a directory for search.
//!
//! Every file below the directory whose extension is in the configured list
//! becomes a [`Page`]. The page name is the path relative to the directory,
//! without extension and with `/` separators; the title is the text of the
//! first heading line, or the name when the page has no heading.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use wiki_babel::search::Page;

pub fn load_pages(dir: &Path, extensions: &[String]) -> io::Result<Vec<Page>> {
    let mut files = Vec::new();
    collect_files(dir, extensions, &mut files)?;
    files.sort();

    let mut pages = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path)?;
        let name = page_name(dir, &path);
        let title = page_title(&content).unwrap_or_else(|| name.clone());
        pages.push(Page::new(name, title, content));
    }
    tracing::debug!(dir = %dir.display(), pages = pages.len(), "loaded pages");
    Ok(pages)
}

fn collect_files(dir: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, extensions, files)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
        {
            files.push(path);
        }
    }
    Ok(())
}

fn page_name(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/")
}

fn page_title(content: &str) -> Option<String> {
    content
        .lines()
        .filter(|line| line.starts_with('!'))
        .map(|line| line.trim_start_matches('!').trim())
        .find(|title| !title.is_empty())
        .map(str::to_string)
}
