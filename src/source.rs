//! Tag source abstraction
//!
//! The resolver does not run version-control commands itself; whatever
//! lists the tags for a commit sits behind the [TagSource] trait. The crate
//! ships an in-memory implementation for tests and programmatic use, and a
//! reader-backed one for piping `git tag --contains` output into the CLI.
//!
//! Repository-specific tag prefixes (older tags in some repositories carry
//! the repository name) are stripped here, before tags reach the resolver.

use std::io::BufRead;

use crate::error::{FindFixError, Result};

/// Supplier of raw tag strings for one query
pub trait TagSource {
    /// List raw tag strings in source order
    fn list_tags(&mut self) -> Result<Vec<String>>;
}

/// In-memory tag source for tests and programmatic callers
#[derive(Debug, Clone, Default)]
pub struct StaticTagSource {
    tags: Vec<String>,
}

impl StaticTagSource {
    pub fn new(tags: Vec<String>) -> Self {
        StaticTagSource { tags }
    }
}

impl TagSource for StaticTagSource {
    fn list_tags(&mut self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

/// Reads one tag per line from any buffered reader (e.g. stdin).
///
/// Blank lines are skipped and surrounding whitespace is trimmed, matching
/// what version-control tag listings look like after shell piping.
pub struct ReaderTagSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ReaderTagSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderTagSource { reader }
    }
}

impl<R: BufRead> TagSource for ReaderTagSource<R> {
    fn list_tags(&mut self) -> Result<Vec<String>> {
        let mut tags = Vec::new();
        for line in self.reader.by_ref().lines() {
            let line = line
                .map_err(|e| FindFixError::source(format!("failed to read tag list: {}", e)))?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                tags.push(trimmed.to_string());
            }
        }
        Ok(tags)
    }
}

/// Remove the first matching repository prefix from a tag, if any
pub fn strip_repository_prefix(tag: &str, prefixes: &[String]) -> String {
    for prefix in prefixes {
        if let Some(stripped) = tag.strip_prefix(prefix.as_str()) {
            return stripped.to_string();
        }
    }
    tag.to_string()
}
