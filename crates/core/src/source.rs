//! Source provider abstraction for filesystem-independent extraction.
//!
//! The [`SourceProvider`] trait abstracts reading the solution text so the
//! pipeline can run against the filesystem or against in-memory sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Trait that abstracts file I/O for the extraction pipeline.
pub trait SourceProvider {
    /// Read the source text for a given path, decoded as UTF-8.
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error>;
}

/// Default filesystem-backed source provider.
///
/// Delegates to `std::fs::read_to_string`, so input that is not valid UTF-8
/// surfaces as an `InvalidData` error.
pub struct FileSystemProvider;

impl SourceProvider for FileSystemProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        std::fs::read_to_string(path)
    }
}

/// In-memory source provider for testing.
pub struct InMemoryProvider {
    files: HashMap<PathBuf, String>,
}

impl InMemoryProvider {
    pub fn new(files: HashMap<PathBuf, String>) -> Self {
        Self { files }
    }
}

impl SourceProvider for InMemoryProvider {
    fn read_source(&self, path: &Path) -> Result<String, std::io::Error> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )
        })
    }
}

/// Split solution text into lines, accepting `\r\n`, `\n` and lone `\r`
/// terminators. A leading byte-order mark is dropped.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines {
        rest: text.strip_prefix('\u{FEFF}').unwrap_or(text),
    }
}

/// Iterator returned by [`split_lines`].
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &self.rest[..pos];
                let after = &self.rest[pos..];
                let skip = if after.starts_with("\r\n") { 2 } else { 1 };
                self.rest = &after[skip..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
