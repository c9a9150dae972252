//! Grammar scanner: classifies single solution lines into tokens.
//!
//! Only the five line shapes that carry project and dependency information
//! are recognized. Everything else in a solution (format header, `Global`
//! blocks, configuration mappings, solution folders) yields no token.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `Project("{TYPE}") = "NAME", "PATH", "{ID}"`
    ProjectOpen { name: String, id: String },
    /// `ProjectSection(NAME) = postProject`
    SectionOpen { name: String },
    /// `{ID-A} = {ID-B}` -- `depends_on` is ID-B; `id` is conventionally the
    /// enclosing project's own id and is not otherwise used.
    DependencyEntry { id: String, depends_on: String },
    /// `EndProjectSection`
    SectionClose,
    /// `EndProject`
    ProjectClose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
}

// The path must name a project file (`.csproj`, `.vcxproj`, ...); solution
// folders repeat their name as the path and never match.
static PROJECT_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*Project\("\{[^}]+\}"\)\s*=\s*"([^"]+)",\s*"([^"]+proj)",\s*"(\{[^}]+\})""#)
        .expect("project regex")
});

static SECTION_OPEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*ProjectSection\((\w+)\)\s*=\s*(?:pre|post)Project").expect("section regex")
});

static DEPENDENCY_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\{[A-Za-z0-9-]+\})\s*=\s*(\{[A-Za-z0-9-]+\})").expect("dependency regex")
});

static SECTION_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*EndProjectSection\b").expect("end section regex"));

// Anything may follow the keyword; `EndProjectSection` has no word boundary
// after `EndProject` and is matched earlier as a section close anyway.
static PROJECT_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*EndProject\b").expect("end project regex"));

/// Classify one line. Patterns are tried in priority order and the first
/// match wins; a line matching none of them yields `None`.
pub fn scan_line(line: &str) -> Option<Token> {
    if let Some(caps) = PROJECT_OPEN.captures(line) {
        return Some(Token::ProjectOpen {
            name: caps[1].to_owned(),
            id: caps[3].to_owned(),
        });
    }
    if let Some(caps) = SECTION_OPEN.captures(line) {
        return Some(Token::SectionOpen {
            name: caps[1].to_owned(),
        });
    }
    if let Some(caps) = DEPENDENCY_ENTRY.captures(line) {
        return Some(Token::DependencyEntry {
            id: caps[1].to_owned(),
            depends_on: caps[2].to_owned(),
        });
    }
    if SECTION_CLOSE.is_match(line) {
        return Some(Token::SectionClose);
    }
    if PROJECT_CLOSE.is_match(line) {
        return Some(Token::ProjectClose);
    }
    None
}

/// Scan a sequence of lines, yielding only the classified ones together
/// with their 1-based line numbers.
pub fn lex<I, S>(lines: I) -> impl Iterator<Item = Spanned>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().enumerate().filter_map(|(i, line)| {
        let line_no = (i + 1) as u32;
        let token = scan_line(line.as_ref());
        match &token {
            Some(t) => tracing::trace!(line = line_no, token = ?t, "scanned"),
            None => tracing::trace!(line = line_no, "unrecognized line skipped"),
        }
        token.map(|token| Spanned {
            token,
            line: line_no,
        })
    })
}
