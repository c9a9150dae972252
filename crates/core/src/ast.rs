//! Shared record types for the solution extractor.
//!
//! `RawProject` is produced by the parser and consumed by the index and
//! resolution passes; `ProjectRecord` is the resolved, public output.

use serde::Serialize;
use std::fmt;

// ──────────────────────────────────────────────
// Provenance
// ──────────────────────────────────────────────

/// Where a project was declared: source display name and the 1-based line
/// of its `Project(...)` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provenance {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

// ──────────────────────────────────────────────
// Raw records (pre-resolution)
// ──────────────────────────────────────────────

/// A project block as read from the solution, with dependencies still
/// expressed as raw brace-delimited ids in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProject {
    pub name: String,
    pub id: String,
    pub dependencies: Vec<String>,
    pub prov: Provenance,
}

impl RawProject {
    pub fn new(name: impl Into<String>, id: impl Into<String>, prov: Provenance) -> Self {
        RawProject {
            name: name.into(),
            id: id.into(),
            dependencies: Vec::new(),
            prov,
        }
    }
}

// ──────────────────────────────────────────────
// Resolved records
// ──────────────────────────────────────────────

/// A fully resolved project: every dependency is the name of another
/// project in the same solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub name: String,
    /// Identifier as written in the solution. Only kept for display.
    pub id: String,
    pub dependencies: Vec<String>,
}

/// Normalize a project identifier for lookup. Solution ids are GUIDs, which
/// compare case-insensitively.
pub fn id_key(id: &str) -> String {
    id.to_ascii_uppercase()
}
