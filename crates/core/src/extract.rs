//! Extraction pipeline: solution text -> resolved project records.
//!
//! This is a thin orchestrator that calls each pass module in order.

use crate::ast::ProjectRecord;
use crate::error::SolutionError;
use crate::parser;
use crate::pass2_index;
use crate::pass3_resolve;
use crate::source::{split_lines, FileSystemProvider, SourceProvider};
use std::path::Path;

/// Extract the resolved project records of the solution at `path`,
/// or the first error encountered.
pub fn extract(path: &Path) -> Result<Vec<ProjectRecord>, SolutionError> {
    extract_with_provider(path, &FileSystemProvider)
}

/// Like [`extract`], reading the solution through `provider`.
pub fn extract_with_provider(
    path: &Path,
    provider: &dyn SourceProvider,
) -> Result<Vec<ProjectRecord>, SolutionError> {
    let src = provider
        .read_source(path)
        .map_err(|source| SolutionError::Io {
            path: path.to_owned(),
            source,
        })?;
    extract_str(&src, &path.to_string_lossy())
}

/// Extract from in-memory solution text. `filename` is used for error
/// context only.
pub fn extract_str(src: &str, filename: &str) -> Result<Vec<ProjectRecord>, SolutionError> {
    // Pass 1: scan + parse
    let projects = parser::parse(split_lines(src), filename)?;
    tracing::debug!(file = filename, projects = projects.len(), "solution parsed");

    // Pass 2: id index
    let index = pass2_index::build_index(&projects)?;

    // Pass 3: id -> name resolution
    let records = pass3_resolve::resolve(projects, &index)?;
    tracing::debug!(
        file = filename,
        dependencies = records.iter().map(|r| r.dependencies.len()).sum::<usize>(),
        "dependencies resolved"
    );
    Ok(records)
}
