//! slngraph-core: project dependency extraction from Visual Studio
//! solution files.
//!
//! Provides the three-pass pipeline from `.sln` text to resolved project
//! records:
//!
//! 1. scan + parse ([`lexer`], [`parser`]) -- raw project blocks with
//!    dependency ids
//! 2. index ([`pass2_index`]) -- id lookup, duplicate id detection
//! 3. resolve ([`pass3_resolve`]) -- dependency ids replaced by names
//!
//! # Public API
//!
//! - [`extract()`] / [`extract_str()`] -- run the full pipeline
//! - [`ProjectRecord`] -- resolved output record
//! - [`DependencyGraph`] -- nodes and edges for renderers
//! - [`SolutionError`] -- extraction error type

pub mod ast;
pub mod error;
pub mod extract;
pub mod graph;
pub mod lexer;
pub mod parser;
pub mod pass2_index;
pub mod pass3_resolve;
pub mod source;

// ── Convenience re-exports: key types ────────────────────────────────

pub use ast::{ProjectRecord, Provenance, RawProject};
pub use error::SolutionError;
pub use graph::DependencyGraph;
pub use pass2_index::Index;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use extract::{extract, extract_str, extract_with_provider};
pub use parser::parse;
pub use pass2_index::build_index;
pub use pass3_resolve::resolve;
