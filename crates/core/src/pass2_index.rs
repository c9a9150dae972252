//! Pass 2: Project indexing -- build a lookup index by project id
//! and detect duplicate ids within the solution.

use crate::ast::{id_key, Provenance, RawProject};
use crate::error::SolutionError;
use std::collections::HashMap;

/// An indexed project: its name and where it was declared.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub name: String,
    pub prov: Provenance,
}

/// A lookup index over the project list, built once per solution.
pub struct Index {
    /// Map from normalized id (see [`id_key`]) -> project
    pub projects: HashMap<String, IndexEntry>,
}

impl Index {
    /// Look up a project by id, ignoring ASCII case.
    pub fn get(&self, id: &str) -> Option<&IndexEntry> {
        self.projects.get(&id_key(id))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub fn build_index(projects: &[RawProject]) -> Result<Index, SolutionError> {
    let mut idx = Index {
        projects: HashMap::with_capacity(projects.len()),
    };

    for p in projects {
        let key = id_key(&p.id);
        if let Some(first) = idx.projects.get(&key) {
            return Err(SolutionError::DuplicateIdentifier {
                id: p.id.clone(),
                first: first.name.clone(),
                first_prov: first.prov.clone(),
                second: p.name.clone(),
                second_prov: p.prov.clone(),
            });
        }
        idx.projects.insert(
            key,
            IndexEntry {
                name: p.name.clone(),
                prov: p.prov.clone(),
            },
        );
    }

    tracing::debug!(projects = idx.len(), "index built");
    Ok(idx)
}
