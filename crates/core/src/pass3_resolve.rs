//! Pass 3: Identifier resolution -- replace every raw dependency id with
//! the name of the project that declares it.
//!
//! Runs after the whole solution has been parsed, so a project may depend
//! on one declared later in the file.

use crate::ast::{ProjectRecord, RawProject};
use crate::error::SolutionError;
use crate::pass2_index::Index;

pub fn resolve(
    projects: Vec<RawProject>,
    index: &Index,
) -> Result<Vec<ProjectRecord>, SolutionError> {
    let mut resolved = Vec::with_capacity(projects.len());

    for p in projects {
        let mut dependencies = Vec::with_capacity(p.dependencies.len());
        for dep in &p.dependencies {
            match index.get(dep) {
                Some(entry) => dependencies.push(entry.name.clone()),
                None => {
                    return Err(SolutionError::UnresolvedDependency {
                        id: dep.clone(),
                        project: p.name,
                        prov: p.prov,
                    })
                }
            }
        }
        resolved.push(ProjectRecord {
            name: p.name,
            id: p.id,
            dependencies,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Provenance;
    use crate::pass2_index::build_index;

    fn raw(name: &str, id: &str, deps: &[&str]) -> RawProject {
        let mut p = RawProject::new(
            name,
            id,
            Provenance {
                file: "test.sln".to_owned(),
                line: 1,
            },
        );
        p.dependencies = deps.iter().map(|d| d.to_string()).collect();
        p
    }

    fn run(projects: Vec<RawProject>) -> Result<Vec<ProjectRecord>, SolutionError> {
        let index = build_index(&projects)?;
        resolve(projects, &index)
    }

    #[test]
    fn forward_references_resolve() {
        let records = run(vec![raw("A", "{1}", &["{2}"]), raw("B", "{2}", &[])]).unwrap();
        assert_eq!(records[0].dependencies, vec!["B"]);
        assert!(records[1].dependencies.is_empty());
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let records = run(vec![
            raw("A", "{1}", &["{3}", "{2}", "{3}"]),
            raw("B", "{2}", &[]),
            raw("C", "{3}", &[]),
        ])
        .unwrap();
        assert_eq!(records[0].dependencies, vec!["C", "B", "C"]);
    }

    #[test]
    fn self_dependency_resolves_to_own_name() {
        let records = run(vec![raw("A", "{1}", &["{1}"])]).unwrap();
        assert_eq!(records[0].dependencies, vec!["A"]);
    }

    #[test]
    fn unknown_id_fails_with_owner() {
        let err = run(vec![raw("A", "{1}", &["{2}"]), raw("B", "{3}", &[])])
            .err()
            .expect("unknown id must fail");
        match err {
            SolutionError::UnresolvedDependency { id, project, .. } => {
                assert_eq!(id, "{2}");
                assert_eq!(project, "A");
            }
            other => panic!("expected UnresolvedDependency, got {:?}", other),
        }
    }

    #[test]
    fn record_keeps_declared_id_spelling() {
        let records = run(vec![raw("A", "{abc}", &[]), raw("B", "{2}", &["{ABC}"])]).unwrap();
        assert_eq!(records[0].id, "{abc}");
        assert_eq!(records[1].dependencies, vec!["A"]);
    }
}
