//! Directed dependency graph derived from resolved project records.

use crate::ast::ProjectRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Nodes are project names; there is one edge `(project, dependency)` per
/// declared dependency, duplicates and self-edges included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl DependencyGraph {
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        let nodes = records.iter().map(|r| r.name.clone()).collect();
        let edges = records
            .iter()
            .flat_map(|r| {
                r.dependencies
                    .iter()
                    .map(move |d| (r.name.clone(), d.clone()))
            })
            .collect();
        DependencyGraph { nodes, edges }
    }

    /// Projects no other project depends on (self-edges ignored).
    pub fn roots(&self) -> Vec<&str> {
        let depended_on: HashSet<&str> = self
            .edges
            .iter()
            .filter(|(from, to)| from != to)
            .map(|(_, to)| to.as_str())
            .collect();
        self.nodes
            .iter()
            .map(String::as_str)
            .filter(|n| !depended_on.contains(n))
            .collect()
    }

    /// Projects without dependencies (self-edges ignored).
    pub fn leaves(&self) -> Vec<&str> {
        let depending: HashSet<&str> = self
            .edges
            .iter()
            .filter(|(from, to)| from != to)
            .map(|(from, _)| from.as_str())
            .collect();
        self.nodes
            .iter()
            .map(String::as_str)
            .filter(|n| !depending.contains(n))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, deps: &[&str]) -> ProjectRecord {
        ProjectRecord {
            name: name.to_owned(),
            id: format!("{{{}}}", name),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn edge(from: &str, to: &str) -> (String, String) {
        (from.to_owned(), to.to_owned())
    }

    #[test]
    fn edges_follow_record_and_dependency_order() {
        let g = DependencyGraph::from_records(&[
            record("App", &["Core", "Ui", "Core"]),
            record("Ui", &["Core"]),
            record("Core", &[]),
        ]);
        assert_eq!(g.nodes, vec!["App", "Ui", "Core"]);
        assert_eq!(
            g.edges,
            vec![
                edge("App", "Core"),
                edge("App", "Ui"),
                edge("App", "Core"),
                edge("Ui", "Core"),
            ]
        );
        assert_eq!(g.roots(), vec!["App"]);
        assert_eq!(g.leaves(), vec!["Core"]);
    }

    #[test]
    fn self_edges_are_kept_but_do_not_affect_roots() {
        let g = DependencyGraph::from_records(&[record("Loop", &["Loop"])]);
        assert_eq!(g.edges, vec![edge("Loop", "Loop")]);
        assert_eq!(g.roots(), vec!["Loop"]);
        assert_eq!(g.leaves(), vec!["Loop"]);
    }

    #[test]
    fn serializes_edges_as_pairs() {
        let g = DependencyGraph::from_records(&[record("A", &["B"]), record("B", &[])]);
        let v = serde_json::to_value(&g).unwrap();
        assert_eq!(v["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(v["edges"], serde_json::json!([["A", "B"]]));
    }
}
