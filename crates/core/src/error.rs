use crate::ast::Provenance;
use std::path::PathBuf;

/// A fatal extraction error. Unrecognized lines are never errors; every
/// variant here aborts the parse of the current solution.
#[derive(Debug, thiserror::Error)]
pub enum SolutionError {
    /// End of input reached while a project (or one of its sections) was
    /// still open.
    #[error(
        "{prov}: project '{project}' is not terminated{}",
        section_suffix(.section)
    )]
    UnterminatedProject {
        project: String,
        section: Option<String>,
        prov: Provenance,
    },

    /// A dependency id that no project in the solution declares.
    #[error("{prov}: project '{project}' depends on unknown project id {id}")]
    UnresolvedDependency {
        id: String,
        project: String,
        prov: Provenance,
    },

    /// Two projects declared with the same id.
    #[error(
        "{second_prov}: duplicate project id {id}: '{second}' reuses the id of '{first}' declared at line {}",
        .first_prov.line
    )]
    DuplicateIdentifier {
        id: String,
        first: String,
        first_prov: Provenance,
        second: String,
        second_prov: Provenance,
    },

    /// The solution source could not be read (missing file, not UTF-8, ...).
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn section_suffix(section: &Option<String>) -> String {
    match section {
        Some(s) => format!(" (section '{}' still open)", s),
        None => String::new(),
    }
}

impl SolutionError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SolutionError::UnterminatedProject { .. } => "unterminated_project",
            SolutionError::UnresolvedDependency { .. } => "unresolved_dependency",
            SolutionError::DuplicateIdentifier { .. } => "duplicate_identifier",
            SolutionError::Io { .. } => "io",
        }
    }

    /// Serialize to a flat JSON object. All fields are always present
    /// (null when not applicable).
    pub fn to_json_value(&self) -> serde_json::Value {
        let (file, line, project, id) = match self {
            SolutionError::UnterminatedProject { project, prov, .. } => (
                Some(prov.file.clone()),
                Some(prov.line),
                Some(project.as_str()),
                None,
            ),
            SolutionError::UnresolvedDependency { id, project, prov } => (
                Some(prov.file.clone()),
                Some(prov.line),
                Some(project.as_str()),
                Some(id.as_str()),
            ),
            SolutionError::DuplicateIdentifier {
                id,
                second,
                second_prov,
                ..
            } => (
                Some(second_prov.file.clone()),
                Some(second_prov.line),
                Some(second.as_str()),
                Some(id.as_str()),
            ),
            SolutionError::Io { path, .. } => {
                (Some(path.display().to_string()), None, None, None)
            }
        };
        serde_json::json!({
            "file":    file,
            "id":      id,
            "kind":    self.kind(),
            "line":    line,
            "message": self.to_string(),
            "project": project,
        })
    }
}
