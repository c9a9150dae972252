//! Solution parser: a small state machine driven one scanned line at a time.
//! Produces raw project records with unresolved dependency ids; resolution
//! is a separate pass.

use crate::ast::{Provenance, RawProject};
use crate::error::SolutionError;
use crate::lexer::{self, Spanned, Token};

/// Name of the only section whose entries are project dependencies.
pub const DEPENDENCY_SECTION: &str = "ProjectDependencies";

// ──────────────────────────────────────────────
// Parse state
// ──────────────────────────────────────────────

#[derive(Debug)]
enum Phase {
    Idle,
    InProject(RawProject),
    InSection(RawProject, String),
}

struct ParseState {
    phase: Phase,
    completed: Vec<RawProject>,
    filename: String,
}

impl ParseState {
    fn new(filename: &str) -> Self {
        ParseState {
            phase: Phase::Idle,
            completed: Vec::new(),
            filename: filename.to_owned(),
        }
    }

    fn step(&mut self, s: Spanned) {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        self.phase = match (phase, s.token) {
            (Phase::Idle, Token::ProjectOpen { name, id }) => {
                tracing::trace!(line = s.line, project = %name, "project opened");
                let prov = Provenance {
                    file: self.filename.clone(),
                    line: s.line,
                };
                Phase::InProject(RawProject::new(name, id, prov))
            }
            (Phase::Idle, _) => Phase::Idle,

            (Phase::InProject(project), Token::SectionOpen { name }) => {
                tracing::trace!(line = s.line, section = %name, "section opened");
                Phase::InSection(project, name)
            }
            (Phase::InProject(project), Token::ProjectClose) => {
                tracing::debug!(
                    project = %project.name,
                    dependencies = project.dependencies.len(),
                    "project completed"
                );
                self.completed.push(project);
                Phase::Idle
            }
            (phase @ Phase::InProject(_), _) => phase,

            (Phase::InSection(project, _), Token::SectionClose) => Phase::InProject(project),
            (Phase::InSection(mut project, section), Token::DependencyEntry { depends_on, .. })
                if section == DEPENDENCY_SECTION =>
            {
                project.dependencies.push(depends_on);
                Phase::InSection(project, section)
            }
            (phase @ Phase::InSection(..), _) => phase,
        };
    }

    fn finish(self) -> Result<Vec<RawProject>, SolutionError> {
        match self.phase {
            Phase::Idle => Ok(self.completed),
            Phase::InProject(project) => Err(SolutionError::UnterminatedProject {
                project: project.name,
                section: None,
                prov: project.prov,
            }),
            Phase::InSection(project, section) => Err(SolutionError::UnterminatedProject {
                project: project.name,
                section: Some(section),
                prov: project.prov,
            }),
        }
    }
}

// ──────────────────────────────────────────────
// Entry point
// ──────────────────────────────────────────────

/// Parse solution lines into raw project records, in declaration order.
///
/// `filename` is only used for provenance. Fails with
/// [`SolutionError::UnterminatedProject`] if input ends inside a project.
pub fn parse<I, S>(lines: I, filename: &str) -> Result<Vec<RawProject>, SolutionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParseState::new(filename);
    for spanned in lexer::lex(lines) {
        state.step(spanned);
    }
    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_src(src: &str) -> Result<Vec<RawProject>, SolutionError> {
        parse(src.lines(), "test.sln")
    }

    fn deps(p: &RawProject) -> Vec<&str> {
        p.dependencies.iter().map(String::as_str).collect()
    }

    #[test]
    fn collects_dependencies_in_declaration_order() {
        let src = r#"
Project("{X}") = "A", "a.vcxproj", "{1}"
	ProjectSection(ProjectDependencies) = postProject
		{3} = {3}
		{2} = {2}
		{3} = {3}
	EndProjectSection
EndProject
"#;
        let projects = parse_src(src).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "A");
        assert_eq!(projects[0].id, "{1}");
        assert_eq!(deps(&projects[0]), vec!["{3}", "{2}", "{3}"]);
        assert_eq!(projects[0].prov.line, 2);
    }

    #[test]
    fn entries_outside_dependency_section_are_ignored() {
        let src = r#"
Project("{X}") = "Web", "web.csproj", "{1}"
	ProjectSection(WebsiteProperties) = preProject
		{1} = {2}
	EndProjectSection
	{1} = {3}
EndProject
"#;
        let projects = parse_src(src).unwrap();
        assert!(projects[0].dependencies.is_empty());
    }

    #[test]
    fn dependency_entries_outside_projects_are_ignored() {
        let src = r#"
{1} = {2}
ProjectSection(ProjectDependencies) = postProject
EndProjectSection
EndProject
Project("{X}") = "A", "a.vcxproj", "{1}"
EndProject
"#;
        let projects = parse_src(src).unwrap();
        assert_eq!(projects.len(), 1);
        assert!(projects[0].dependencies.is_empty());
    }

    #[test]
    fn project_open_inside_project_is_ignored() {
        let src = r#"
Project("{X}") = "A", "a.vcxproj", "{1}"
Project("{X}") = "B", "b.vcxproj", "{2}"
EndProject
"#;
        let projects = parse_src(src).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "A");
    }

    #[test]
    fn end_project_inside_section_does_not_close_project() {
        let src = r#"
Project("{X}") = "A", "a.vcxproj", "{1}"
	ProjectSection(ProjectDependencies) = postProject
EndProject
"#;
        match parse_src(src) {
            Err(SolutionError::UnterminatedProject {
                project,
                section,
                prov,
            }) => {
                assert_eq!(project, "A");
                assert_eq!(section.as_deref(), Some("ProjectDependencies"));
                assert_eq!(prov.line, 2);
            }
            other => panic!("expected UnterminatedProject, got {:?}", other),
        }
    }

    #[test]
    fn eof_inside_project_is_unterminated() {
        let src = "Project(\"{X}\") = \"A\", \"a.vcxproj\", \"{1}\"\n";
        match parse_src(src) {
            Err(SolutionError::UnterminatedProject { project, section, .. }) => {
                assert_eq!(project, "A");
                assert_eq!(section, None);
            }
            other => panic!("expected UnterminatedProject, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_yields_no_projects() {
        assert!(parse_src("").unwrap().is_empty());
    }

    #[test]
    fn separate_parses_share_no_state() {
        let open_only = "Project(\"{X}\") = \"A\", \"a.vcxproj\", \"{1}\"";
        assert!(parse_src(open_only).is_err());
        let closed = "Project(\"{X}\") = \"B\", \"b.vcxproj\", \"{2}\"\nEndProject";
        let projects = parse_src(closed).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "B");
    }
}
