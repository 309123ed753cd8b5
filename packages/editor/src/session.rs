//! # Edit Session
//!
//! One session owns the Content Model for one (project, moment) pair.
//! Every successful mutation synchronously regenerates the full
//! `{html, css, js}` artifact before control returns to the caller;
//! there is no incremental diffing and no deferred work.

use crate::{Mutation, SessionError};
use momento_model::{GeneratedArtifact, Layout, MomentDocument};
use tracing::debug;

/// Single-owner editing state for one moment.
#[derive(Debug)]
pub struct EditSession {
    pub project_id: String,
    pub moment_id: String,

    /// The authoring model; exclusively owned by this session.
    pub document: MomentDocument,

    /// Derived artifact, kept in sync with the document.
    artifact: GeneratedArtifact,
}

impl EditSession {
    /// Start a session over a fresh, empty document.
    pub fn new(project_id: String, moment_id: String, layout: Layout) -> Self {
        Self::with_document(project_id, moment_id, MomentDocument::new(layout))
    }

    /// Start a session over a reopened moment: the persisted markup is
    /// reparsed into an approximate document first.
    pub fn from_persisted(project_id: String, moment_id: String, html: &str) -> Self {
        let document = momento_parser::parse(html).into_document();
        Self::with_document(project_id, moment_id, document)
    }

    fn with_document(project_id: String, moment_id: String, document: MomentDocument) -> Self {
        let artifact = momento_generator::generate(&document, &moment_id);
        Self {
            project_id,
            moment_id,
            document,
            artifact,
        }
    }

    /// Apply a mutation and eagerly regenerate the artifact. A rejected
    /// mutation leaves both document and artifact untouched.
    pub fn apply(&mut self, mutation: Mutation) -> Result<&GeneratedArtifact, SessionError> {
        mutation.apply(&mut self.document)?;
        debug!(
            project = %self.project_id,
            moment = %self.moment_id,
            "mutation applied, regenerating artifact"
        );
        self.artifact = momento_generator::generate(&self.document, &self.moment_id);
        Ok(&self.artifact)
    }

    /// The current artifact, always consistent with the document.
    pub fn artifact(&self) -> &GeneratedArtifact {
        &self.artifact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use momento_model::{BlockKind, ColumnSide};

    #[test]
    fn test_new_session_has_artifact() {
        let session = EditSession::new("p-1".to_string(), "m-1".to_string(), Layout::Equal);
        assert!(session.artifact().html.contains("col-12 col-lg-6"));
    }

    #[test]
    fn test_apply_regenerates() {
        let mut session = EditSession::new("p-1".to_string(), "m-1".to_string(), Layout::Equal);
        let artifact = session
            .apply(Mutation::InsertBlock {
                column: ColumnSide::Left,
                index: 0,
                kind: BlockKind::Heading {
                    text: "Hola".to_string(),
                    subtitle: String::new(),
                },
            })
            .unwrap();
        assert!(artifact.html.contains("<h1>Hola</h1>"));
    }

    #[test]
    fn test_rejected_mutation_changes_nothing() {
        let mut session = EditSession::new("p-1".to_string(), "m-1".to_string(), Layout::Equal);
        let before = session.artifact().clone();

        let result = session.apply(Mutation::RemoveBlock {
            block_id: momento_model::BlockId("no-existe".to_string()),
        });
        assert!(result.is_err());
        assert_eq!(session.artifact(), &before);
    }
}
