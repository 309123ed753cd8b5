//! Error types for the editor

use crate::mutations::MutationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Moment {moment_id} of project {project_id} is already being edited")]
    AlreadyOpen {
        project_id: String,
        moment_id: String,
    },

    #[error("No open session for moment {moment_id} of project {project_id}")]
    NotOpen {
        project_id: String,
        moment_id: String,
    },
}
