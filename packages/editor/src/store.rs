//! # Session Store
//!
//! Explicit per-controller registry of open editing sessions, keyed by
//! (project, moment). Constructed by the owning controller on startup
//! and torn down with it; never a process-wide singleton.
//!
//! One session per key at a time: the authoring surface's selection gate
//! is enforced here, so two edits of the same moment cannot share a
//! Content Model. Closing a session without saving simply discards the
//! in-memory state; whatever artifact was last persisted is unaffected.

use crate::{EditSession, SessionError};
use momento_model::Layout;
use std::collections::HashMap;
use tracing::info;

type SessionKey = (String, String);

#[derive(Default)]
pub struct SessionStore {
    sessions: HashMap<SessionKey, EditSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Open a session for a new, empty moment.
    pub fn open_new(
        &mut self,
        project_id: &str,
        moment_id: &str,
        layout: Layout,
    ) -> Result<&mut EditSession, SessionError> {
        self.check_free(project_id, moment_id)?;
        info!(project = project_id, moment = moment_id, "opening new moment");
        let session = EditSession::new(project_id.to_string(), moment_id.to_string(), layout);
        Ok(self.insert(session))
    }

    /// Reopen a persisted moment from its saved markup.
    pub fn open_persisted(
        &mut self,
        project_id: &str,
        moment_id: &str,
        html: &str,
    ) -> Result<&mut EditSession, SessionError> {
        self.check_free(project_id, moment_id)?;
        info!(project = project_id, moment = moment_id, "reopening persisted moment");
        let session =
            EditSession::from_persisted(project_id.to_string(), moment_id.to_string(), html);
        Ok(self.insert(session))
    }

    pub fn get_mut(&mut self, project_id: &str, moment_id: &str) -> Option<&mut EditSession> {
        self.sessions
            .get_mut(&(project_id.to_string(), moment_id.to_string()))
    }

    /// Tear down a session, returning it so the caller can persist the
    /// final artifact if it wants to.
    pub fn close(&mut self, project_id: &str, moment_id: &str) -> Result<EditSession, SessionError> {
        info!(project = project_id, moment = moment_id, "closing session");
        self.sessions
            .remove(&(project_id.to_string(), moment_id.to_string()))
            .ok_or_else(|| SessionError::NotOpen {
                project_id: project_id.to_string(),
                moment_id: moment_id.to_string(),
            })
    }

    pub fn open_count(&self) -> usize {
        self.sessions.len()
    }

    fn check_free(&self, project_id: &str, moment_id: &str) -> Result<(), SessionError> {
        if self
            .sessions
            .contains_key(&(project_id.to_string(), moment_id.to_string()))
        {
            return Err(SessionError::AlreadyOpen {
                project_id: project_id.to_string(),
                moment_id: moment_id.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, session: EditSession) -> &mut EditSession {
        let key = (session.project_id.clone(), session.moment_id.clone());
        self.sessions.entry(key).or_insert(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_session_per_moment() {
        let mut store = SessionStore::new();
        store.open_new("p-1", "m-1", Layout::Equal).unwrap();

        let err = store.open_new("p-1", "m-1", Layout::Equal).unwrap_err();
        assert!(matches!(err, SessionError::AlreadyOpen { .. }));

        // A different moment of the same project is independent.
        store.open_new("p-1", "m-2", Layout::Equal).unwrap();
        assert_eq!(store.open_count(), 2);
    }

    #[test]
    fn test_close_discards() {
        let mut store = SessionStore::new();
        store.open_new("p-1", "m-1", Layout::Equal).unwrap();
        store.close("p-1", "m-1").unwrap();
        assert!(store.get_mut("p-1", "m-1").is_none());

        let err = store.close("p-1", "m-1").unwrap_err();
        assert!(matches!(err, SessionError::NotOpen { .. }));
    }
}
