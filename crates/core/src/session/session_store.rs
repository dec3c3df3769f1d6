use std::sync::RwLock;

use super::session_model::Session;
use super::session_traits::SessionStore;
use crate::errors::{Error, Result};

/// Process-local session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    current: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            current: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .map_err(|e| Error::Session(e.to_string()))
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .current
            .write()
            .map_err(|e| Error::Session(e.to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .current
            .write()
            .map_err(|e| Error::Session(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}
