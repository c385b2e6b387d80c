//! Role-keyed persistence of session records.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Backend faults and unparsable values are
//! logged and collapse to "no session", so a broken store can never block
//! startup or logout.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use super::record::{Role, SessionRecord};
use crate::storage::KeyValueStore;

#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Persist `record` under `role`'s key. Faults are logged and dropped.
    pub fn save(&self, role: Role, record: &SessionRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(%role, error = %e, "session record encode failed");
                return;
            }
        };
        if let Err(e) = self.backend.set(role.storage_key(), &raw) {
            tracing::warn!(%role, error = %e, "session save failed");
        }
    }

    /// Restore `role`'s record; `None` when absent, unreadable, or malformed.
    #[must_use]
    pub fn load(&self, role: Role) -> Option<SessionRecord> {
        let raw = match self.backend.get(role.storage_key()) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(%role, error = %e, "session load failed");
                return None;
            }
        };
        match serde_json::from_str::<SessionRecord>(&raw) {
            Ok(record) if record.role == role => Some(record),
            Ok(record) => {
                tracing::warn!(%role, stored_role = %record.role, "session record role mismatch; ignoring");
                None
            }
            Err(e) => {
                tracing::warn!(%role, error = %e, "session record unparsable; ignoring");
                None
            }
        }
    }

    pub fn clear(&self, role: Role) {
        if let Err(e) = self.backend.remove(role.storage_key()) {
            tracing::warn!(%role, error = %e, "session clear failed");
        }
    }
}
