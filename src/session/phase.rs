//! Session lifecycle for a single role.
//!
//! DESIGN
//! ======
//! A role starts `Pending` and becomes `Resolved` exactly once through
//! `resolve`. Login and logout only ever replace a `Resolved` value, so the
//! "storage not read yet" window is a distinct state instead of a flag that
//! could be mistaken for "logged out".

#[cfg(test)]
#[path = "phase_test.rs"]
mod phase_test;

use super::record::SessionRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Persisted storage has not been read yet; authorization is unknown.
    #[default]
    Pending,
    /// Storage was read (or a login/logout happened).
    Resolved(Option<SessionRecord>),
}

impl SessionPhase {
    /// Complete initialization with whatever storage produced.
    ///
    /// Returns `false` and leaves the phase untouched when it already
    /// resolved, so a late init pass cannot clobber a login that won the race.
    pub fn resolve(&mut self, record: Option<SessionRecord>) -> bool {
        if matches!(self, Self::Pending) {
            *self = Self::Resolved(record);
            true
        } else {
            false
        }
    }

    pub fn sign_in(&mut self, record: SessionRecord) {
        *self = Self::Resolved(Some(record));
    }

    pub fn sign_out(&mut self) {
        *self = Self::Resolved(None);
    }

    #[must_use]
    pub fn record(&self) -> Option<&SessionRecord> {
        match self {
            Self::Resolved(record) => record.as_ref(),
            Self::Pending => None,
        }
    }

    #[must_use]
    pub fn is_initializing(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.record().is_some()
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            record: self.record().cloned(),
            initializing: self.is_initializing(),
            is_authenticated: self.is_authenticated(),
        }
    }
}

/// Read-only snapshot handed to guards and pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub record: Option<SessionRecord>,
    pub initializing: bool,
    pub is_authenticated: bool,
}
