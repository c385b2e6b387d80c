//! Role-bound login/logout and session initialization.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `AuthService` exists per role, created by `SessionProvider`. It is the
//! only writer of that role's `SessionCell` and storage key, which keeps admin
//! and user sessions from ever touching each other.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::navigation::{ADMIN_LOGIN_PATH, Navigator};
use crate::net::auth_api::{AuthApi, Credentials, LoginError};
use crate::session::{Role, SessionCell, SessionRecord, SessionStore, SessionView};

#[derive(Clone)]
pub struct AuthService<C: SessionCell> {
    role: Role,
    cell: C,
    store: SessionStore,
    api: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
}

impl<C: SessionCell> AuthService<C> {
    pub fn new(
        role: Role,
        cell: C,
        store: SessionStore,
        api: Arc<dyn AuthApi>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self { role, cell, store, api, navigator }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current snapshot. Reactive cells subscribe the caller.
    #[must_use]
    pub fn view(&self) -> SessionView {
        self.cell.get().view()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.cell.get().is_authenticated()
    }

    /// Read persisted storage once and settle the pending phase.
    ///
    /// Later calls find the phase already resolved and change nothing.
    pub fn initialize(&self) {
        let record = self.store.load(self.role);
        let restored = record.is_some();
        let mut applied = false;
        self.cell.update(|phase| applied = phase.resolve(record));
        if applied {
            tracing::debug!(role = %self.role, restored, "session initialized");
        }
    }

    /// Authenticate and, on success, record and persist the session.
    ///
    /// # Errors
    ///
    /// Returns the transport's `LoginError`; session state is untouched.
    pub async fn try_login(&self, email: &str, password: &str) -> Result<SessionRecord, LoginError> {
        let credentials = Credentials::new(email, password);
        match self.api.login(self.role, &credentials).await {
            Ok(()) => {
                let record = SessionRecord::new(email, self.role);
                self.cell.update(|phase| phase.sign_in(record.clone()));
                self.store.save(self.role, &record);
                tracing::info!(role = %self.role, email, "login succeeded");
                Ok(record)
            }
            Err(e) => {
                match &e {
                    LoginError::Rejected { status, .. } => {
                        tracing::warn!(role = %self.role, status, "login rejected");
                    }
                    LoginError::Transport(reason) => {
                        tracing::warn!(role = %self.role, %reason, "login transport failed");
                    }
                }
                Err(e)
            }
        }
    }

    /// `try_login` collapsed to success/failure.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.try_login(email, password).await.is_ok()
    }

    /// Drop the session. Admin logout also sends the app to the login view.
    pub fn logout(&self) {
        self.store.clear(self.role);
        self.cell.update(|phase| phase.sign_out());
        tracing::info!(role = %self.role, "logged out");
        if self.role == Role::Admin {
            self.navigator.navigate(ADMIN_LOGIN_PATH);
        }
    }
}
