//! The one owner of both role sessions.
//!
//! DESIGN
//! ======
//! Construct exactly one `SessionProvider` per application and hand it (or its
//! role handles) to whatever needs session access. A second provider over the
//! same storage would keep its own in-memory phases and drift from the first;
//! that is a wiring error, not a supported mode, and nothing here detects it.
//!
//! Initialization is split from construction so that a UI can render while the
//! phases are still `Pending` and run `initialize` once the durable store is
//! reachable (after hydration in the browser).

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::Arc;

use crate::auth::AuthService;
use crate::navigation::Navigator;
use crate::net::auth_api::AuthApi;
use crate::session::{Role, SessionCell, SessionStore, SharedPhase};
use crate::storage::KeyValueStore;

/// Collaborators shared by both roles.
#[derive(Clone)]
pub struct ProviderDeps {
    pub storage: Arc<dyn KeyValueStore>,
    pub api: Arc<dyn AuthApi>,
    pub navigator: Arc<dyn Navigator>,
}

#[derive(Clone)]
pub struct SessionProvider<C: SessionCell = SharedPhase> {
    admin: AuthService<C>,
    user: AuthService<C>,
}

impl<C: SessionCell> SessionProvider<C> {
    /// Build both roles in the pending phase. Nothing is read yet.
    pub fn new(deps: ProviderDeps, admin_cell: C, user_cell: C) -> Self {
        let store = SessionStore::new(deps.storage);
        let service = |role, cell| {
            AuthService::new(role, cell, store.clone(), deps.api.clone(), deps.navigator.clone())
        };
        Self { admin: service(Role::Admin, admin_cell), user: service(Role::User, user_cell) }
    }

    /// `new` followed by `initialize`.
    pub fn mount(deps: ProviderDeps, admin_cell: C, user_cell: C) -> Self {
        let provider = Self::new(deps, admin_cell, user_cell);
        provider.initialize();
        provider
    }

    /// Run each role's single init pass. Roles settle independently: a
    /// missing or corrupt record for one has no effect on the other.
    pub fn initialize(&self) {
        self.admin.initialize();
        self.user.initialize();
    }

    #[must_use]
    pub fn admin(&self) -> &AuthService<C> {
        &self.admin
    }

    #[must_use]
    pub fn user(&self) -> &AuthService<C> {
        &self.user
    }

    #[must_use]
    pub fn for_role(&self, role: Role) -> &AuthService<C> {
        match role {
            Role::Admin => &self.admin,
            Role::User => &self.user,
        }
    }
}

impl SessionProvider<SharedPhase> {
    /// Mount with mutex-backed cells, for native consumers.
    pub fn mount_shared(deps: ProviderDeps) -> Self {
        Self::mount(deps, SharedPhase::new(), SharedPhase::new())
    }
}
