//! # eventdesk
//!
//! Session and route-protection core for the EventDesk event-management
//! console. Two independent roles (admin, end-user) each own a session that is
//! persisted client-side, restored once at startup, and consulted by route
//! guards before protected views render.
//!
//! The `client` crate binds this core to Leptos signals and browser storage;
//! the `cli` crate drives it from a terminal against a file-backed store.

pub mod auth;
pub mod config;
pub mod guard;
pub mod navigation;
pub mod net;
pub mod provider;
pub mod session;
pub mod storage;

#[cfg(test)]
mod testing;

pub use auth::AuthService;
pub use config::ConsoleConfig;
pub use guard::{GuardRender, GuardState, GuardVariant, RouteGuard};
pub use navigation::{ADMIN_LOGIN_PATH, Navigator};
pub use net::auth_api::{AuthApi, Credentials, LoginError};
pub use provider::{ProviderDeps, SessionProvider};
pub use session::{Role, SessionCell, SessionPhase, SessionRecord, SessionStore, SessionView, SharedPhase};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
