use std::sync::Arc;

use super::*;
use crate::session::SharedPhase;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::testing::{FailingStore, RecordingNavigator, StubAuthApi};

struct Fixture {
    backend: Arc<MemoryStore>,
    navigator: RecordingNavigator,
    api: Arc<StubAuthApi>,
}

impl Fixture {
    fn new(api: StubAuthApi) -> Self {
        Self { backend: Arc::new(MemoryStore::new()), navigator: RecordingNavigator::default(), api: Arc::new(api) }
    }

    fn service(&self, role: Role) -> AuthService<SharedPhase> {
        AuthService::new(
            role,
            SharedPhase::new(),
            SessionStore::new(self.backend.clone()),
            self.api.clone(),
            Arc::new(self.navigator.clone()),
        )
    }
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_record_resolves_unauthenticated() {
    let fx = Fixture::new(StubAuthApi::accepting());
    let admin = fx.service(Role::Admin);
    assert!(admin.view().initializing);

    admin.initialize();

    let view = admin.view();
    assert!(!view.initializing);
    assert!(!view.is_authenticated);
}

#[test]
fn initialize_restores_persisted_record() {
    let fx = Fixture::new(StubAuthApi::accepting());
    fx.backend.set("userAuth", r#"{"email":"u@x.com","role":"user"}"#).unwrap();
    let user = fx.service(Role::User);

    user.initialize();

    assert_eq!(user.view().record, Some(SessionRecord::new("u@x.com", Role::User)));
}

#[test]
fn initialize_twice_does_not_clobber_later_logout() {
    let fx = Fixture::new(StubAuthApi::accepting());
    fx.backend.set("userAuth", r#"{"email":"u@x.com","role":"user"}"#).unwrap();
    let user = fx.service(Role::User);
    user.initialize();
    user.logout();
    fx.backend.set("userAuth", r#"{"email":"u@x.com","role":"user"}"#).unwrap();

    user.initialize();

    assert!(!user.is_authenticated());
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_success_sets_state_and_persists() {
    let fx = Fixture::new(StubAuthApi::accepting());
    let admin = fx.service(Role::Admin);
    admin.initialize();

    assert!(admin.login("a@x.com", "pw").await);

    assert!(admin.is_authenticated());
    assert_eq!(SessionStore::new(fx.backend.clone()).load(Role::Admin), Some(SessionRecord::new("a@x.com", Role::Admin)));
    assert_eq!(fx.api.calls(), vec![(Role::Admin, "a@x.com".to_owned())]);
}

#[tokio::test]
async fn login_rejection_leaves_state_and_storage_untouched() {
    let fx = Fixture::new(StubAuthApi::failing(LoginError::Rejected { status: 401, message: None }));
    let user = fx.service(Role::User);
    user.initialize();

    assert!(!user.login("a@x.com", "wrong").await);

    assert!(!user.is_authenticated());
    assert_eq!(fx.backend.get("userAuth").unwrap(), None);
}

#[tokio::test]
async fn try_login_surfaces_transport_failure() {
    let fx = Fixture::new(StubAuthApi::failing(LoginError::Transport("offline".to_owned())));
    let user = fx.service(Role::User);

    let err = user.try_login("a@x.com", "pw").await.unwrap_err();

    assert_eq!(err, LoginError::Transport("offline".to_owned()));
    assert!(user.view().initializing);
}

#[tokio::test]
async fn login_succeeds_even_when_storage_faults() {
    let api: Arc<dyn AuthApi> = Arc::new(StubAuthApi::accepting());
    let user = AuthService::new(
        Role::User,
        SharedPhase::new(),
        SessionStore::new(Arc::new(FailingStore)),
        api,
        Arc::new(RecordingNavigator::default()),
    );

    assert!(user.login("u@x.com", "pw").await);
    assert!(user.is_authenticated());
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn admin_logout_clears_and_navigates_to_login() {
    let fx = Fixture::new(StubAuthApi::accepting());
    let admin = fx.service(Role::Admin);
    admin.login("a@x.com", "pw").await;

    admin.logout();

    assert!(!admin.is_authenticated());
    assert_eq!(fx.backend.get("adminAuth").unwrap(), None);
    assert_eq!(fx.navigator.paths(), vec![ADMIN_LOGIN_PATH.to_owned()]);
}

#[tokio::test]
async fn user_logout_never_navigates() {
    let fx = Fixture::new(StubAuthApi::accepting());
    let user = fx.service(Role::User);
    user.login("u@x.com", "pw").await;

    user.logout();

    assert!(!user.is_authenticated());
    assert!(fx.navigator.paths().is_empty());
}
