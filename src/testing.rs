//! Test doubles shared by unit tests across modules.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::navigation::Navigator;
use crate::net::auth_api::{AuthApi, Credentials, LoginError};
use crate::session::Role;
use crate::storage::{KeyValueStore, StorageError};

/// Backend whose every operation faults.
pub(crate) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_owned()))
    }
}

/// Navigator that records every requested path.
#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub(crate) fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_owned());
    }
}

/// Auth API answering every login with a fixed outcome.
pub(crate) struct StubAuthApi {
    outcome: Result<(), LoginError>,
    calls: Mutex<Vec<(Role, String)>>,
}

impl StubAuthApi {
    pub(crate) fn accepting() -> Self {
        Self { outcome: Ok(()), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn failing(err: LoginError) -> Self {
        Self { outcome: Err(err), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> Vec<(Role, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl AuthApi for StubAuthApi {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<(), LoginError> {
        self.calls.lock().unwrap().push((role, credentials.email.clone()));
        self.outcome.clone()
    }
}

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub(crate) async fn spawn_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port that nothing listens on.
pub(crate) async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
