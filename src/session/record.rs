//! Role-tagged identity records persisted for each logged-in principal.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Authentication role. Sessions of different roles never interact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::User];

    /// Key under which this role's record is persisted.
    #[must_use]
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Admin => "adminAuth",
            Self::User => "userAuth",
        }
    }

    /// REST path that authenticates this role.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => "/api/v1/admin/login",
            Self::User => "/api/v1/auth/login",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted identity + role pair for a logged-in principal.
///
/// The email is whatever the caller submitted at login; the backend is not
/// required to echo it back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub email: String,
    pub role: Role,
}

impl SessionRecord {
    #[must_use]
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self { email: email.into(), role }
    }
}
