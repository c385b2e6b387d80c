//! Fire-and-forget navigation requested by the session core.

/// Login view that denied admin access is sent to.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Issues a navigation without waiting for it to complete.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}
